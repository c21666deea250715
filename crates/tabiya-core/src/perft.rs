//! Perft (performance test) for move generation correctness verification.

use crate::color::Color;
use crate::error::BoardError;
use crate::make_move::move_piece;
use crate::movegen::legal_for_color;
use crate::position::Position;

/// Count the leaf nodes `depth` plies below `position` with `color` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying any of them.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if a side to move has no king.
pub fn perft(position: &Position, color: Color, depth: usize) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_for_color(color, position)?;

    if depth == 1 {
        return Ok(moves.iter().map(|(_, targets)| targets.len() as u64).sum());
    }

    let mut nodes = 0u64;
    for (piece, targets) in &moves {
        for dst in *targets {
            let mut child = position.clone();
            move_piece(&mut child, piece, dst);
            nodes += perft(&child, color.flip(), depth - 1)?;
        }
    }
    Ok(nodes)
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs, with moves written as piece letter,
/// origin and destination (`Pe2e4`), sorted alphabetically.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if a side to move has no king.
pub fn divide(position: &Position, color: Color, depth: usize) -> Result<Vec<(String, u64)>, BoardError> {
    let mut results = Vec::new();
    for (piece, targets) in legal_for_color(color, position)? {
        for dst in targets {
            let mut child = position.clone();
            move_piece(&mut child, &piece, dst);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, color.flip(), depth - 1)?
            };
            results.push((format!("{piece}{dst}"), count));
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
