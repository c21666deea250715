//! Move generation: per-piece rules, attack queries, check detection, and
//! legality filtering by simulation.

mod castling;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::king::{king_moves, king_steps};
use self::knights::knight_moves;
use self::pawns::{pawn_attacks, pawn_moves};
use self::sliders::{bishop_moves, queen_moves, rook_moves};

pub use self::castling::{
    can_castle, can_castle_kingside, can_castle_queenside, kingside_path_attacked,
    queenside_path_attacked,
};

/// A piece together with the destinations it may move to.
pub type PieceMoves = (Piece, SquareSet);

/// Pseudo-legal destinations of one piece: movement geometry and occupancy
/// only, ignoring whether the mover's king is left in check.
pub fn pseudo_legal_moves(piece: &Piece, position: &Position) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, position),
        PieceKind::Knight => knight_moves(piece, position),
        PieceKind::Bishop => bishop_moves(piece, position),
        PieceKind::Rook => rook_moves(piece, position),
        PieceKind::Queen => queen_moves(piece, position),
        PieceKind::King => king_moves(piece, position),
    }
}

/// Squares a piece threatens.
///
/// Same as the pseudo-legal set except that kings contribute only their
/// one-square steps (castling never captures) and pawns contribute their
/// two diagonals regardless of occupancy (a push never captures).
fn attacks(piece: &Piece, position: &Position) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece),
        PieceKind::King => king_steps(piece, position),
        _ => pseudo_legal_moves(piece, position),
    }
}

/// Pseudo-legal moves for every piece of `color`, omitting pieces with none.
pub fn pseudo_legal_for_color(color: Color, position: &Position) -> Vec<PieceMoves> {
    position
        .pieces_of(color)
        .map(|piece| (*piece, pseudo_legal_moves(piece, position)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
}

/// Legal destinations of one piece: its pseudo-legal set minus every move
/// that would leave its own king attacked.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if the mover's side has no king.
pub fn legal_moves(piece: &Piece, position: &Position) -> Result<SquareSet, BoardError> {
    let mut legal = SquareSet::EMPTY;
    for dst in pseudo_legal_moves(piece, position) {
        if leaves_own_king_safe(piece, dst, position)? {
            legal.insert(dst);
        }
    }
    Ok(legal)
}

/// Legal moves for every piece of `color`, omitting pieces with none.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if `color` has no king.
pub fn legal_for_color(color: Color, position: &Position) -> Result<Vec<PieceMoves>, BoardError> {
    let mut all = Vec::new();
    for piece in position.pieces_of(color) {
        let moves = legal_moves(piece, position)?;
        if !moves.is_empty() {
            all.push((*piece, moves));
        }
    }
    Ok(all)
}

/// Return `true` if any piece of the side opposing `color` threatens `sq`.
pub fn square_under_attack(sq: Square, color: Color, position: &Position) -> bool {
    position
        .pieces_of(color.flip())
        .any(|attacker| attacks(attacker, position).contains(sq))
}

/// Return `true` if `king` stands on a square attacked by the other side.
pub fn king_in_check(king: &Piece, position: &Position) -> bool {
    square_under_attack(king.position, king.color, position)
}

/// Return `true` if `color` has at least one legal move.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if `color` has no king.
pub fn has_any_legal_move(color: Color, position: &Position) -> Result<bool, BoardError> {
    for piece in position.pieces_of(color) {
        if !legal_moves(piece, position)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Return `true` if `king` is in check and its side has no legal move.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if the king's side has no king.
pub fn king_in_checkmate(king: &Piece, position: &Position) -> Result<bool, BoardError> {
    Ok(king_in_check(king, position) && !has_any_legal_move(king.color, position)?)
}

/// Return `true` if `king` is not in check but its side has no legal move.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if the king's side has no king.
pub fn king_in_stalemate(king: &Piece, position: &Position) -> Result<bool, BoardError> {
    Ok(!king_in_check(king, position) && !has_any_legal_move(king.color, position)?)
}

/// Simulate `piece` moving to `destination` on a scratch copy of `position`
/// and report whether its own king is then safe. `position` is never touched.
///
/// # Errors
///
/// Returns [`BoardError::MissingKing`] if the mover's side has no king after
/// the simulated move, which only happens on a corrupted position.
pub fn leaves_own_king_safe(
    piece: &Piece,
    destination: Square,
    position: &Position,
) -> Result<bool, BoardError> {
    let mut scratch = position.clone();
    scratch.clear(piece.position);
    scratch.set(piece.moved_to(destination));

    let king = scratch.require_king(piece.color)?;
    Ok(!king_in_check(&king, &scratch))
}
