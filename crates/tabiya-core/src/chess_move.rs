//! Move text: parsing player commands and recording applied moves.

use std::fmt;

use crate::castle::CastleSide;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move as it was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// Side that moved.
    pub color: Color,
    /// Kind of the moved piece.
    pub kind: PieceKind,
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Set when the move was a castle.
    pub castle: Option<CastleSide>,
    /// Kind of the piece that stood on the destination, if any.
    pub captured: Option<PieceKind>,
}

impl MoveRecord {
    /// Return `true` if the move removed an enemy piece.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castle {
            return write!(f, "{side}");
        }
        write!(f, "{}{}{}", self.kind.letter_for(self.color), self.from, self.to)
    }
}

/// Parse a move command for the side `color`.
///
/// Accepted forms:
/// - `<piece><from><to>` such as `pe2e4` or `Ng1f3`. The piece letter is
///   case-insensitive; the piece always belongs to `color`.
/// - `O-O` / `O-O-O` (or with zeros) for king- and queen-side castling.
///
/// The returned piece carries default flags; the caller compares it with the
/// board by kind and color.
///
/// # Errors
///
/// Returns [`MoveError::InvalidNotation`] for anything else.
pub fn parse_move_text(text: &str, color: Color) -> Result<(Piece, Square), MoveError> {
    let trimmed = text.trim();
    let invalid = || MoveError::InvalidNotation {
        text: trimmed.to_string(),
    };

    let castle = match trimmed.to_ascii_uppercase().as_str() {
        "O-O" | "0-0" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
        _ => None,
    };
    if let Some(side) = castle {
        let king = Piece::new(PieceKind::King, color, CastleSide::king_home(color));
        return Ok((king, side.king_dest(color)));
    }

    if trimmed.len() != 5 || !trimmed.is_ascii() {
        return Err(invalid());
    }

    let mut chars = trimmed.chars();
    let kind = chars
        .next()
        .and_then(PieceKind::from_letter)
        .ok_or_else(invalid)?;
    let from = Square::from_algebraic(&trimmed[1..3]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&trimmed[3..5]).ok_or_else(invalid)?;

    Ok((Piece::new(kind, color, from), to))
}
