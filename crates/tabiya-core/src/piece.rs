//! A placed chess piece: kind, color, square, and the flags the rules consult.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece standing on the board.
///
/// Pieces are plain values. The [`Position`](crate::Position) stores them by
/// square and any change (a move, a rook losing castling rights) replaces the
/// stored value. `position` always equals the square the piece is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Square the piece occupies.
    pub position: Square,
    /// Owning side.
    pub color: Color,
    /// Piece kind.
    pub kind: PieceKind,
    /// Set the first time the piece leaves its square. Consulted for castling.
    pub has_moved: bool,
    /// Set on a pawn that has just advanced two squares.
    pub en_passantable: bool,
}

impl Piece {
    /// Create an unmoved piece on `position`.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: Square) -> Piece {
        Piece {
            position,
            color,
            kind,
            has_moved: false,
            en_passantable: false,
        }
    }

    /// Parse a FEN letter into an unmoved piece on `position`.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    pub fn from_fen_char(c: char, position: Square) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, position))
    }

    /// Return the FEN letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(&self) -> char {
        self.kind.letter_for(self.color)
    }

    /// Return a copy of this piece standing on `destination`.
    #[inline]
    pub const fn moved_to(self, destination: Square) -> Piece {
        Piece {
            position: destination,
            ..self
        }
    }

    /// Return `true` if `other` is the same kind and color, regardless of square or flags.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.kind == other.kind && self.color == other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.fen_char(), self.position)
    }
}
