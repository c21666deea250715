//! The board position: what stands on each of the 64 squares.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A total mapping from the 64 squares to a piece or nothing.
///
/// Empty squares are `None`; there is no colored "empty piece". Every stored
/// piece's `position` field equals the square it is stored under. Outside the
/// crate the position is read-only except through [`Position::with_piece`],
/// which builds new setups. Game play mutates it only through
/// [`move_piece`](crate::move_piece).
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
}

impl Position {
    /// Return a position with no pieces.
    pub fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard initial layout.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            for color in Color::ALL {
                let home = Square::new(color.home_row(), col);
                position.set(Piece::new(kind, color, home));
                let pawn_sq = Square::new(color.pawn_start_row(), col);
                position.set(Piece::new(PieceKind::Pawn, color, pawn_sq));
            }
        }
        position
    }

    /// Builder: return this position with `piece` placed on `piece.position`,
    /// replacing whatever stood there. Off-board pieces are ignored.
    pub fn with_piece(mut self, piece: Piece) -> Position {
        self.set(piece);
        self
    }

    /// Look up a square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `sq` is not on the board.
    pub fn get(&self, sq: Square) -> Result<Option<&Piece>, BoardError> {
        let idx = sq.index().ok_or(BoardError::OutOfRange { square: sq })?;
        Ok(self.squares[idx].as_ref())
    }

    /// Return the piece on `sq`, or `None` if the square is empty or off the board.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        sq.index().and_then(|idx| self.squares[idx].as_ref())
    }

    /// Iterate over every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// Iterate over the pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Return the king of `color`, if present.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// Return the king of `color`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingKing`] if that side has no king.
    pub fn require_king(&self, color: Color) -> Result<Piece, BoardError> {
        self.king(color)
            .copied()
            .ok_or(BoardError::MissingKing { color })
    }

    /// Store `piece` under its own square, replacing the previous occupant.
    #[inline]
    pub(crate) fn set(&mut self, piece: Piece) {
        if let Some(idx) = piece.position.index() {
            self.squares[idx] = Some(piece);
        }
    }

    /// Empty `sq`, returning whatever stood there.
    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|idx| self.squares[idx].take())
    }

    /// Return a mutable handle to the piece on `sq`.
    #[inline]
    pub(crate) fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        sq.index().and_then(|idx| self.squares[idx].as_mut())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}
