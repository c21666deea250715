//! Bounds and occupancy predicates over a position.

use crate::color::Color;
use crate::error::BoardError;
use crate::position::Position;
use crate::square::Square;

/// Return `true` iff both coordinates of `sq` lie in `0..8`.
#[inline]
pub fn in_bounds(sq: Square) -> bool {
    sq.in_bounds()
}

/// Return `true` iff nothing stands on `sq`.
///
/// # Errors
///
/// Returns [`BoardError::OutOfRange`] if `sq` is not on the board.
pub fn is_empty(position: &Position, sq: Square) -> Result<bool, BoardError> {
    Ok(position.get(sq)?.is_none())
}

/// Return `true` iff a piece of `color` stands on `sq`.
#[inline]
pub fn is_ally(position: &Position, sq: Square, color: Color) -> bool {
    position.piece_at(sq).is_some_and(|p| p.color == color)
}

/// Return `true` iff a piece of the other side stands on `sq`.
#[inline]
pub fn is_enemy(position: &Position, sq: Square, color: Color) -> bool {
    position.piece_at(sq).is_some_and(|p| p.color != color)
}

/// Return `true` iff every square strictly between `a` and `b` is empty.
///
/// Both squares must be on the same row; vertical and diagonal gaps are not
/// supported.
///
/// # Errors
///
/// Returns [`BoardError::NotHorizontal`] if the rows differ and
/// [`BoardError::OutOfRange`] if the row is off the board.
pub fn horizontal_clear(position: &Position, a: Square, b: Square) -> Result<bool, BoardError> {
    if a.row() != b.row() {
        return Err(BoardError::NotHorizontal { from: a, to: b });
    }
    let (lo, hi) = if a.col() <= b.col() {
        (a.col(), b.col())
    } else {
        (b.col(), a.col())
    };
    for col in (lo + 1)..hi {
        if !is_empty(position, Square::new(a.row(), col))? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn white(kind: PieceKind, sq: Square) -> Piece {
        Piece::new(kind, Color::White, sq)
    }

    fn black(kind: PieceKind, sq: Square) -> Piece {
        Piece::new(kind, Color::Black, sq)
    }

    #[test]
    fn occupancy_predicates() {
        let position = Position::empty()
            .with_piece(white(PieceKind::Rook, Square::A1))
            .with_piece(black(PieceKind::Knight, Square::B1));

        assert_eq!(is_empty(&position, Square::C1), Ok(true));
        assert_eq!(is_empty(&position, Square::A1), Ok(false));

        assert!(is_ally(&position, Square::A1, Color::White));
        assert!(!is_ally(&position, Square::B1, Color::White));
        assert!(!is_ally(&position, Square::C1, Color::White));

        assert!(is_enemy(&position, Square::B1, Color::White));
        assert!(!is_enemy(&position, Square::A1, Color::White));
        assert!(!is_enemy(&position, Square::C1, Color::White));
    }

    #[test]
    fn is_empty_off_board_fails() {
        let off = Square::new(0, 8);
        assert_eq!(
            is_empty(&Position::empty(), off),
            Err(BoardError::OutOfRange { square: off })
        );
        assert!(!in_bounds(off));
        assert!(!is_ally(&Position::empty(), off, Color::Black));
    }

    #[test]
    fn horizontal_clear_excludes_endpoints() {
        let position = Position::empty()
            .with_piece(white(PieceKind::King, Square::E1))
            .with_piece(white(PieceKind::Rook, Square::H1))
            .with_piece(white(PieceKind::Rook, Square::A1))
            .with_piece(white(PieceKind::Knight, Square::B1));

        assert_eq!(horizontal_clear(&position, Square::E1, Square::H1), Ok(true));
        assert_eq!(horizontal_clear(&position, Square::H1, Square::E1), Ok(true));
        assert_eq!(horizontal_clear(&position, Square::E1, Square::A1), Ok(false));
        assert_eq!(horizontal_clear(&position, Square::E1, Square::F1), Ok(true));
    }

    #[test]
    fn horizontal_clear_rejects_other_directions() {
        let position = Position::empty();
        assert_eq!(
            horizontal_clear(&position, Square::A1, Square::A8),
            Err(BoardError::NotHorizontal {
                from: Square::A1,
                to: Square::A8
            })
        );
        assert!(horizontal_clear(&position, Square::A1, Square::B2).is_err());
    }
}
