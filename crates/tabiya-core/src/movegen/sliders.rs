//! Sliding piece (bishop, rook, queen) move generation.

use crate::geometry::{is_ally, is_enemy};
use crate::piece::Piece;
use crate::position::Position;
use crate::square_set::SquareSet;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray from the piece until the edge or the first occupied square.
///
/// An enemy on the stopping square is included (a capture); an ally is not.
pub(super) fn slide(piece: &Piece, position: &Position, directions: &[(i8, i8)]) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(dr, dc) in directions {
        let mut dst = piece.position.offset(dr, dc);
        while dst.in_bounds() {
            if is_ally(position, dst, piece.color) {
                break;
            }
            targets.insert(dst);
            if is_enemy(position, dst, piece.color) {
                break;
            }
            dst = dst.offset(dr, dc);
        }
    }
    targets
}

pub(super) fn rook_moves(piece: &Piece, position: &Position) -> SquareSet {
    slide(piece, position, &ROOK_DIRECTIONS)
}

pub(super) fn bishop_moves(piece: &Piece, position: &Position) -> SquareSet {
    slide(piece, position, &BISHOP_DIRECTIONS)
}

pub(super) fn queen_moves(piece: &Piece, position: &Position) -> SquareSet {
    rook_moves(piece, position) | bishop_moves(piece, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn set(squares: &[Square]) -> SquareSet {
        squares.iter().copied().collect()
    }

    #[test]
    fn rook_on_clear_board() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::D4);
        let moves = rook_moves(&rook, &Position::empty().with_piece(rook));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(Square::D8));
        assert!(moves.contains(Square::A4));
        assert!(!moves.contains(Square::D4));
        assert!(!moves.contains(Square::E5));
    }

    #[test]
    fn rook_stops_before_ally_and_on_enemy() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::A1);
        let position = Position::empty()
            .with_piece(rook)
            .with_piece(Piece::new(PieceKind::Pawn, Color::White, Square::A3))
            .with_piece(Piece::new(PieceKind::Knight, Color::Black, Square::C1));
        assert_eq!(
            rook_moves(&rook, &position),
            set(&[Square::A2, Square::B1, Square::C1])
        );
    }

    #[test]
    fn bishop_on_clear_board() {
        let bishop = Piece::new(PieceKind::Bishop, Color::Black, Square::C1);
        let moves = bishop_moves(&bishop, &Position::empty().with_piece(bishop));
        assert_eq!(
            moves,
            set(&[
                Square::B2,
                Square::A3,
                Square::D2,
                Square::E3,
                Square::F4,
                Square::G5,
                Square::H6
            ])
        );
    }

    #[test]
    fn bishop_captures_first_enemy_only() {
        let bishop = Piece::new(PieceKind::Bishop, Color::White, Square::A1);
        let position = Position::empty()
            .with_piece(bishop)
            .with_piece(Piece::new(PieceKind::Pawn, Color::Black, Square::C3))
            .with_piece(Piece::new(PieceKind::Queen, Color::Black, Square::E5));
        assert_eq!(bishop_moves(&bishop, &position), set(&[Square::B2, Square::C3]));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let queen = Piece::new(PieceKind::Queen, Color::White, Square::D4);
        let position = Position::empty()
            .with_piece(queen)
            .with_piece(Piece::new(PieceKind::Pawn, Color::White, Square::D6))
            .with_piece(Piece::new(PieceKind::Pawn, Color::Black, Square::F6));
        let moves = queen_moves(&queen, &position);
        assert_eq!(moves, rook_moves(&queen, &position) | bishop_moves(&queen, &position));
        assert!(moves.contains(Square::D5));
        assert!(!moves.contains(Square::D6));
        assert!(moves.contains(Square::F6));
        assert!(!moves.contains(Square::G7));
        assert_eq!(moves.len(), 22);
    }
}
