//! Knight move generation.

use crate::geometry::is_ally;
use crate::piece::Piece;
use crate::position::Position;
use crate::square_set::SquareSet;

/// The eight (row, col) jumps of a knight.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Pseudo-legal knight destinations: every on-board jump not landing on an ally.
pub(super) fn knight_moves(piece: &Piece, position: &Position) -> SquareSet {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(dr, dc)| piece.position.offset(dr, dc))
        .filter(|&dst| dst.in_bounds() && !is_ally(position, dst, piece.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    #[test]
    fn centre_knight_has_eight_jumps() {
        let knight = Piece::new(PieceKind::Knight, Color::White, Square::D4);
        let position = Position::empty().with_piece(knight);
        let expected: SquareSet = [
            Square::B3,
            Square::B5,
            Square::C2,
            Square::C6,
            Square::E2,
            Square::E6,
            Square::F3,
            Square::F5,
        ]
        .into_iter()
        .collect();
        assert_eq!(knight_moves(&knight, &position), expected);
    }

    #[test]
    fn corner_knight_stays_on_board() {
        let knight = Piece::new(PieceKind::Knight, Color::Black, Square::A8);
        let position = Position::empty().with_piece(knight);
        let expected: SquareSet = [Square::B6, Square::C7].into_iter().collect();
        assert_eq!(knight_moves(&knight, &position), expected);
    }

    #[test]
    fn cannot_capture_ally_but_can_capture_enemy() {
        let knight = Piece::new(PieceKind::Knight, Color::White, Square::B1);
        let position = Position::empty()
            .with_piece(knight)
            .with_piece(Piece::new(PieceKind::Pawn, Color::White, Square::D2))
            .with_piece(Piece::new(PieceKind::Pawn, Color::Black, Square::C3));
        let expected: SquareSet = [Square::A3, Square::C3].into_iter().collect();
        assert_eq!(knight_moves(&knight, &position), expected);
    }
}
