//! King move and castling destination generation.

use crate::castle::CastleSide;
use crate::geometry::is_ally;
use crate::piece::Piece;
use crate::position::Position;
use crate::square_set::SquareSet;

use super::castling::can_castle;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// One-square king steps onto anything but an ally. Never includes castling.
pub(super) fn king_steps(piece: &Piece, position: &Position) -> SquareSet {
    KING_OFFSETS
        .iter()
        .map(|&(dr, dc)| piece.position.offset(dr, dc))
        .filter(|&dst| dst.in_bounds() && !is_ally(position, dst, piece.color))
        .collect()
}

/// Pseudo-legal king destinations: the steps plus the g- and c-file castling
/// squares when castling on that wing is currently allowed.
pub(super) fn king_moves(piece: &Piece, position: &Position) -> SquareSet {
    let mut targets = king_steps(piece, position);
    for side in CastleSide::ALL {
        if can_castle(piece.color, side, position) {
            targets.insert(side.king_dest(piece.color));
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn centre_king_has_eight_steps() {
        let king = Piece::new(PieceKind::King, Color::White, Square::D4);
        let moves = king_moves(&king, &Position::empty().with_piece(king));
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(Square::D4));
    }

    #[test]
    fn corner_king() {
        let king = Piece::new(PieceKind::King, Color::Black, Square::H8);
        let moves = king_moves(&king, &Position::empty().with_piece(king));
        let expected: SquareSet = [Square::G8, Square::G7, Square::H7].into_iter().collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn cannot_step_onto_ally_but_can_capture() {
        let king = Piece::new(PieceKind::King, Color::White, Square::A1);
        let position = Position::empty()
            .with_piece(king)
            .with_piece(Piece::new(PieceKind::Pawn, Color::White, Square::A2))
            .with_piece(Piece::new(PieceKind::Pawn, Color::Black, Square::B2));
        let expected: SquareSet = [Square::B1, Square::B2].into_iter().collect();
        assert_eq!(king_moves(&king, &position), expected);
    }

    #[test]
    fn castling_destinations_are_added() {
        let position: Position = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let king = *position.piece_at(Square::E1).unwrap();
        let moves = king_moves(&king, &position);
        assert!(moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));
        assert!(!king_steps(&king, &position).contains(Square::G1));
    }
}
