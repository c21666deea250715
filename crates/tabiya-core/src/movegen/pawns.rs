//! Pawn move generation.

use crate::geometry::is_enemy;
use crate::piece::Piece;
use crate::position::Position;
use crate::square_set::SquareSet;

/// Pseudo-legal pawn destinations: single and double pushes onto empty
/// squares and diagonal captures of enemy pieces. No en passant.
pub(super) fn pawn_moves(piece: &Piece, position: &Position) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let dir = piece.color.pawn_direction();

    let one = piece.position.offset(dir, 0);
    if one.in_bounds() && position.piece_at(one).is_none() {
        targets.insert(one);

        let two = piece.position.offset(2 * dir, 0);
        if piece.position.row() == piece.color.pawn_start_row()
            && two.in_bounds()
            && position.piece_at(two).is_none()
        {
            targets.insert(two);
        }
    }

    for dst in pawn_attacks(piece) {
        if is_enemy(position, dst, piece.color) {
            targets.insert(dst);
        }
    }

    targets
}

/// The diagonal squares a pawn threatens, whether or not anything stands there.
pub(super) fn pawn_attacks(piece: &Piece) -> SquareSet {
    let dir = piece.color.pawn_direction();
    [-1, 1]
        .into_iter()
        .map(|dc| piece.position.offset(dir, dc))
        .filter(|sq| sq.in_bounds())
        .collect()
}
