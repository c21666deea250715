//! Castling eligibility, re-evaluated from scratch on every call.

use crate::castle::CastleSide;
use crate::color::Color;
use crate::geometry::horizontal_clear;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::square_under_attack;

/// Return `true` if `color` may castle toward `side` in `position`.
///
/// Requires an unmoved king and an unmoved rook of that side on their home
/// squares, nothing between them, and no enemy attack on the king's home
/// square or on either square it crosses.
pub fn can_castle(color: Color, side: CastleSide, position: &Position) -> bool {
    let king_home = CastleSide::king_home(color);
    let rook_home = side.rook_home(color);

    if !unmoved(position, king_home, color, PieceKind::King)
        || !unmoved(position, rook_home, color, PieceKind::Rook)
    {
        return false;
    }

    // Both squares share the home row, so the query cannot fail.
    if horizontal_clear(position, king_home, rook_home) != Ok(true) {
        return false;
    }

    !square_under_attack(king_home, color, position) && !path_attacked(color, side, position)
}

/// Castling eligibility toward the h-file rook.
pub fn can_castle_kingside(color: Color, position: &Position) -> bool {
    can_castle(color, CastleSide::KingSide, position)
}

/// Castling eligibility toward the a-file rook.
pub fn can_castle_queenside(color: Color, position: &Position) -> bool {
    can_castle(color, CastleSide::QueenSide, position)
}

/// Return `true` if the enemy attacks f or g on `color`'s home row.
pub fn kingside_path_attacked(color: Color, position: &Position) -> bool {
    path_attacked(color, CastleSide::KingSide, position)
}

/// Return `true` if the enemy attacks d or c on `color`'s home row.
pub fn queenside_path_attacked(color: Color, position: &Position) -> bool {
    path_attacked(color, CastleSide::QueenSide, position)
}

fn path_attacked(color: Color, side: CastleSide, position: &Position) -> bool {
    side.crossed_squares(color)
        .into_iter()
        .any(|sq| square_under_attack(sq, color, position))
}

fn unmoved(position: &Position, sq: Square, color: Color, kind: PieceKind) -> bool {
    position
        .piece_at(sq)
        .is_some_and(|p| p.color == color && p.kind == kind && !p.has_moved)
}
