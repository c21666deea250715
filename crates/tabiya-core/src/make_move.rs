//! Applying a validated move to a position.

use tracing::{debug, trace};

use crate::castle::CastleSide;
use crate::chess_move::MoveRecord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Move `piece` to `destination`, returning a record of what happened.
///
/// No legality check is made here: callers validate against
/// [`legal_moves`](crate::legal_moves) first. Whatever stood on `destination`
/// is overwritten. A king stepping two columns along its row castles, and the
/// matching rook is carried to the square the king crossed.
///
/// The moved piece is marked `has_moved`. A pawn advancing two squares is
/// marked `en_passantable`; the mark is cleared from that side's pawns at the
/// start of its next move.
pub fn move_piece(position: &mut Position, piece: &Piece, destination: Square) -> MoveRecord {
    clear_en_passant_marks(position, piece);

    let castle = if piece.kind == PieceKind::King {
        CastleSide::from_king_step(piece.position, destination)
    } else {
        None
    };

    if let Some(side) = castle {
        let rook_from = Square::new(piece.position.row(), side.rook_home_col());
        let rook_to = Square::new(piece.position.row(), side.rook_dest_col());
        if let Some(mut rook) = position.clear(rook_from) {
            rook.has_moved = true;
            position.set(rook.moved_to(rook_to));
            debug!(%side, from = %rook_from, to = %rook_to, "castling rook co-move");
        }
    }

    position.clear(piece.position);
    let captured = position.piece_at(destination).map(|p| p.kind);

    let mut moved = piece.moved_to(destination);
    moved.has_moved = true;
    moved.en_passantable =
        piece.kind == PieceKind::Pawn && (destination.row() - piece.position.row()).abs() == 2;
    position.set(moved);

    trace!(piece = %piece, to = %destination, ?captured, "piece moved");

    MoveRecord {
        color: piece.color,
        kind: piece.kind,
        from: piece.position,
        to: destination,
        castle,
        captured,
    }
}

fn clear_en_passant_marks(position: &mut Position, mover: &Piece) {
    let marked: Vec<Square> = position
        .pieces_of(mover.color)
        .filter(|p| p.en_passantable)
        .map(|p| p.position)
        .collect();
    for sq in marked {
        if let Some(pawn) = position.piece_at_mut(sq) {
            pawn.en_passantable = false;
        }
    }
}
