//! Core chess types: board representation, move generation, and game rules.

mod castle;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod geometry;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod render;
mod square;
mod square_set;

pub use castle::CastleSide;
pub use chess_move::{MoveRecord, parse_move_text};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError};
pub use fen::{STARTING_FEN, algebraic_to_index, index_to_algebraic};
pub use game::{Game, GameStatus};
pub use geometry::{horizontal_clear, in_bounds, is_ally, is_empty, is_enemy};
pub use make_move::move_piece;
pub use movegen::{
    PieceMoves, can_castle, can_castle_kingside, can_castle_queenside, has_any_legal_move,
    king_in_check, king_in_checkmate, king_in_stalemate, kingside_path_attacked, leaves_own_king_safe,
    legal_for_color, legal_moves, pseudo_legal_for_color, pseudo_legal_moves, queenside_path_attacked,
    square_under_attack,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use render::{Glyphs, PrettyPosition};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
