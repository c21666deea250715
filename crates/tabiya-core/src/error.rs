//! Error types for board queries, FEN parsing, and move attempts.

use crate::color::Color;
use crate::square::Square;

/// Errors raised when a position is queried outside its contract or found corrupted.
///
/// These are defects, not user mistakes: they surface to the top level instead
/// of being turned into a re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A square outside the 8x8 board was looked up.
    #[error("square {square} is not on the board")]
    OutOfRange {
        /// The offending square.
        square: Square,
    },
    /// A horizontal path query was given two squares on different rows.
    #[error("path from {from} to {to} is not horizontal")]
    NotHorizontal {
        /// First end of the path.
        from: Square,
        /// Second end of the path.
        to: Square,
    },
    /// A side has no king on the board.
    #[error("no {color} king on the board")]
    MissingKing {
        /// The side whose king is missing.
        color: Color,
    },
}

/// Errors that occur when parsing a FEN piece placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Reasons a move attempt is rejected by the [`Game`](crate::Game).
///
/// Every variant except [`MoveError::Corrupted`] leaves the game untouched and
/// is meant to be shown to the player before asking again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move text does not match the accepted grammar.
    #[error("invalid move notation: {text}. Please use the correct format (e.g. pe2e4)")]
    InvalidNotation {
        /// The rejected text.
        text: String,
    },
    /// The named piece does not stand on the stated origin square.
    #[error("piece specified not found at {square}. Please select a valid piece")]
    PieceDoesNotExist {
        /// The origin square that was named.
        square: Square,
    },
    /// The piece exists but the destination is not among its legal moves.
    #[error("illegal move: {text}. Reason: {reason}")]
    IllegalMove {
        /// The attempted move.
        text: String,
        /// Why the move was rejected.
        reason: String,
    },
    /// The game already ended.
    #[error("the game is over")]
    GameOver,
    /// The position violates a board invariant.
    #[error("corrupted position: {0}")]
    Corrupted(#[from] BoardError),
}

impl MoveError {
    /// Return `true` if the caller should report the error and ask for another move.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MoveError::Corrupted(_))
    }
}
