//! Console session errors.

use tabiya_core::{BoardError, FenError};

/// Errors that end a console session.
///
/// Rejected moves are not errors at this level: they are reported to the
/// player and the session asks again.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configured starting placement could not be parsed.
    #[error("invalid FEN: {fen}: {source}")]
    InvalidFen {
        /// The placement string that failed to parse.
        fen: String,
        /// Why it failed.
        source: FenError,
    },

    /// The configured starting placement parsed but cannot start a game.
    #[error("unplayable start position: {source}")]
    InvalidStart {
        /// The violated board invariant.
        source: BoardError,
    },

    /// The game position broke a board invariant during play.
    #[error("corrupted game state: {source}")]
    Corrupted {
        /// The violated board invariant.
        #[from]
        source: BoardError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
