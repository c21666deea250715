//! Console command parsing.

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a keyword: an attempted move such as `pe2e4`.
    Move(String),
    /// `moves` -- list legal moves for the side to move.
    Moves,
    /// `board` -- redraw the board.
    Board,
    /// `fen` -- print the piece placement.
    Fen,
    /// `new` -- restart from the configured start position.
    New,
    /// `help` -- list commands.
    Help,
    /// `quit` or `exit` -- leave the session.
    Quit,
    /// A blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
///
/// Keywords are matched case-insensitively after trimming; everything else
/// is passed through as a move attempt.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "moves" => Command::Moves,
        "board" => Command::Board,
        "fen" => Command::Fen,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Move(trimmed.to_string()),
    }
}
