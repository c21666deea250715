//! The interactive console session: read a line, act on it, report back.

use std::io::{BufRead, Write};

use tracing::{debug, error, info, warn};

use tabiya_core::{Color, Game, GameStatus, Glyphs, MoveError, Position, STARTING_FEN};

use crate::command::{Command, parse_command};
use crate::error::CliError;

const HELP: &str = "\
Commands:
  <move>       move a piece, e.g. pe2e4 or Ng1f3 (letter: p n b r q k)
  O-O, O-O-O   castle king- or queen-side
  moves        list legal moves for the side to move
  board        redraw the board
  fen          print the piece placement
  new          start a new game
  help         show this list
  quit, exit   leave";

/// Session settings chosen on the command line.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// FEN piece placement the game starts from (and restarts from on `new`).
    pub start_fen: String,
    /// Character set for the board diagram.
    pub glyphs: Glyphs,
    /// Redraw the board after every accepted move.
    pub show_board_after_move: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_FEN.to_string(),
            glyphs: Glyphs::Unicode,
            show_board_after_move: true,
        }
    }
}

/// A console game between two players sharing one terminal.
pub struct Session {
    config: SessionConfig,
    start: Position,
    game: Game,
}

impl Session {
    /// Create a session, validating the configured start position.
    ///
    /// White always moves first.
    pub fn new(config: SessionConfig) -> Result<Self, CliError> {
        let start: Position = config
            .start_fen
            .parse()
            .map_err(|source| CliError::InvalidFen {
                fen: config.start_fen.clone(),
                source,
            })?;
        let game = Game::from_position(start.clone(), Color::White)
            .map_err(|source| CliError::InvalidStart { source })?;
        Ok(Self {
            config,
            start,
            game,
        })
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Rejected moves are reported on `out` and the player is asked again.
    /// Only I/O failures and a corrupted position end the loop with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        info!(fen = %self.start, "session started");
        self.print_board(out)?;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let cmd = parse_command(&line);
            debug!(?cmd, "received command");

            match cmd {
                Command::Quit => break,
                Command::Empty => {}
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Board => self.print_board(out)?,
                Command::Fen => writeln!(out, "{}", self.game.position())?,
                Command::Moves => self.handle_moves(out)?,
                Command::New => self.handle_new(out)?,
                Command::Move(text) => self.handle_move(&text, out)?,
            }
            self.prompt(out)?;
        }

        info!(moves = self.game.move_log().len(), "session ended");
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.game.status().is_terminal() {
            writeln!(out, "Game over. Type 'new' to play again or 'quit' to exit.")?;
        } else {
            writeln!(out, "{}'s move:", self.game.current_turn())?;
            write!(out, "Enter your move (e.g., pe2e4): ")?;
        }
        out.flush()?;
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        write!(out, "{}", self.game.position().pretty(self.config.glyphs))?;
        Ok(())
    }

    fn handle_new<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        self.game = Game::from_position(self.start.clone(), Color::White)?;
        info!("new game");
        self.print_board(out)
    }

    fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.game.status().is_terminal() {
            writeln!(out, "No moves: the game is over.")?;
            return Ok(());
        }
        for (piece, targets) in self.game.legal_moves_for(self.game.current_turn())? {
            let list: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
            writeln!(out, "{piece}: {}", list.join(" "))?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, text: &str, out: &mut W) -> Result<(), CliError> {
        match self.game.apply_text(text) {
            Ok(status) => {
                if self.config.show_board_after_move {
                    self.print_board(out)?;
                }
                match status {
                    GameStatus::Checkmate { loser } => {
                        writeln!(out, "Checkmate! {} wins.", loser.flip())?;
                    }
                    GameStatus::Stalemate => writeln!(out, "Stalemate! The game is drawn.")?,
                    GameStatus::InProgress => {
                        let turn = self.game.current_turn();
                        if self.game.is_in_check(turn)? {
                            writeln!(out, "{turn} is in check.")?;
                        }
                    }
                }
                Ok(())
            }
            Err(MoveError::Corrupted(source)) => {
                error!(%source, input = text, "game state corrupted");
                Err(CliError::Corrupted { source })
            }
            Err(e) => {
                warn!(input = text, error = %e, "move rejected");
                writeln!(out, "{e}")?;
                Ok(())
            }
        }
    }
}
