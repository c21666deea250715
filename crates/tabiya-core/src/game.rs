//! The game controller: turn order, move validation, and end-of-game detection.

use tracing::{debug, info};

use crate::chess_move::{MoveRecord, parse_move_text};
use crate::color::Color;
use crate::error::{BoardError, MoveError};
use crate::make_move::move_piece;
use crate::movegen::{PieceMoves, has_any_legal_move, king_in_check, legal_for_color, legal_moves};
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Where the game stands after the last applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    InProgress,
    /// The side to move is in check with no legal move.
    Checkmate {
        /// The mated side.
        loser: Color,
    },
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl GameStatus {
    /// Return `true` once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One game: the position, whose turn it is, and what has been played.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    turn: Color,
    checkmate: bool,
    status: GameStatus,
    move_log: Vec<MoveRecord>,
}

impl Game {
    /// Start a game from the standard initial layout with White to move.
    pub fn new() -> Game {
        Game {
            position: Position::starting_position(),
            turn: Color::White,
            checkmate: false,
            status: GameStatus::InProgress,
            move_log: Vec::new(),
        }
    }

    /// Start a game from an arbitrary setup with `turn` to move.
    ///
    /// The setup is checked immediately, so a position that is already mate
    /// or stalemate starts out terminal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingKing`] if either side lacks a king.
    pub fn from_position(position: Position, turn: Color) -> Result<Game, BoardError> {
        for color in Color::ALL {
            position.require_king(color)?;
        }
        let mut game = Game {
            position,
            turn,
            checkmate: false,
            status: GameStatus::InProgress,
            move_log: Vec::new(),
        };
        game.refresh_status()?;
        Ok(game)
    }

    /// Return the current position, for rendering and analysis.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Return the side to move.
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// Return `true` once the side to move has been checkmated.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Return the current status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return the moves applied so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// Return `true` if `color`'s king is attacked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingKing`] if `color` has no king.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.position.require_king(color)?;
        Ok(king_in_check(&king, &self.position))
    }

    /// Return every legal move of `color` in the current position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingKing`] if `color` has no king.
    pub fn legal_moves_for(&self, color: Color) -> Result<Vec<PieceMoves>, BoardError> {
        legal_for_color(color, &self.position)
    }

    /// Parse `text` as a move for the side to move and apply it.
    ///
    /// # Errors
    ///
    /// Everything [`Game::apply_move`] returns, plus
    /// [`MoveError::InvalidNotation`] for unparseable text.
    pub fn apply_text(&mut self, text: &str) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let (piece, destination) = parse_move_text(text, self.turn)?;
        self.apply_move(&piece, destination)
    }

    /// Validate and apply a move, then switch turns and test for mate.
    ///
    /// `piece` names the mover by kind, color and origin square; its flags are
    /// ignored in favour of the piece actually on the board. On any error the
    /// game is left exactly as it was, except for [`MoveError::Corrupted`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] after checkmate or stalemate.
    /// - [`MoveError::PieceDoesNotExist`] if no such piece stands on the origin.
    /// - [`MoveError::IllegalMove`] if it is not that side's turn or the
    ///   destination is not among the piece's legal moves.
    /// - [`MoveError::Corrupted`] if the position has lost a king.
    pub fn apply_move(&mut self, piece: &Piece, destination: Square) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let stored = self
            .position
            .piece_at(piece.position)
            .filter(|p| p.same_identity(piece))
            .copied()
            .ok_or(MoveError::PieceDoesNotExist {
                square: piece.position,
            })?;

        let text = format!("{stored}{destination}");
        if stored.color != self.turn {
            return Err(MoveError::IllegalMove {
                text,
                reason: format!("it is {}'s turn", self.turn),
            });
        }

        if !legal_moves(&stored, &self.position)?.contains(destination) {
            return Err(MoveError::IllegalMove {
                text,
                reason: "move is not legal for this piece".to_string(),
            });
        }

        let record = move_piece(&mut self.position, &stored, destination);
        debug!(%record, "move applied");
        self.move_log.push(record);
        self.turn = self.turn.flip();
        self.refresh_status()?;
        Ok(self.status)
    }

    fn refresh_status(&mut self) -> Result<(), BoardError> {
        let king = self.position.require_king(self.turn)?;
        if has_any_legal_move(self.turn, &self.position)? {
            self.status = GameStatus::InProgress;
            return Ok(());
        }

        if king_in_check(&king, &self.position) {
            self.checkmate = true;
            self.status = GameStatus::Checkmate { loser: self.turn };
            info!(loser = %self.turn, moves = self.move_log.len(), "checkmate");
        } else {
            self.status = GameStatus::Stalemate;
            info!(to_move = %self.turn, moves = self.move_log.len(), "stalemate");
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
