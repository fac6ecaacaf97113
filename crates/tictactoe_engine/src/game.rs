//! The tic-tac-toe game engine.

use crate::action::{GameOver, InvalidMove, MoveOutcome};
use crate::board::Board;
use crate::rules::{self, Evaluation};
use crate::types::{GameStatus, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board exclusively; the only way to change it is
/// [`Game::apply_move`]. A finished game is never cleared in place:
/// [`Game::reset`] hands back a brand new engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is accepted next.
    ///
    /// After a terminal result this stays on the player who made the last
    /// move.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn current_status(&self) -> &GameStatus {
        &self.status
    }

    /// Places the active player's mark at `index` (0-8).
    ///
    /// On success the board is evaluated: a completed line wins, a full
    /// board draws, anything else passes the turn to the opponent.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::GameAlreadyOver`] once the game is won or drawn
    /// - [`InvalidMove::OutOfRange`] / [`InvalidMove::CellOccupied`] from
    ///   the board
    ///
    /// A rejected move leaves the game exactly as it was.
    #[instrument(skip(self), fields(player = ?self.active_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, InvalidMove> {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Move rejected: game is over");
            return Err(InvalidMove::GameAlreadyOver);
        }

        let player = self.active_player;
        self.board
            .mark_cell(index, player)
            .inspect_err(|reason| debug!(%reason, "Move rejected"))?;
        debug!(index, "Mark placed");

        let outcome = match rules::evaluate(&self.board) {
            Evaluation::Won(winner, line) => {
                debug_assert_eq!(winner, player, "only the mover can complete a line");
                self.status = GameStatus::Won { winner, line };
                info!(?winner, %line, "Game won");
                MoveOutcome::GameOver(GameOver::Won { winner, line })
            }
            Evaluation::Draw => {
                self.status = GameStatus::Draw;
                info!("Game drawn");
                MoveOutcome::GameOver(GameOver::Draw)
            }
            Evaluation::Continue => {
                self.active_player = player.opponent();
                MoveOutcome::Continue {
                    next_player: self.active_player,
                }
            }
        };

        Ok(outcome)
    }

    /// Returns a fresh game. `self` is left untouched; callers drop it and
    /// rebind to the returned engine.
    #[instrument(skip(self), fields(previous = ?self.status))]
    pub fn reset(&self) -> Game {
        debug!("Starting a new game");
        Game::new()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
