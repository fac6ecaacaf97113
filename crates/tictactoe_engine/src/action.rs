//! Move results and move rejections.
//!
//! Every accepted move produces a [`MoveOutcome`]; every rejected move
//! produces an [`InvalidMove`] and leaves the engine untouched.

use crate::rules::WinLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
///
/// None of these are fatal: the engine stays usable and the caller can
/// simply ask the player again.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum InvalidMove {
    /// The index is not a cell on the board (valid: 0-8).
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for InvalidMove {}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOver {
    /// `winner` completed `line`.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// The board is full and nobody completed a line.
    Draw,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on; `next_player` moves next.
    Continue {
        /// The player whose turn it now is.
        next_player: Player,
    },
    /// The move ended the game.
    GameOver(GameOver),
}

impl MoveOutcome {
    /// True if this move ended the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver(_))
    }
}
