//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules are separated from board
//! storage so they can be checked against injected positions as well as
//! positions reached through play.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, WinLine, find_winning_line};

use crate::board::Board;
use crate::types::Player;
use tracing::instrument;

/// Terminal-condition verdict for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// `Player` holds all three cells of the line.
    Won(Player, WinLine),
    /// Full board, no completed line.
    Draw,
    /// Play goes on.
    Continue,
}

/// Evaluates a board: first completed line in declaration order, else draw
/// on a full board, else continue.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((winner, line)) = find_winning_line(board.squares()) {
        Evaluation::Won(winner, line)
    } else if is_draw(board.squares()) {
        Evaluation::Draw
    } else {
        Evaluation::Continue
    }
}
