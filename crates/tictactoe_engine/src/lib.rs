//! Pure tic-tac-toe game logic.
//!
//! The crate is the game-state engine behind any front end:
//!
//! - **Board**: the nine cell marks in row-major order plus derived queries
//! - **Rules**: the eight fixed win lines and win/draw evaluation
//! - **Game**: the owned engine holding the board, the turn flag and the
//!   game status
//!
//! Front ends hand the engine a cell index and react to the returned
//! [`MoveOutcome`] or [`InvalidMove`]; nothing here renders anything.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameOver, MoveOutcome, Player, WinLine};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4] {
//!     game.apply_move(index).unwrap();
//! }
//! let outcome = game.apply_move(2).unwrap();
//! assert_eq!(
//!     outcome,
//!     MoveOutcome::GameOver(GameOver::Won {
//!         winner: Player::X,
//!         line: WinLine::new([0, 1, 2]),
//!     })
//! );
//!
//! // "Play again" yields a brand new engine.
//! let game = game.reset();
//! assert!(game.board().squares().iter().all(|s| s.is_empty()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{GameOver, InvalidMove, MoveOutcome};
pub use board::{Board, CELL_COUNT};
pub use game::Game;
pub use position::Position;
pub use rules::{Evaluation, WIN_LINES, WinLine, evaluate, find_winning_line};
pub use types::{GameStatus, Player, Square};
