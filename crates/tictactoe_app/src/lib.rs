//! Front ends for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for player names and logging
//! - **Banner**: the status line shown above the board
//! - **Script**: headless play of a fixed move list
//! - **TUI**: interactive terminal board (ratatui + crossterm)
//!
//! The engine never renders; everything here reacts to the
//! [`tictactoe_engine::MoveOutcome`] values it returns.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod banner;
mod cli;
mod config;
mod logging;
mod script;
pub mod tui;

pub use banner::{banner, outcome_message, rejection_message};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging, log_config};
pub use script::{ScriptError, ScriptReport, parse_moves, run_script};
