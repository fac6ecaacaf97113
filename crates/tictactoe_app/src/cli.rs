//! Command-line interface for the tic-tac-toe front ends.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (player names, logging)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on a terminal board
    Tui,

    /// Play a fixed list of moves and print the result
    Play {
        /// Comma-separated cell indices (0-8, row-major), e.g. "0,3,1,4,2"
        #[arg(short, long)]
        moves: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
