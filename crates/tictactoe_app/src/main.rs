//! Tic-tac-toe - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_app::{
    AppConfig, Cli, Command, ScriptReport, banner, init_file_logging, init_stderr_logging,
    log_config, outcome_message, parse_moves, run_script, tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Tui => {
            // Log to a file to avoid interfering with the TUI
            init_file_logging(config.log_file(), config.log_filter())?;
            log_config(&config, cli.config.as_deref());
            tui::run_tui(config)
        }
        Command::Play { moves, json } => {
            init_stderr_logging(config.log_filter());
            log_config(&config, cli.config.as_deref());
            run_play(&config, &moves, json)
        }
    }
}

/// Plays a move list headlessly and prints the result.
#[instrument(skip(config))]
fn run_play(config: &AppConfig, moves: &str, json: bool) -> Result<()> {
    info!("Starting scripted game");

    let moves = parse_moves(moves)?;
    let report = run_script(&moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(config, &report);
    }
    Ok(())
}

fn print_report(config: &AppConfig, report: &ScriptReport) {
    for (index, outcome) in report.moves().iter().zip(report.outcomes()) {
        println!("cell {}: {}", index, outcome_message(outcome, config));
    }
    println!();
    println!("{}", report.board());
    println!();
    println!(
        "{}",
        banner(report.status(), *report.active_player(), config)
    );
}
