//! Application state and logic.

use super::input::{self, Action};
use crate::banner::{banner, outcome_message, rejection_message};
use crate::config::AppConfig;
use crossterm::event::KeyEvent;
use tictactoe_engine::{Game, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the current engine by value. "Play again" replaces it with the
/// engine returned by [`Game::reset`]; nothing from the old game survives.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    message: String,
    should_quit: bool,
    config: AppConfig,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: AppConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            message: "Arrows + Enter or keys 1-9 to play".to_string(),
            should_quit: false,
            config,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the last status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The banner line for the current game.
    pub fn banner(&self) -> String {
        banner(
            self.game.current_status(),
            self.game.active_player(),
            &self.config,
        )
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::MoveCursor(code) => self.cursor = input::move_cursor(self.cursor, code),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayAgain => self.play_again(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Asks the engine to play `pos` for the active player.
    ///
    /// While the game goes on, the cursor then moves off the marked square
    /// to the nearest free one.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        self.message = match self.game.apply_move(pos.to_index()) {
            Ok(outcome) => {
                if !outcome.is_game_over() {
                    self.settle_cursor();
                }
                outcome_message(&outcome, &self.config)
            }
            Err(reason) => rejection_message(&reason),
        };
    }

    /// Moves the cursor to the closest free square (by grid steps, ties in
    /// board order) if its own square is marked.
    fn settle_cursor(&mut self) {
        let board = self.game.board();
        if board.is_empty(self.cursor.to_index()) {
            return;
        }
        let from = self.cursor;
        if let Some(free) = Position::valid_moves(board)
            .into_iter()
            .min_by_key(|pos| from.row().abs_diff(pos.row()) + from.col().abs_diff(pos.col()))
        {
            debug!(?from, to = ?free, "Cursor moved off marked square");
            self.cursor = free;
        }
    }

    /// Starts a new game. Only available once the current game is over.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        if !self.game.current_status().is_terminal() {
            self.message = "Finish this game first".to_string();
            return;
        }
        info!("Starting a new game");
        self.game = self.game.reset();
        self.cursor = Position::Center;
        self.message = "New game".to_string();
    }
}
