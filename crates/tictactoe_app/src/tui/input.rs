//! Key bindings and cursor movement for keyboard navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a square directly (number keys 1-9).
    Play(Position),
    /// Start a new game once the current one is over.
    PlayAgain,
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action; unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Play),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::PlayAgain),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|row| Position::at(row, col)),
        KeyCode::Down => Position::at(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|col| Position::at(row, col)),
        KeyCode::Right => Position::at(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
