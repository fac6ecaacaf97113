//! Status text for the front ends.

use crate::config::AppConfig;
use tictactoe_engine::{GameOver, GameStatus, InvalidMove, MoveOutcome, Player};

/// The line shown above the board.
///
/// `active_player` only matters while the game is in progress.
pub fn banner(status: &GameStatus, active_player: Player, config: &AppConfig) -> String {
    match status {
        GameStatus::InProgress => {
            format!("It is {}'s turn", config.player_name(active_player))
        }
        GameStatus::Won { winner, .. } => {
            format!("Congratulations! {} has won!", config.player_name(*winner))
        }
        GameStatus::Draw => "It's a Draw. Game Over!".to_string(),
    }
}

/// One-line description of an accepted move.
pub fn outcome_message(outcome: &MoveOutcome, config: &AppConfig) -> String {
    match outcome {
        MoveOutcome::Continue { next_player } => {
            format!("{} to move", config.player_name(*next_player))
        }
        MoveOutcome::GameOver(GameOver::Won { winner, line }) => {
            format!("{} completed {}", config.player_name(*winner), line)
        }
        MoveOutcome::GameOver(GameOver::Draw) => "Board full with no winner".to_string(),
    }
}

/// Re-prompt hint for a rejected move. Cells are shown 1-based, matching the
/// number keys.
pub fn rejection_message(reason: &InvalidMove) -> String {
    match reason {
        InvalidMove::OutOfRange(_) => "Pick a square from 1 to 9".to_string(),
        InvalidMove::CellOccupied(index) => {
            format!("Square {} is taken, pick another", index + 1)
        }
        InvalidMove::GameAlreadyOver => "The game is over. Press 'r' to play again".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Game, WinLine};

    fn banner_after(moves: &[usize], config: &AppConfig) -> String {
        let mut game = Game::new();
        for &index in moves {
            game.apply_move(index).unwrap();
        }
        banner(game.current_status(), game.active_player(), config)
    }

    #[test]
    fn test_turn_banner() {
        let config = AppConfig::default();
        assert_eq!(banner_after(&[], &config), "It is Player 1's turn");
        assert_eq!(banner_after(&[4], &config), "It is Player 2's turn");
    }

    #[test]
    fn test_win_banner_uses_configured_name() {
        let config = AppConfig::from_toml(r#"player_o_name = "Grace""#).unwrap();
        assert_eq!(
            banner_after(&[0, 2, 1, 4, 8, 6], &config),
            "Congratulations! Grace has won!"
        );
    }

    #[test]
    fn test_draw_banner() {
        assert_eq!(
            banner_after(&[0, 1, 2, 3, 4, 6, 5, 8, 7], &AppConfig::default()),
            "It's a Draw. Game Over!"
        );
    }

    #[test]
    fn test_outcome_messages() {
        let config = AppConfig::default();
        let continue_outcome = MoveOutcome::Continue {
            next_player: Player::O,
        };
        assert_eq!(
            outcome_message(&continue_outcome, &config),
            "Player 2 to move"
        );
        assert_eq!(
            outcome_message(
                &MoveOutcome::GameOver(GameOver::Won {
                    winner: Player::X,
                    line: WinLine::new([0, 4, 8]),
                }),
                &config
            ),
            "Player 1 completed [0, 4, 8]"
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            rejection_message(&InvalidMove::CellOccupied(0)),
            "Square 1 is taken, pick another"
        );
        assert_eq!(
            rejection_message(&InvalidMove::OutOfRange(12)),
            "Pick a square from 1 to 9"
        );
    }
}
