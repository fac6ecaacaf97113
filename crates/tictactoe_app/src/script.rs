//! Headless play of a fixed move list.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Serialize;
use tictactoe_engine::{Board, Game, GameStatus, InvalidMove, MoveOutcome, Player};
use tracing::{debug, info, instrument, warn};

/// Errors from scripted play.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// A token in the move list is not a non-negative integer.
    #[display("Invalid move {:?}: expected a cell index 0-8", token)]
    Parse {
        /// The offending token.
        token: String,
    },

    /// The move list is empty.
    #[display("No moves given")]
    Empty,

    /// The engine rejected a move.
    #[display("Move {} (cell {}) rejected", step, index)]
    Rejected {
        /// 1-based position of the move in the list.
        step: usize,
        /// The cell index that was rejected.
        index: usize,
        /// Why the engine rejected it.
        source: InvalidMove,
    },
}

/// What happened when a move list was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct ScriptReport {
    /// The moves, in the order they were applied.
    moves: Vec<usize>,
    /// One outcome per move.
    outcomes: Vec<MoveOutcome>,
    /// Final game status.
    status: GameStatus,
    /// Final board.
    board: Board,
    /// Who moves next; after a terminal result, who moved last.
    active_player: Player,
}

/// Parses a comma-separated list of cell indices, e.g. `"0, 3,1"`.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ScriptError> {
    let moves = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<usize>().map_err(|_| ScriptError::Parse {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if moves.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(moves)
}

/// Plays `moves` on a fresh game, stopping at the first rejected move.
#[instrument]
pub fn run_script(moves: &[usize]) -> Result<ScriptReport, ScriptError> {
    let mut game = Game::new();
    let mut outcomes = Vec::with_capacity(moves.len());

    for (step, &index) in moves.iter().enumerate() {
        let outcome = game.apply_move(index).map_err(|source| {
            warn!(step = step + 1, index, %source, "Scripted move rejected");
            ScriptError::Rejected {
                step: step + 1,
                index,
                source,
            }
        })?;
        debug!(step = step + 1, index, ?outcome, "Scripted move applied");
        outcomes.push(outcome);
    }

    let status = *game.current_status();
    info!(moves = moves.len(), ?status, "Script finished");
    Ok(ScriptReport::new(
        moves.to_vec(),
        outcomes,
        status,
        game.board().clone(),
        game.active_player(),
    ))
}
