//! Draw detection logic for tic-tac-toe.

use super::win::find_winning_line;
use crate::board::CELL_COUNT;
use crate::types::Square;
use tracing::instrument;

/// A full board with no completed line.
#[instrument(skip(squares))]
pub fn is_draw(squares: &[Square; CELL_COUNT]) -> bool {
    squares.iter().all(|s| !s.is_empty()) && find_winning_line(squares).is_none()
}
