//! Win detection logic for tic-tac-toe.

use crate::board::CELL_COUNT;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices that win the game when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Creates a line from three cell indices.
    pub const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    /// The three cell indices, in ascending order for the built-in lines.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// True if `index` is one of the line's cells.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Evaluation scans them in this order and reports the first match.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new([0, 1, 2]),
    WinLine::new([3, 4, 5]),
    WinLine::new([6, 7, 8]),
    // Columns
    WinLine::new([0, 3, 6]),
    WinLine::new([1, 4, 7]),
    WinLine::new([2, 5, 8]),
    // Diagonals
    WinLine::new([0, 4, 8]),
    WinLine::new([2, 4, 6]),
];

/// Finds the first line in [`WIN_LINES`] order whose three cells hold the
/// same player's mark.
///
/// Works on any snapshot, including positions no legal game can reach; in
/// that case the declaration order decides which line is reported.
#[instrument(skip(squares))]
pub fn find_winning_line(squares: &[Square; CELL_COUNT]) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match squares[a] {
            Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}
