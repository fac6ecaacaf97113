//! The 3x3 board: nine cell marks in row-major order.

use crate::action::InvalidMove;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Once a cell holds a player's mark it is never cleared; a new game builds
/// a new board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (index = row * 3 + col).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::OutOfRange`] if `index` is not in 0-8
    /// - [`InvalidMove::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self))]
    pub fn mark_cell(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        let square = self
            .squares
            .get_mut(index)
            .ok_or(InvalidMove::OutOfRange(index))?;
        if !square.is_empty() {
            return Err(InvalidMove::CellOccupied(index));
        }
        *square = Square::Occupied(player);
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Returns all squares as a borrowed array.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns an owned copy of the marks.
    pub fn snapshot(&self) -> [Square; CELL_COUNT] {
        self.squares
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty cells shown as their 1-based key.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
