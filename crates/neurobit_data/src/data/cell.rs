use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate, `(row, col)`.
///
/// Real maze cells always have non-negative components. The single negative
/// coordinate in use is [`Cell::OUTSIDE`], the sentinel every exit edge
/// points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Sentinel for "outside the maze".
    pub const OUTSIDE: Cell = Cell { row: -1, col: -1 };

    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn is_outside(&self) -> bool {
        *self == Self::OUTSIDE
    }

    /// Whether the cell lies inside a `rows x cols` grid.
    #[must_use]
    pub fn in_bounds(&self, rows: u16, cols: u16) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < rows as i32 && self.col < cols as i32
    }

    /// Returns the cell shifted by `(dr, dc)`.
    #[must_use]
    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
