use super::cell::Cell;
use serde::{Deserialize, Serialize};

/// One cell of a [`MazeDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDescription {
    pub cell: Cell,
    /// Neighbors in discovery order; exit cells end with [`Cell::OUTSIDE`].
    pub neighbors: Vec<Cell>,
    pub exit: bool,
}

/// Read-only snapshot of a maze for renderers and exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeDescription {
    pub rows: u16,
    pub cols: u16,
    /// Row-major, one entry per real cell.
    pub cells: Vec<CellDescription>,
}

impl MazeDescription {
    /// Exit flags as a `rows x cols` grid. Cells outside the grid are ignored.
    #[must_use]
    pub fn exit_grid(&self) -> Vec<Vec<bool>> {
        let mut grid = vec![vec![false; self.cols as usize]; self.rows as usize];
        for desc in &self.cells {
            if desc.exit && desc.cell.in_bounds(self.rows, self.cols) {
                grid[desc.cell.row as usize][desc.cell.col as usize] = true;
            }
        }
        grid
    }
}
