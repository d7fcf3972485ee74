//! Maze graph over a `rows x cols` grid.
//!
//! Real cells are stored row-major. Each cell keeps its neighbors in the order
//! they were discovered; exit cells additionally carry one trailing edge to
//! [`Cell::OUTSIDE`]. The graph never changes after construction.

mod generation;

pub use generation::{boundary_cells, DEFAULT_EXIT_COUNT, DIRECTIONS};

use crate::error::{Result, SimError};
use neurobit_data::{Cell, CellDescription, MazeDescription};
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGraph {
    rows: u16,
    cols: u16,
    neighbors: Vec<Vec<Cell>>,
    exits: Vec<bool>,
}

impl MazeGraph {
    /// An edgeless graph; generation and `from_adjacency` fill it in.
    fn empty(rows: u16, cols: u16) -> Self {
        let len = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            neighbors: vec![Vec::new(); len],
            exits: vec![false; len],
        }
    }

    /// Builds a graph from an explicit adjacency map.
    ///
    /// Edges are taken as given, so the map may contain cycles or one-way
    /// links. Cells with an edge to [`Cell::OUTSIDE`] are flagged as exits.
    /// Cells missing from the map have no neighbors.
    pub fn from_adjacency(rows: u16, cols: u16, adjacency: &HashMap<Cell, Vec<Cell>>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SimError::configuration(format!(
                "maze dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let mut maze = Self::empty(rows, cols);
        for (cell, list) in adjacency {
            let idx = maze.index(*cell).ok_or_else(|| {
                SimError::configuration(format!("cell {cell} is outside the {rows}x{cols} grid"))
            })?;
            for neighbor in list {
                if neighbor.is_outside() {
                    maze.exits[idx] = true;
                } else if !maze.contains(*neighbor) {
                    return Err(SimError::configuration(format!(
                        "neighbor {neighbor} of {cell} is outside the {rows}x{cols} grid"
                    )));
                }
            }
            maze.neighbors[idx] = list.clone();
        }
        Ok(maze)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.in_bounds(self.rows, self.cols) {
            Some(cell.row as usize * self.cols as usize + cell.col as usize)
        } else {
            None
        }
    }

    /// Appends `b` to `a`'s list and `a` to `b`'s.
    fn link(&mut self, a: Cell, b: Cell) {
        if let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) {
            self.neighbors[ia].push(b);
            self.neighbors[ib].push(a);
        }
    }

    /// Adds the one-way edge to the sentinel and flags the cell.
    fn open_exit(&mut self, cell: Cell) {
        if let Some(idx) = self.index(cell) {
            self.neighbors[idx].push(Cell::OUTSIDE);
            self.exits[idx] = true;
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.rows, self.cols)
    }

    /// Neighbors of `cell` in discovery order. The sentinel and out-of-range
    /// cells have none.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        match self.index(cell) {
            Some(idx) => &self.neighbors[idx],
            None => &[],
        }
    }

    #[must_use]
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|idx| self.exits[idx])
    }

    /// All real cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Exit cells, row-major.
    pub fn exits(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|cell| self.is_exit(*cell))
    }

    /// Number of undirected edges between real cells.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let mut seen = HashSet::new();
        for cell in self.cells() {
            for &n in self.neighbors(cell) {
                if !n.is_outside() {
                    seen.insert(if cell < n { (cell, n) } else { (n, cell) });
                }
            }
        }
        seen.len()
    }

    /// Cells reachable from `start` along real edges, including `start`.
    #[must_use]
    pub fn reachable_from(&self, start: Cell) -> HashSet<Cell> {
        let mut visited = HashSet::new();
        if !self.contains(start) {
            return visited;
        }
        let mut queue = VecDeque::from([start]);
        visited.insert(start);
        while let Some(cell) = queue.pop_front() {
            for &n in self.neighbors(cell) {
                if !n.is_outside() && visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        visited
    }

    /// Read-only view for renderers.
    #[must_use]
    pub fn describe(&self) -> MazeDescription {
        MazeDescription {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells()
                .map(|cell| CellDescription {
                    cell,
                    neighbors: self.neighbors(cell).to_vec(),
                    exit: self.is_exit(cell),
                })
                .collect(),
        }
    }
}
