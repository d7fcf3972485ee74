use super::MazeGraph;
use crate::error::{Result, SimError};
use neurobit_data::Cell;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Number of boundary cells opened to the outside when nothing else is configured.
pub const DEFAULT_EXIT_COUNT: usize = 5;

/// Up, right, down, left as `(d_row, d_col)`; shuffled per visited cell.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// One level of the depth-first walk.
///
/// `pending` holds the child currently being explored; its edge to `cell` is
/// recorded only once the walk comes back up to this frame.
struct Frame {
    cell: Cell,
    dirs: [(i32, i32); 4],
    next: usize,
    pending: Option<Cell>,
}

impl Frame {
    fn enter<R: Rng>(cell: Cell, rng: &mut R) -> Self {
        let mut dirs = DIRECTIONS;
        dirs.shuffle(rng);
        Self {
            cell,
            dirs,
            next: 0,
            pending: None,
        }
    }
}

impl MazeGraph {
    /// Generates a maze: a randomized depth-first spanning tree rooted at
    /// `(0, 0)`, then `exit_count` distinct boundary cells opened to
    /// [`Cell::OUTSIDE`].
    ///
    /// Fails with [`SimError::Configuration`] when either dimension is below 2
    /// or the boundary has fewer than `exit_count` cells.
    pub fn generate<R: Rng>(rows: u16, cols: u16, exit_count: usize, rng: &mut R) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(SimError::configuration(format!(
                "maze must be at least 2x2, got {rows}x{cols}"
            )));
        }
        let boundary = boundary_cells(rows, cols);
        if boundary.len() < exit_count {
            return Err(SimError::configuration(format!(
                "{exit_count} exits requested but a {rows}x{cols} maze has only {} boundary cells",
                boundary.len()
            )));
        }

        let mut maze = Self::empty(rows, cols);
        maze.carve(rng);
        for &cell in boundary.choose_multiple(rng, exit_count) {
            maze.open_exit(cell);
        }

        tracing::info!(
            rows = rows,
            cols = cols,
            exits = exit_count,
            edges = maze.edge_count(),
            "Maze generated"
        );
        Ok(maze)
    }

    fn carve<R: Rng>(&mut self, rng: &mut R) {
        let mut visited = vec![false; self.neighbors.len()];
        let origin = Cell::new(0, 0);
        visited[0] = true;

        let mut stack = vec![Frame::enter(origin, rng)];
        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.take() {
                self.link(frame.cell, child);
            }

            let mut descend = None;
            while frame.next < frame.dirs.len() {
                let (dr, dc) = frame.dirs[frame.next];
                frame.next += 1;
                let candidate = frame.cell.offset(dr, dc);
                if let Some(idx) = self.index(candidate) {
                    if !visited[idx] {
                        visited[idx] = true;
                        frame.pending = Some(candidate);
                        descend = Some(candidate);
                        break;
                    }
                }
            }

            match descend {
                Some(cell) => stack.push(Frame::enter(cell, rng)),
                None => {
                    stack.pop();
                }
            }
        }
    }
}

/// Boundary cells of a `rows x cols` grid without duplicates: both side
/// columns row by row, then the top and bottom rows between the corners.
#[must_use]
pub fn boundary_cells(rows: u16, cols: u16) -> Vec<Cell> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let (rows, cols) = (rows as i32, cols as i32);
    let mut seen = HashSet::new();
    let mut cells = Vec::new();
    let mut push = |cell: Cell| {
        if seen.insert(cell) {
            cells.push(cell);
        }
    };
    for r in 0..rows {
        push(Cell::new(r, 0));
        push(Cell::new(r, cols - 1));
    }
    for c in 1..cols - 1 {
        push(Cell::new(0, c));
        push(Cell::new(rows - 1, c));
    }
    cells
}
