use neurobit_data::Cell;

use crate::app::state::App;

/// Parses `"row,col"` into a cell.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Cell::new(row, col))
}

impl App {
    /// Applies queued and random spawns. Rejected requests are logged by the
    /// simulation and skipped; the run goes on.
    pub fn apply_input(&mut self) -> usize {
        let mut accepted = 0;
        while let Some(cell) = self.pending_spawns.pop_front() {
            if self.sim.spawn_random(cell).is_ok() {
                accepted += 1;
            }
        }
        for _ in 0..self.random_spawns {
            let cell = self.sim.random_cell();
            if self.sim.spawn_random(cell).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }
}
