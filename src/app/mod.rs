pub mod input;
pub mod state;

pub use state::App;

use anyhow::Result;

impl App {
    /// Runs up to `max_ticks` ticks, stopping early once nothing is left to
    /// simulate.
    pub fn run(&mut self, max_ticks: u64) -> Result<()> {
        while self.running && self.sim.tick_count() < max_ticks {
            self.apply_input();
            let report = self.sim.tick();

            let log_failure = match &self.debug_log {
                Some(log) => log.write(&self.sim).err(),
                None => None,
            };
            if let Some(e) = log_failure {
                tracing::warn!(error = %e, "Debug log disabled");
                self.debug_log = None;
            }

            if report.live == 0 && self.random_spawns == 0 && self.pending_spawns.is_empty() {
                tracing::info!(tick = report.tick, "No pulses left");
                self.running = false;
            }
        }
        self.sim.metrics().log_summary();
        Ok(())
    }
}
