//! Run counters and logging setup.
//!
//! Provides structured logging and per-run statistics for monitoring the
//! simulation.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters for one simulation run.
#[derive(Debug, Clone)]
pub struct Metrics {
    tick_count: u64,
    live_pulses: usize,
    moves: u64,
    exits: u64,
    spawns: u64,
    rejected_spawns: u64,
    counters: HashMap<String, u64>,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: 0,
            live_pulses: 0,
            moves: 0,
            exits: 0,
            spawns: 0,
            rejected_spawns: 0,
            counters: HashMap::new(),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick.
    pub fn record_tick(&mut self, duration: Duration, live: usize, moves: usize, exits: usize) {
        self.tick_count += 1;
        self.live_pulses = live;
        self.moves += moves as u64;
        self.exits += exits as u64;

        if self.tick_count % self.log_interval == 0 {
            tracing::info!(
                tick = self.tick_count,
                pulses = live,
                moves = self.moves,
                exits = self.exits,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn record_spawn(&mut self) {
        self.spawns += 1;
    }

    pub fn record_rejected_spawn(&mut self) {
        self.rejected_spawns += 1;
    }

    /// Increments a named counter.
    pub fn increment_counter(&mut self, name: &str) {
        *self.counters.entry(name.to_string()).or_insert(0) += 1;
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn live_pulses(&self) -> usize {
        self.live_pulses
    }

    #[must_use]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    #[must_use]
    pub fn exits(&self) -> u64 {
        self.exits
    }

    #[must_use]
    pub fn spawns(&self) -> u64 {
        self.spawns
    }

    #[must_use]
    pub fn rejected_spawns(&self) -> u64 {
        self.rejected_spawns
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the end-of-run summary.
    pub fn log_summary(&self) {
        tracing::info!(
            ticks = self.tick_count,
            pulses = self.live_pulses,
            moves = self.moves,
            exits = self.exits,
            spawns = self.spawns,
            rejected = self.rejected_spawns,
            stalled = self.counter("stalled"),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Run finished"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`; falls back to `info` for the neurobit crates.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("neurobit=info,neurobit_core=info,neurobit_io=info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt().with_env_filter(filter).finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new(10);
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.moves(), 0);
    }

    #[test]
    fn test_record_tick() {
        let mut metrics = Metrics::new(10);
        metrics.record_tick(Duration::from_millis(1), 4, 3, 1);
        metrics.record_tick(Duration::from_millis(1), 2, 2, 0);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.live_pulses(), 2);
        assert_eq!(metrics.moves(), 5);
        assert_eq!(metrics.exits(), 1);
    }

    #[test]
    fn test_counters() {
        let mut metrics = Metrics::default();
        metrics.increment_counter("stalled");
        metrics.increment_counter("stalled");
        assert_eq!(metrics.counter("stalled"), 2);
        assert_eq!(metrics.counter("missing"), 0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut metrics = Metrics::new(0);
        metrics.record_tick(Duration::ZERO, 0, 0, 0);
        assert_eq!(metrics.tick_count(), 1);
    }
}
