use anyhow::{Context, Result};
use neurobit_data::Cell;
use neurobit_io::DebugLog;
use std::collections::VecDeque;

use crate::model::config::AppConfig;
use crate::model::simulation::Simulation;

/// Headless front end: owns the simulation and plays the role of the input
/// layer by feeding it queued spawn requests.
pub struct App {
    pub running: bool,
    pub sim: Simulation,
    pub config: AppConfig,
    pub debug_log: Option<DebugLog>,
    /// Random spawns issued before every tick.
    pub random_spawns: usize,
    pub pending_spawns: VecDeque<Cell>,
}

impl App {
    pub fn load_config(config_path: &str) -> Result<AppConfig> {
        neurobit_io::load_config(config_path).with_context(|| format!("loading {config_path}"))
    }

    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            fingerprint = %config.fingerprint(),
            rows = config.maze.rows,
            cols = config.maze.cols,
            "Configuration loaded"
        );
        let sim = Simulation::from_config(config.clone()).context("building maze")?;
        let debug_log = DebugLog::from_setting(config.simulation.debug_log.as_deref());

        Ok(Self {
            running: true,
            sim,
            config,
            debug_log,
            random_spawns: 0,
            pending_spawns: VecDeque::new(),
        })
    }

    /// Queues a spawn at `cell`; it is applied right before the next tick.
    pub fn queue_spawn(&mut self, cell: Cell) {
        self.pending_spawns.push_back(cell);
    }
}
