//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults, missing keys keep them)
//! 3. Command-line flags (override the file)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [maze]
//! rows = 6
//! cols = 10
//! exits = 5
//! seed = 42
//!
//! [pulse]
//! ttl = 7
//! exploration_rate = 0.1
//! masks = [0xF0, 0xF8, 0x00]
//!
//! [simulation]
//! retire_on_exit = true
//! max_ticks = 200
//! ```

use crate::maze::{boundary_cells, DEFAULT_EXIT_COUNT};
use crate::pattern::DEFAULT_MASKS;
use serde::{Deserialize, Serialize};

/// Maze dimensions and exit layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: u16,
    pub cols: u16,
    pub exits: usize,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 10,
            exits: DEFAULT_EXIT_COUNT,
            seed: None,
        }
    }
}

/// Defaults applied to pulses spawned without an explicit request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PulseConfig {
    pub ttl: u32,
    pub exploration_rate: f64,
    /// Masks a random pattern unit draws from.
    pub masks: Vec<u8>,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            ttl: 7,
            exploration_rate: 0.1,
            masks: DEFAULT_MASKS.to_vec(),
        }
    }
}

/// Driver policy and run length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Remove pulses as soon as they step outside.
    pub retire_on_exit: bool,
    pub max_ticks: u64,
    /// Ticks between summary log lines.
    pub log_interval: u64,
    /// Diagnostic dump of live pulses; off when unset.
    pub debug_log: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            retire_on_exit: true,
            max_ticks: 200,
            log_interval: 50,
            debug_log: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub maze: MazeConfig,
    pub pulse: PulseConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Maze dimensions must be at least 2 and reasonable (<= 1000)
    /// - The boundary must hold at least `exits` distinct cells
    /// - Exploration rate must be in [0.0, 1.0]
    /// - Pulses must live at least one tick
    pub fn validate(&self) -> anyhow::Result<()> {
        // Maze validation
        anyhow::ensure!(self.maze.rows >= 2, "Maze needs at least 2 rows");
        anyhow::ensure!(self.maze.cols >= 2, "Maze needs at least 2 columns");
        anyhow::ensure!(self.maze.rows <= 1000, "Maze too tall (max 1000)");
        anyhow::ensure!(self.maze.cols <= 1000, "Maze too wide (max 1000)");
        let boundary = boundary_cells(self.maze.rows, self.maze.cols).len();
        anyhow::ensure!(
            self.maze.exits <= boundary,
            "{} exits do not fit on a boundary of {} cells",
            self.maze.exits,
            boundary
        );

        // Pulse validation
        anyhow::ensure!(self.pulse.ttl > 0, "Pulse ttl must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.pulse.exploration_rate),
            "Exploration rate must be in [0.0, 1.0]"
        );

        // Simulation validation
        anyhow::ensure!(
            self.simulation.log_interval > 0,
            "Log interval must be positive"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable hash of every setting that shapes a run.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.maze).as_bytes());
        hasher.update(format!("{:?}", self.pulse).as_bytes());
        hasher.update(self.simulation.retire_on_exit.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}
