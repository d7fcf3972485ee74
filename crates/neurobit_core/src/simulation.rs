//! Tick-driven simulation driver.
//!
//! The driver owns the maze and every live pulse. Each tick it takes one
//! snapshot of occupied cells before anything moves and steps every pulse
//! against that snapshot, so move legality never depends on the order pulses
//! are visited in. Spawn requests are applied immediately and therefore always
//! land between ticks.

use crate::config::AppConfig;
use crate::error::{Result, SimError};
use crate::maze::MazeGraph;
use crate::metrics::Metrics;
use crate::pattern::{random_seed, PatternUnit};
use crate::pulse::{Pulse, StepOutcome};
use neurobit_data::{Cell, PulseView, SpawnRequest};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Counter name for live pulses that found no acceptable neighbor.
pub const STALLED: &str = "stalled";

/// Summary of one [`Simulation::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Pulses that changed cell.
    pub moved: usize,
    /// Units whose pulse stepped outside this tick.
    pub exited: Vec<Uuid>,
    /// Pulses removed because their life ran out.
    pub expired: usize,
    /// Pulses adopted from step outcomes. Stepping never produces any, so
    /// this stays 0 unless a pulse type that spawns is added.
    pub spawned: usize,
    /// Pulses still active after the tick.
    pub live: usize,
}

pub struct Simulation {
    config: AppConfig,
    maze: Arc<MazeGraph>,
    pulses: Vec<Pulse>,
    rng: ChaCha8Rng,
    tick: u64,
    metrics: Metrics,
}

impl Simulation {
    /// Generates a maze from `config` and wraps it in an empty simulation.
    ///
    /// Maze generation errors are fatal and returned as-is.
    pub fn new(config: AppConfig, mut rng: ChaCha8Rng) -> Result<Self> {
        let maze = MazeGraph::generate(
            config.maze.rows,
            config.maze.cols,
            config.maze.exits,
            &mut rng,
        )?;
        Ok(Self::with_maze(maze, config, rng))
    }

    /// Like [`Simulation::new`], seeding from `config.maze.seed` or entropy.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let rng = match config.maze.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(config, rng)
    }

    /// Runs on an existing maze. The maze dimensions in `config` are ignored.
    #[must_use]
    pub fn with_maze(maze: MazeGraph, config: AppConfig, rng: ChaCha8Rng) -> Self {
        let metrics = Metrics::new(config.simulation.log_interval);
        Self {
            config,
            maze: Arc::new(maze),
            pulses: Vec::new(),
            rng,
            tick: 0,
            metrics,
        }
    }

    /// Adds a pulse for `request` and returns the id of its pattern unit.
    ///
    /// Positions outside the grid and exploration rates outside `[0, 1]` are
    /// rejected; the active set is left unchanged in that case.
    pub fn spawn(&mut self, request: SpawnRequest) -> Result<Uuid> {
        if let Err(err) = self.check_spawn(&request) {
            self.metrics.record_rejected_spawn();
            tracing::warn!(error = %err, "Spawn rejected");
            return Err(err);
        }

        let unit = PatternUnit::from_seed(request.seed, &mut self.rng);
        let id = unit.id();
        self.pulses.push(Pulse::new(
            request.position,
            unit,
            Arc::clone(&self.maze),
            request.ttl,
            request.exploration_rate,
        ));
        self.metrics.record_spawn();
        tracing::debug!(
            unit = %id,
            position = %request.position,
            ttl = request.ttl,
            "Pulse spawned"
        );
        Ok(id)
    }

    /// Spawns a pulse with a random pattern unit and the configured defaults.
    pub fn spawn_random(&mut self, position: Cell) -> Result<Uuid> {
        let seed = random_seed(&self.config.pulse.masks, &mut self.rng);
        self.spawn(SpawnRequest {
            position,
            seed,
            ttl: self.config.pulse.ttl,
            exploration_rate: self.config.pulse.exploration_rate,
        })
    }

    fn check_spawn(&self, request: &SpawnRequest) -> Result<()> {
        if !self.maze.contains(request.position) {
            return Err(SimError::OutOfRangeSpawn {
                row: request.position.row,
                col: request.position.col,
                rows: self.maze.rows(),
                cols: self.maze.cols(),
            });
        }
        if !(0.0..=1.0).contains(&request.exploration_rate) {
            return Err(SimError::InvalidExplorationRate(request.exploration_rate));
        }
        Ok(())
    }

    /// A uniformly chosen real cell.
    pub fn random_cell(&mut self) -> Cell {
        let row = self.rng.gen_range(0..self.maze.rows() as i32);
        let col = self.rng.gen_range(0..self.maze.cols() as i32);
        Cell::new(row, col)
    }

    /// Advances every pulse once.
    pub fn tick(&mut self) -> TickReport {
        let started = Instant::now();
        self.tick += 1;

        let blocked: HashSet<Cell> = self
            .pulses
            .iter()
            .filter(|p| p.is_alive())
            .map(Pulse::position)
            .collect();

        let mut report = TickReport {
            tick: self.tick,
            ..Default::default()
        };
        let mut born = Vec::new();
        for pulse in &mut self.pulses {
            let was_alive = pulse.is_alive();
            let outcomes = pulse.step(&blocked, &mut self.rng);
            if was_alive && !outcomes.iter().any(|o| matches!(o, StepOutcome::Moved { .. })) {
                self.metrics.increment_counter(STALLED);
            }
            for outcome in outcomes {
                match outcome {
                    StepOutcome::Moved { to, .. } => {
                        report.moved += 1;
                        if to.is_outside() {
                            report.exited.push(pulse.unit_id());
                        }
                    }
                    StepOutcome::Spawned(child) => born.push(child),
                }
            }
        }
        report.spawned = born.len();
        self.pulses.extend(born);

        let retire_on_exit = self.config.simulation.retire_on_exit;
        let mut expired = 0;
        self.pulses.retain(|pulse| {
            if retire_on_exit && pulse.has_exited() {
                return false;
            }
            if !pulse.is_alive() {
                expired += 1;
                return false;
            }
            true
        });
        report.expired = expired;
        report.live = self.pulses.len();

        for id in &report.exited {
            tracing::debug!(unit = %id, tick = self.tick, "Pulse exited the maze");
        }
        self.metrics.record_tick(
            started.elapsed(),
            report.live,
            report.moved,
            report.exited.len(),
        );
        report
    }

    /// Routes a reward signal to the pattern unit `unit_id`.
    ///
    /// Returns `false` when no live pulse carries that unit.
    pub fn reward(&mut self, unit_id: Uuid, reward: i32) -> bool {
        match self.pulses.iter_mut().find(|p| p.unit_id() == unit_id) {
            Some(pulse) => {
                pulse.unit_mut().adapt(reward);
                true
            }
            None => false,
        }
    }

    /// Read-only view of every live pulse.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PulseView> {
        self.pulses.iter().map(Pulse::view).collect()
    }

    #[must_use]
    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }

    #[must_use]
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    #[must_use]
    pub fn pulse_count(&self) -> usize {
        self.pulses.len()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
