//! # Neurobit Core
//!
//! The simulation engine for Neurobit: adaptive bit-pattern agents that walk
//! a procedurally generated maze as pulses.
//!
//! This crate contains:
//! - Pattern units (8-bit pattern/mask matchers with an XOR reward rule)
//! - Maze generation (randomized depth-first spanning tree plus boundary exits)
//! - Pulse traversal (no-revisit walks with exploration and collision avoidance)
//! - The tick-driven simulation driver
//! - Configuration, error types, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use neurobit_core::config::AppConfig;
//! use neurobit_core::simulation::Simulation;
//! use neurobit_data::Cell;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = AppConfig::default();
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut sim = Simulation::new(config, rng).unwrap();
//!
//! sim.spawn_random(Cell::new(2, 3)).unwrap();
//! let report = sim.tick();
//! assert_eq!(report.tick, 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Error types for maze construction and spawning
pub mod error;
/// Maze graph and its randomized generation
pub mod maze;
/// Tick counters and logging setup
pub mod metrics;
/// Adaptive 8-bit pattern matching units
pub mod pattern;
/// Pulses walking the maze
pub mod pulse;
/// Tick-driven simulation driver
pub mod simulation;

pub use error::{Result, SimError};
pub use maze::MazeGraph;
pub use metrics::{init_logging, Metrics};
pub use neurobit_data::{Cell, PatternSeed, PulseView, SpawnRequest};
pub use pattern::PatternUnit;
pub use pulse::{Pulse, StepOutcome};
pub use simulation::{Simulation, TickReport};
