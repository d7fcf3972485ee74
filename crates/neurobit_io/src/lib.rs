//! # Neurobit IO
//!
//! Side collaborators of the simulation that touch the file system.
//!
//! This crate provides:
//! - Structured error handling with a custom error type
//! - JSON export of the maze description
//! - Configuration file loading
//! - The optional diagnostic pulse log
//!
//! None of these ever mutate simulation state.

/// Configuration file loading
pub mod config;
/// Optional per-tick dump of live pulses
pub mod debug_log;
/// Error types and result aliases for I/O operations
pub mod error;
/// JSON helpers and maze export
pub mod serialization;

pub use config::load_config;
pub use debug_log::DebugLog;
pub use error::{IoError, Result};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file, write_maze};
