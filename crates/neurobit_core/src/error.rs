//! Error types for neurobit_core.
//!
//! Construction-time failures are fatal to setup; spawn failures are reported
//! to the caller and leave the simulation untouched. A pulse that cannot move
//! is not an error and never shows up here.

use thiserror::Error;

/// Main error type for simulation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Maze dimensions or exit count cannot be satisfied
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Spawn position lies outside the grid
    #[error("Spawn position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRangeSpawn {
        row: i32,
        col: i32,
        rows: u16,
        cols: u16,
    },

    /// Exploration rate is not a probability
    #[error("Exploration rate {0} is outside [0.0, 1.0]")]
    InvalidExplorationRate(f64),
}

/// Result type alias for neurobit_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the error must abort setup rather than be reported and skipped.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::configuration("maze too small");
        assert_eq!(err.to_string(), "Configuration error: maze too small");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = SimError::OutOfRangeSpawn {
            row: 9,
            col: -1,
            rows: 6,
            cols: 10,
        };
        assert!(err.to_string().contains("(9, -1)"));
        assert!(err.to_string().contains("6x10"));
    }

    #[test]
    fn test_fatality() {
        assert!(SimError::configuration("x").is_fatal());
        assert!(!SimError::InvalidExplorationRate(2.0).is_fatal());
    }
}
