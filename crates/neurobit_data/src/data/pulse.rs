use super::cell::Cell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Construction record for a pattern unit.
///
/// Fields left out of a serialized seed fall back to the documented
/// defaults: a full mask (`0xFF`, every bit participates) and action code `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSeed {
    pub pattern: u8,
    #[serde(default = "PatternSeed::default_mask")]
    pub mask: u8,
    #[serde(default)]
    pub action_code: u8,
}

impl PatternSeed {
    pub const DEFAULT_MASK: u8 = 0xFF;

    #[must_use]
    pub fn new(pattern: u8) -> Self {
        Self {
            pattern,
            mask: Self::DEFAULT_MASK,
            action_code: 0,
        }
    }

    #[must_use]
    pub fn with_mask(mut self, mask: u8) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub fn with_action_code(mut self, action_code: u8) -> Self {
        self.action_code = action_code;
        self
    }

    fn default_mask() -> u8 {
        Self::DEFAULT_MASK
    }
}

impl Default for PatternSeed {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Request from the input layer to start a new pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub position: Cell,
    pub seed: PatternSeed,
    pub ttl: u32,
    pub exploration_rate: f64,
}

/// Read-only per-tick view of a live pulse, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseView {
    pub position: Cell,
    pub remaining_life: u32,
    pub unit_id: Uuid,
}
