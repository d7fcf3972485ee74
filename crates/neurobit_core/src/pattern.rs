//! Adaptive 8-bit pattern matching units ("neurobits").

use neurobit_data::PatternSeed;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Masks sampled by [`PatternUnit::random`] when no mask set is configured.
pub const DEFAULT_MASKS: [u8; 3] = [0xF0, 0xF8, 0x00];

/// An 8-bit pattern/mask matcher with a reinforcement toggle.
///
/// Only bits selected by `mask` take part in matching. The mask is fixed for
/// the lifetime of the unit; the pattern changes only through [`adapt`].
///
/// [`adapt`]: PatternUnit::adapt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternUnit {
    id: Uuid,
    pattern: u8,
    mask: u8,
    action_code: u8,
    match_count: u64,
}

impl PatternUnit {
    /// Builds a unit with an explicit identifier.
    #[must_use]
    pub fn new(id: Uuid, seed: PatternSeed) -> Self {
        Self {
            id,
            pattern: seed.pattern,
            mask: seed.mask,
            action_code: seed.action_code,
            match_count: 0,
        }
    }

    /// Builds a unit from a seed record, drawing a fresh identifier from `rng`.
    pub fn from_seed<R: Rng>(seed: PatternSeed, rng: &mut R) -> Self {
        Self::new(Uuid::from_u128(rng.gen::<u128>()), seed)
    }

    /// Builds a unit with a random pattern and a mask drawn from `masks`.
    ///
    /// An empty `masks` slice falls back to [`DEFAULT_MASKS`].
    pub fn random<R: Rng>(masks: &[u8], rng: &mut R) -> Self {
        let seed = random_seed(masks, rng);
        Self::from_seed(seed, rng)
    }

    /// Tests `input` against the pattern under the mask.
    ///
    /// A match increments the match counter.
    pub fn evaluate(&mut self, input: u8) -> bool {
        if (input & self.mask) == (self.pattern & self.mask) {
            self.match_count += 1;
            true
        } else {
            false
        }
    }

    /// Applies a reward signal.
    ///
    /// Positive rewards XOR their low byte into the pattern, zero clears the
    /// match counter, negative rewards leave the unit untouched.
    pub fn adapt(&mut self, reward: i32) {
        if reward > 0 {
            self.pattern ^= (reward & 0xFF) as u8;
        } else if reward == 0 {
            self.match_count = 0;
        }
    }

    /// Clears the match counter; the pattern is kept.
    pub fn reset(&mut self) {
        self.match_count = 0;
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn pattern(&self) -> u8 {
        self.pattern
    }

    #[must_use]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    #[must_use]
    pub fn action_code(&self) -> u8 {
        self.action_code
    }

    #[must_use]
    pub fn match_count(&self) -> u64 {
        self.match_count
    }
}

impl fmt::Display for PatternUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatternUnit(id={}, pattern=0b{:08b}, mask=0b{:08b}, matches={})",
            self.id, self.pattern, self.mask, self.match_count
        )
    }
}

/// Samples a seed with a uniform pattern and a mask from `masks`.
pub fn random_seed<R: Rng>(masks: &[u8], rng: &mut R) -> PatternSeed {
    let pattern = rng.gen::<u8>();
    let mask = masks
        .choose(rng)
        .or_else(|| DEFAULT_MASKS.choose(rng))
        .copied()
        .unwrap_or(PatternSeed::DEFAULT_MASK);
    PatternSeed::new(pattern).with_mask(mask)
}
