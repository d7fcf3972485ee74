//! Pulses: finite-lifetime walkers that carry one pattern unit across a maze.

use crate::maze::MazeGraph;
use crate::pattern::PatternUnit;
use neurobit_data::{Cell, PulseView};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// What a single [`Pulse::step`] produced.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The pulse moved and remains in the active set.
    Moved { from: Cell, to: Cell },
    /// A new pulse for the driver to adopt.
    Spawned(Pulse),
}

/// Maps a cell onto the 8-bit signal a pattern unit sees.
#[inline]
#[must_use]
pub fn encode(cell: Cell) -> u8 {
    (((cell.row << 4) ^ cell.col) & 0xFF) as u8
}

#[derive(Debug, Clone)]
pub struct Pulse {
    position: Cell,
    unit: PatternUnit,
    maze: Arc<MazeGraph>,
    remaining_life: u32,
    history: Vec<Cell>,
    visited: HashSet<Cell>,
    exploration_rate: f64,
}

impl Pulse {
    /// Creates a pulse at `position` with `ttl` ticks to live.
    ///
    /// `exploration_rate` is clamped into `[0.0, 1.0]`; NaN counts as zero.
    #[must_use]
    pub fn new(
        position: Cell,
        unit: PatternUnit,
        maze: Arc<MazeGraph>,
        ttl: u32,
        exploration_rate: f64,
    ) -> Self {
        let exploration_rate = if exploration_rate.is_nan() {
            0.0
        } else {
            exploration_rate.clamp(0.0, 1.0)
        };
        Self {
            position,
            unit,
            maze,
            remaining_life: ttl,
            history: vec![position],
            visited: HashSet::from([position]),
            exploration_rate,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0
    }

    /// Whether the pulse has stepped out through an exit.
    #[must_use]
    pub fn has_exited(&self) -> bool {
        self.position.is_outside()
    }

    /// Advances the pulse by one tick.
    ///
    /// Neighbors are scanned in shuffled order. A candidate already in the
    /// history or in `blocked` is skipped, except the outside sentinel which
    /// is always eligible. The first candidate that either matches the
    /// pattern unit or, failing that, wins the exploration draw is taken and
    /// scanning stops.
    /// With no taker the pulse stays put. Dead pulses are left untouched.
    pub fn step<R: Rng>(&mut self, blocked: &HashSet<Cell>, rng: &mut R) -> Vec<StepOutcome> {
        if self.remaining_life == 0 {
            return Vec::new();
        }
        self.remaining_life -= 1;

        let mut candidates = self.maze.neighbors(self.position).to_vec();
        candidates.shuffle(rng);

        for candidate in candidates {
            if !candidate.is_outside()
                && (self.visited.contains(&candidate) || blocked.contains(&candidate))
            {
                continue;
            }

            let matched = self.unit.evaluate(encode(candidate));
            if matched || rng.gen::<f64>() < self.exploration_rate {
                let from = self.position;
                self.position = candidate;
                self.history.push(candidate);
                self.visited.insert(candidate);
                tracing::trace!(
                    unit = %self.unit.id(),
                    from = %from,
                    to = %candidate,
                    matched,
                    "Pulse moved"
                );
                return vec![StepOutcome::Moved {
                    from,
                    to: candidate,
                }];
            }
        }

        Vec::new()
    }

    #[must_use]
    pub fn view(&self) -> PulseView {
        PulseView {
            position: self.position,
            remaining_life: self.remaining_life,
            unit_id: self.unit.id(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[must_use]
    pub fn remaining_life(&self) -> u32 {
        self.remaining_life
    }

    #[must_use]
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    #[must_use]
    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    #[must_use]
    pub fn unit(&self) -> &PatternUnit {
        &self.unit
    }

    pub fn unit_mut(&mut self) -> &mut PatternUnit {
        &mut self.unit
    }

    #[must_use]
    pub fn unit_id(&self) -> Uuid {
        self.unit.id()
    }

    #[must_use]
    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }
}
