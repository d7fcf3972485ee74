pub mod macros;

use neurobit_lib::model::config::AppConfig;
use neurobit_lib::model::maze::MazeGraph;
use neurobit_lib::model::pattern::PatternUnit;
use neurobit_lib::model::simulation::Simulation;
use neurobit_lib::model::{Cell, PatternSeed, SpawnRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use uuid::Uuid;

/// The 2x2 graph where every cell links to both of its grid neighbors.
#[allow(dead_code)]
pub fn square_adjacency() -> HashMap<Cell, Vec<Cell>> {
    HashMap::from([
        (Cell::new(0, 0), vec![Cell::new(0, 1), Cell::new(1, 0)]),
        (Cell::new(0, 1), vec![Cell::new(0, 0), Cell::new(1, 1)]),
        (Cell::new(1, 0), vec![Cell::new(0, 0), Cell::new(1, 1)]),
        (Cell::new(1, 1), vec![Cell::new(0, 1), Cell::new(1, 0)]),
    ])
}

#[allow(dead_code)]
pub fn square_maze() -> MazeGraph {
    MazeGraph::from_adjacency(2, 2, &square_adjacency()).expect("square is a valid 2x2 graph")
}

/// A unit that matches every input.
#[allow(dead_code)]
pub fn open_unit() -> PatternUnit {
    PatternUnit::new(Uuid::nil(), PatternSeed::new(0).with_mask(0x00))
}

#[allow(dead_code)]
pub struct SimBuilder {
    config: AppConfig,
    maze: Option<MazeGraph>,
    seed: u64,
    spawns: Vec<SpawnRequest>,
}

#[allow(dead_code)]
impl SimBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            maze: None,
            seed: 0,
            spawns: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.config.maze.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_maze(mut self, maze: MazeGraph) -> Self {
        self.maze = Some(maze);
        self
    }

    pub fn with_pulse(mut self, row: i32, col: i32, seed: PatternSeed, ttl: u32, rate: f64) -> Self {
        self.spawns.push(SpawnRequest {
            position: Cell::new(row, col),
            seed,
            ttl,
            exploration_rate: rate,
        });
        self
    }

    pub fn build(self) -> Simulation {
        let rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut sim = match self.maze {
            Some(maze) => Simulation::with_maze(maze, self.config, rng),
            None => Simulation::new(self.config, rng).expect("builder config is valid"),
        };
        for request in self.spawns {
            sim.spawn(request).expect("builder spawns are in range");
        }
        sim
    }
}
