use neurobit_lib::model::error::SimError;
use neurobit_lib::model::maze::{MazeGraph, DEFAULT_EXIT_COUNT};
use neurobit_lib::model::Cell;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn generate(rows: u16, cols: u16, seed: u64) -> MazeGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    MazeGraph::generate(rows, cols, DEFAULT_EXIT_COUNT, &mut rng).expect("maze is large enough")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_maze_is_spanning_tree(rows in 2u16..24, cols in 3u16..24, seed in any::<u64>()) {
        let maze = generate(rows, cols, seed);
        let cells = rows as usize * cols as usize;
        prop_assert_eq!(maze.edge_count(), cells - 1);
        prop_assert_eq!(maze.reachable_from(Cell::new(0, 0)).len(), cells);
    }

    #[test]
    fn test_real_edges_are_symmetric_and_unique(rows in 2u16..16, cols in 3u16..16, seed in any::<u64>()) {
        let maze = generate(rows, cols, seed);
        for cell in maze.cells() {
            let neighbors = maze.neighbors(cell);
            let unique: std::collections::HashSet<_> = neighbors.iter().collect();
            prop_assert_eq!(unique.len(), neighbors.len());
            for &n in neighbors {
                if n.is_outside() {
                    continue;
                }
                prop_assert!(maze.contains(n));
                prop_assert_eq!((n.row - cell.row).abs() + (n.col - cell.col).abs(), 1);
                prop_assert!(maze.neighbors(n).contains(&cell));
            }
        }
    }

    #[test]
    fn test_exactly_five_exits(rows in 2u16..20, cols in 3u16..20, seed in any::<u64>()) {
        let maze = generate(rows, cols, seed);
        let exits: Vec<Cell> = maze.exits().collect();
        prop_assert_eq!(exits.len(), DEFAULT_EXIT_COUNT);

        for cell in maze.cells() {
            let sentinel_edges = maze
                .neighbors(cell)
                .iter()
                .filter(|n| n.is_outside())
                .count();
            if maze.is_exit(cell) {
                prop_assert_eq!(sentinel_edges, 1);
                prop_assert!(
                    cell.row == 0
                        || cell.col == 0
                        || cell.row == rows as i32 - 1
                        || cell.col == cols as i32 - 1
                );
            } else {
                prop_assert_eq!(sentinel_edges, 0);
            }
        }
    }
}

#[test]
fn test_sentinel_edges_are_one_way() {
    let maze = generate(6, 10, 42);
    assert!(maze.neighbors(Cell::OUTSIDE).is_empty());
    let desc = maze.describe();
    for entry in &desc.cells {
        if entry.exit {
            assert_eq!(entry.neighbors.last(), Some(&Cell::OUTSIDE));
        }
    }
}

#[test]
fn test_small_boundaries_fail_instead_of_clamping() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for (rows, cols) in [(1, 10), (10, 1), (2, 2), (1, 1)] {
        let err = MazeGraph::generate(rows, cols, DEFAULT_EXIT_COUNT, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)), "{rows}x{cols}");
        assert!(err.is_fatal());
    }
}

#[test]
fn test_smallest_viable_maze() {
    // 2x3 has exactly 6 boundary cells.
    let maze = generate(2, 3, 7);
    assert_eq!(maze.edge_count(), 5);
    assert_eq!(maze.exits().count(), 5);
}
