use neurobit_lib::app::App;
use neurobit_lib::model::config::AppConfig;
use neurobit_lib::model::Cell;

fn seeded_config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.maze.seed = Some(seed);
    config
}

#[test]
fn test_run_drains_pending_spawns() {
    let mut app = App::new(seeded_config(1)).unwrap();
    app.queue_spawn(Cell::new(0, 0));
    app.queue_spawn(Cell::new(40, 40));
    app.run(3).unwrap();
    assert!(app.pending_spawns.is_empty());
    assert_eq!(app.sim.metrics().spawns(), 1);
    assert_eq!(app.sim.metrics().rejected_spawns(), 1);
}

#[test]
fn test_run_stops_when_empty() {
    let mut app = App::new(seeded_config(2)).unwrap();
    app.queue_spawn(Cell::new(1, 1));
    app.run(1000).unwrap();
    assert!(!app.running);
    assert!(app.sim.tick_count() <= app.config.pulse.ttl as u64);
}

#[test]
fn test_random_spawns_keep_running() {
    let mut app = App::new(seeded_config(3)).unwrap();
    app.random_spawns = 2;
    app.run(10).unwrap();
    assert_eq!(app.sim.tick_count(), 10);
    assert!(app.sim.metrics().spawns() > 0);
}

#[test]
fn test_invalid_config_refused() {
    let mut config = seeded_config(4);
    config.maze.cols = 1;
    assert!(App::new(config).is_err());
}

#[test]
fn test_debug_log_written_each_tick() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.log");
    let mut config = seeded_config(5);
    config.simulation.debug_log = Some(path.to_string_lossy().into_owned());

    let mut app = App::new(config).unwrap();
    app.queue_spawn(Cell::new(2, 2));
    app.run(1).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("POS:"));
}
