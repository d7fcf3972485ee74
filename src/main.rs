use anyhow::Result;
use clap::Parser;
use neurobit_data::Cell;
use neurobit_lib::app::input::parse_cell;
use neurobit_lib::app::App;
use neurobit_lib::model::init_logging;
use neurobit_lib::model::io::write_maze;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of ticks to run (overrides `simulation.max_ticks`)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// RNG seed (overrides `maze.seed`)
    #[arg(long)]
    seed: Option<u64>,

    /// Spawn a pulse at ROW,COL before the first tick; repeatable
    #[arg(long = "spawn", value_parser = parse_cell)]
    spawns: Vec<Cell>,

    /// Pulses spawned at random cells before every tick
    #[arg(long, default_value_t = 0)]
    random_spawns: usize,

    /// Write the maze description as JSON to this path
    #[arg(long)]
    dump_maze: Option<String>,

    /// Rewrite a per-tick dump of live pulses to this path
    #[arg(long)]
    debug_log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = App::load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.maze.seed = Some(seed);
    }
    if let Some(path) = args.debug_log {
        config.simulation.debug_log = Some(path);
    }
    let max_ticks = args.ticks.unwrap_or(config.simulation.max_ticks);

    let mut app = App::new(config)?;
    if let Some(path) = &args.dump_maze {
        write_maze(app.sim.maze(), path)?;
    }

    app.random_spawns = args.random_spawns;
    for cell in args.spawns {
        app.queue_spawn(cell);
    }
    if app.pending_spawns.is_empty() && app.random_spawns == 0 {
        // Nothing requested: drop one pulse somewhere so the run shows something.
        let cell = app.sim.random_cell();
        app.queue_spawn(cell);
    }

    app.run(max_ticks)?;
    Ok(())
}
