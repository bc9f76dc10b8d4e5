//! uav-patrol: plan collision-free patrol routes for a drone fleet.
//!
//! ```text
//! uav-patrol <INSTANCE> <AGENTS> <ITERATIONS> <TICKS> [--seed N] [--config FILE] [--export DIR] [--times]
//! ```
//!
//! Loads a grid instance, runs the annealing search and prints the final
//! score followed by every agent's trajectory.  `RUST_LOG` controls log
//! output (default `info`).

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{arg, Command};
use tracing_subscriber::EnvFilter;

use uav_core::AgentId;
use uav_eval::count_collisions;
use uav_grid::load_grid_file;
use uav_output::{export_solution, CsvWriter, OutputWriter, ProgressObserver};
use uav_route::{decode, RouteTable};
use uav_search::{PhaseTimings, SearchBuilder, SearchConfig};

fn cli() -> Command {
    Command::new("uav-patrol")
        .about("Plans patrol routes for a fleet of drones on a grid")
        .arg(arg!(<INSTANCE> "Grid instance file").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(<AGENTS> "Number of drones").value_parser(clap::value_parser!(usize)))
        .arg(arg!(<ITERATIONS> "Annealing iterations").value_parser(clap::value_parser!(usize)))
        .arg(arg!(<TICKS> "Planning horizon in ticks").value_parser(clap::value_parser!(usize)))
        .arg(arg!(--seed <SEED> "Fixed RNG seed").value_parser(clap::value_parser!(u64)))
        .arg(
            arg!(--config <FILE> "JSON search configuration; positional arguments override it")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--export <DIR> "Write routes, instance and progress CSV files to this directory")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--times "Print time spent replanning and evaluating"))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn print_routes(table: &RouteTable) {
    for agent in AgentId::range(table.agent_count()) {
        let cells: Vec<String> = table.route(agent).iter().map(ToString::to_string).collect();
        println!("Agent {}: {}", agent.0, cells.join(" "));
    }
}

fn main() -> Result<()> {
    enable_tracing();
    let matches = cli().get_matches();

    // Required positionals are enforced by clap.
    let instance   = matches.get_one::<PathBuf>("INSTANCE").cloned().unwrap_or_default();
    let agents     = matches.get_one::<usize>("AGENTS").copied().unwrap_or_default();
    let iterations = matches.get_one::<usize>("ITERATIONS").copied().unwrap_or_default();
    let horizon    = matches.get_one::<usize>("TICKS").copied().unwrap_or_default();
    let export_dir = matches.get_one::<PathBuf>("export").cloned();
    let show_times = matches.get_flag("times");

    let mut config = load_config(matches.get_one::<PathBuf>("config"))?;
    config.iterations = iterations;
    config.horizon = horizon;
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }

    let grid = load_grid_file(&instance)
        .with_context(|| format!("loading instance {}", instance.display()))?;
    tracing::info!(
        rows = grid.rows(),
        cols = grid.cols(),
        urgent = grid.urgent_positions().len(),
        bases = grid.bases().len(),
        "instance loaded"
    );

    let search = SearchBuilder::new(&grid, agents).config(config).build()?;

    // ── Run ───────────────────────────────────────────────────────────────
    let mut timings = PhaseTimings::default();
    let t0 = Instant::now();
    let (outcome, progress) = match &export_dir {
        Some(dir) => {
            let mut progress = ProgressObserver::new(CsvWriter::new(dir)?);
            let outcome = search.run(&mut (&mut timings, &mut progress))?;
            (outcome, Some(progress))
        }
        None => (search.run(&mut timings)?, None),
    };
    let elapsed = t0.elapsed();

    let table = decode(&grid, &outcome.best, horizon)?;
    let collisions = count_collisions(&table, &grid);

    // ── Report ────────────────────────────────────────────────────────────
    println!("Final score: {}", outcome.best_score);
    println!("Horizon: {horizon}  |  Agents: {agents}  |  Seed: {}", outcome.seed);
    println!("Elapsed: {:.3} s", elapsed.as_secs_f64());
    println!("Collisions: {collisions}");
    if show_times {
        println!(
            "Replan:   {:.3} s over {} calls",
            timings.replan.as_secs_f64(),
            timings.replan_calls
        );
        println!(
            "Evaluate: {:.3} s over {} calls",
            timings.evaluate.as_secs_f64(),
            timings.evaluate_calls
        );
    }
    println!();
    print_routes(&table);

    // ── Export ────────────────────────────────────────────────────────────
    if let (Some(mut progress), Some(dir)) = (progress, export_dir) {
        if let Some(e) = progress.take_error() {
            eprintln!("progress output error: {e}");
        }
        let mut writer = progress.into_writer();
        export_solution(&mut writer, &grid, &table)?;
        writer.finish()?;
        tracing::info!(dir = %dir.display(), "solution exported");
    }

    Ok(())
}
