//! waygrid: watch uninformed search algorithms route across a grid while
//! obstacles keep appearing.
//!
//! Usage:
//!   cargo run -- --algo bfs
//!   cargo run -- --algo all --dynamic 0.05 --seed 7
//!   cargo run -- --headless --layout demos/maze.txt

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use waygrid_core::Layout;
use waygrid_crossterm::TerminalSink;
use waygrid_gen::GridGen;
use waygrid_search::{
    Algorithm, CancelToken, LogSink, Paced, ProgressSink, SearchConfig, SearchEngine,
    SearchOutcome, SearchStatus,
};

/// Route search on a grid with spawning obstacles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm to run: bfs, dfs, ucs, dls, iddfs, bidir, or "all"
    #[arg(short, long, default_value = "all")]
    algo: String,

    /// Grid rows
    #[arg(long, default_value_t = 15)]
    rows: i32,

    /// Grid columns
    #[arg(long, default_value_t = 15)]
    cols: i32,

    /// Fraction of cells turned into walls before the search
    #[arg(short, long, default_value_t = 0.20)]
    walls: f64,

    /// Per-step probability of spawning a dynamic wall
    #[arg(short, long, default_value_t = 0.03)]
    dynamic: f64,

    /// Depth limit for DLS
    #[arg(short, long, default_value_t = 8)]
    limit: usize,

    /// Pause after each snapshot, in milliseconds
    #[arg(long, default_value_t = 60)]
    delay_ms: u64,

    /// Steps between snapshots
    #[arg(long, default_value_t = 2)]
    report_every: usize,

    /// RNG seed for grid generation and dynamic walls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log progress instead of drawing to the terminal
    #[arg(long)]
    headless: bool,

    /// Read the grid from an ASCII picture (`.` `#` `S` `T`) instead of
    /// generating one
    #[arg(long)]
    layout: Option<PathBuf>,
}

impl Args {
    fn algorithms(&self) -> Result<Vec<Algorithm>, Box<dyn Error>> {
        if self.algo.eq_ignore_ascii_case("all") {
            return Ok(Algorithm::ALL.to_vec());
        }
        Ok(vec![self.algo.parse()?])
    }

    fn config(&self, seed: u64) -> SearchConfig {
        SearchConfig::default()
            .with_size(self.rows, self.cols)
            .with_wall_ratio(self.walls)
            .with_obstacle_probability(self.dynamic)
            .with_depth_limit(self.limit)
            .with_step_delay(Duration::from_millis(self.delay_ms))
            .with_report_every(self.report_every)
            .with_seed(seed)
    }
}

fn load_layout(args: &Args, config: &SearchConfig, seed: u64) -> Result<Layout, Box<dyn Error>> {
    if let Some(path) = &args.layout {
        let text = fs::read_to_string(path)?;
        let layout: Layout = text.parse()?;
        log::info!("loaded {} grid from {}", layout.grid.bounds(), path.display());
        return Ok(layout);
    }
    let layout = GridGen::new(StdRng::seed_from_u64(seed))
        .with_size(config.rows, config.cols)
        .with_wall_ratio(config.wall_ratio)
        .generate()?;
    Ok(layout)
}

/// Run each algorithm in turn on the same layout, stopping early once the
/// user cancels.
fn run_all<S: ProgressSink>(
    engine: &mut SearchEngine<S>,
    algorithms: &[Algorithm],
    layout: &Layout,
) -> Result<Vec<SearchOutcome>, Box<dyn Error>> {
    let mut outcomes = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let outcome = engine.run(algorithm, &layout.grid, layout.start, layout.target)?;
        let cancelled = outcome.status == SearchStatus::Cancelled;
        outcomes.push(outcome);
        if cancelled {
            break;
        }
    }
    Ok(outcomes)
}

fn print_summary(outcomes: &[SearchOutcome]) {
    println!("{:<14} {:<10} stats", "algorithm", "result");
    for o in outcomes {
        println!("{:<14} {:<10} {}", o.algorithm.name(), o.status.to_string(), o.stats);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Keep the log quiet while the terminal display owns the screen.
    let default_filter = if args.headless { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let algorithms = args.algorithms()?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let config = args.config(seed);
    config.validate()?;
    let layout = load_layout(&args, &config, seed)?;
    log::info!(
        "seed {seed}, start {}, target {}, algorithms {:?}",
        layout.start,
        layout.target,
        algorithms
    );

    let outcomes = if args.headless {
        let mut engine = SearchEngine::new(config, LogSink)?;
        let outcomes = run_all(&mut engine, &algorithms, &layout)?;
        for o in &outcomes {
            println!("{}\n{}\n", o.algorithm, o.grid);
        }
        outcomes
    } else {
        let token = CancelToken::new();
        let mut terminal = TerminalSink::new().with_cancel(token.clone());
        terminal.init()?;
        let delay = config.step_delay;
        let mut engine =
            SearchEngine::new(config, Paced::new(terminal, delay))?.with_cancel_token(token);
        let outcomes = run_all(&mut engine, &algorithms, &layout);
        let mut terminal = engine.into_sink().into_inner();
        if let Some(last) = outcomes.as_ref().ok().and_then(|o| o.last()) {
            let status = format!("{}: {} | press any key", last.algorithm, last.status);
            terminal.draw(&last.grid, &status)?;
            terminal.wait_key()?;
        }
        terminal.close();
        outcomes?
    };

    print_summary(&outcomes);
    Ok(())
}
