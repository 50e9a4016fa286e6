//! Solve command - Run one search strategy on a board

use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    board::Board,
    cli::{
        commands::parse_strategy,
        output::{format_number, print_kv, print_section},
    },
    observers::{CompositeObserver, JsonlObserver, ProgressObserver},
    search::{SearchConfig, SearchOutcome, solve},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a board with one search strategy")]
pub struct SolveArgs {
    /// Initial board: 9 digits ("125340678") or a comma-separated list
    pub state: String,

    /// Search strategy (bfs, dfs, astar)
    #[arg(long, short = 's', default_value = "astar")]
    pub strategy: String,

    /// Print every board along the solution path
    #[arg(long)]
    pub show_path: bool,

    /// Abort after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Write the search report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write the exploration order as JSONL (one line per expansion)
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Suppress the progress spinner
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::parse(&args.state)?;
    let strategy = parse_strategy(&args.strategy)?;

    print_section(&format!("{strategy} search"));
    println!("{board}");
    if !board.is_solvable() {
        println!("Warning: this arrangement cannot reach the goal (odd inversion parity).");
    }

    let config = match args.max_expansions {
        Some(limit) => SearchConfig::with_limit(limit)?,
        None => SearchConfig::default(),
    };

    let mut observer = CompositeObserver::new();
    if !args.quiet {
        observer = observer.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.trace {
        let jsonl = JsonlObserver::new(path)
            .with_context(|| format!("create trace file {}", path.display()))?;
        observer = observer.with_observer(Box::new(jsonl));
    }

    let started = Instant::now();
    let report = solve(&board, strategy, config, &mut observer)?;
    let elapsed = started.elapsed();

    match &report.outcome {
        SearchOutcome::Solved { path, moves } => {
            print_kv("Result", &format!("solved in {moves} moves"));
            if args.show_path {
                for (i, step) in path.iter().enumerate() {
                    println!("\nMove {}:\n{step}", i + 1);
                }
            }
        }
        SearchOutcome::Unsolved => print_kv("Result", "no solution (frontier exhausted)"),
        SearchOutcome::Aborted => print_kv("Result", "aborted at expansion limit"),
    }
    print_kv("Expanded", &format_number(report.stats.expanded));
    print_kv("Generated", &format_number(report.stats.generated));
    print_kv("Max frontier", &format_number(report.stats.max_frontier));
    print_kv("Elapsed", &format!("{elapsed:.2?}"));

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("create export file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)?;
        print_kv("Exported", &path.display().to_string());
    }

    Ok(())
}
