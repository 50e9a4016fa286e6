//! eightpuzzle CLI - Sliding 8-puzzle search toolkit
//!
//! This CLI provides a unified interface for:
//! - Solving boards with BFS, DFS or A*
//! - Generating random (solvable) scrambles
//! - Comparing strategies side-by-side

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eightpuzzle")]
#[command(version, about = "Sliding 8-puzzle search toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board with one search strategy
    Solve(eightpuzzle::cli::commands::solve::SolveArgs),

    /// Generate random initial boards
    Scramble(eightpuzzle::cli::commands::scramble::ScrambleArgs),

    /// Compare all search strategies on one board
    Compare(eightpuzzle::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => eightpuzzle::cli::commands::solve::execute(args),
        Commands::Scramble(args) => eightpuzzle::cli::commands::scramble::execute(args),
        Commands::Compare(args) => eightpuzzle::cli::commands::compare::execute(args),
    }
}
