//! Scramble command - Generate random initial boards

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::scramble::{random_permutation, random_solvable};

#[derive(Parser, Debug)]
#[command(about = "Generate random initial boards")]
pub struct ScrambleArgs {
    /// Number of boards to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the solvability filter (about half the output will be
    /// unreachable from the goal)
    #[arg(long)]
    pub allow_unsolvable: bool,
}

pub fn execute(args: ScrambleArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for _ in 0..args.count {
        let board = if args.allow_unsolvable {
            random_permutation(&mut rng)
        } else {
            random_solvable(&mut rng)
        };
        println!("{}", board.encode());
        println!("{board}");
        if args.allow_unsolvable && !board.is_solvable() {
            println!("(unsolvable)\n");
        }
    }

    Ok(())
}
