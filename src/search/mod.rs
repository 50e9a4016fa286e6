//! State-space search over puzzle boards
//!
//! One expansion loop parameterized over a frontier discipline covers all
//! three strategies; see [`frontier`] for the disciplines and [`engine`]
//! for the loop.

pub mod engine;
pub mod frontier;

pub use engine::{
    SearchConfig, SearchOutcome, SearchReport, SearchStats, Strategy, solve, solve_astar,
    solve_bfs, solve_dfs,
};
pub use frontier::{BestFirstFrontier, Entry, FifoFrontier, Frontier, LifoFrontier, NodeId};
