//! Sliding 8-puzzle state-space search engine
//!
//! This crate provides:
//! - A compact, hashable [`board::Board`] state type with move generation
//!   and an inversion-parity solvability check
//! - Three interchangeable search strategies (BFS, DFS, A* with the
//!   Manhattan heuristic) sharing one expansion loop
//! - A [`ports::SearchObserver`] side channel for progress display,
//!   metrics and JSONL exploration traces
//! - Seeded random scramble generation and a CLI front end

pub mod board;
pub mod cli;
pub mod error;
pub mod heuristic;
pub mod observers;
pub mod ports;
pub mod scramble;
pub mod search;

pub use board::{Board, GOAL};
pub use error::{Error, Result};
pub use heuristic::manhattan;
pub use ports::SearchObserver;
pub use search::{
    SearchConfig, SearchOutcome, SearchReport, SearchStats, Strategy, solve, solve_astar,
    solve_bfs, solve_dfs,
};
