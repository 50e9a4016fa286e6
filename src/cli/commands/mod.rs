//! CLI command implementations

pub mod compare;
pub mod scramble;
pub mod solve;

use anyhow::Result;

use crate::search::Strategy;

/// Parse a strategy name as accepted on the command line.
pub fn parse_strategy(value: &str) -> Result<Strategy> {
    match value.to_lowercase().as_str() {
        "bfs" | "breadth-first" => Ok(Strategy::Bfs),
        "dfs" | "depth-first" => Ok(Strategy::Dfs),
        "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
        other => Err(anyhow::anyhow!(
            "Unknown strategy: '{other}'. Supported: bfs, dfs, astar"
        )),
    }
}
