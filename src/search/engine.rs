//! The shared search loop and its strategy, outcome and stats types

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::Board,
    heuristic::manhattan,
    ports::SearchObserver,
    search::frontier::{BestFirstFrontier, Entry, FifoFrontier, Frontier, LifoFrontier, NodeId},
};

/// Which frontier discipline drives the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// FIFO frontier; first solution found has minimum move count.
    Bfs,
    /// LIFO frontier; no bound on the returned path length.
    Dfs,
    /// Priority frontier on `g + manhattan`; optimal because the heuristic
    /// is admissible and every edge costs 1.
    AStar,
}

impl Strategy {
    /// All strategies, in the order the CLI presents them.
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::AStar];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::AStar => "A*",
        };
        write!(f, "{name}")
    }
}

/// Terminal result of one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Goal reached. `path` holds the boards from the first move to the
    /// goal, exclusive of the start; `moves == path.len()`.
    Solved { path: Vec<Board>, moves: usize },
    /// Frontier exhausted without reaching the goal (unsolvable input).
    Unsolved,
    /// The configured expansion limit was hit before termination.
    Aborted,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    /// Move count of a solved search, if any.
    pub fn moves(&self) -> Option<usize> {
        match self {
            SearchOutcome::Solved { moves, .. } => Some(*moves),
            _ => None,
        }
    }
}

/// Bookkeeping counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States dequeued and expanded (goal test + neighbor generation).
    pub expanded: usize,
    /// Neighbor entries pushed onto the frontier.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Outcome and counters for one search call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Tunables for a search call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Abort with [`SearchOutcome::Aborted`] once this many states have
    /// been expanded. `None` runs to completion.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Configuration with an expansion limit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ExpansionLimitZero`] for a limit of 0, which
    /// would abort every search before its first expansion.
    pub fn with_limit(max_expansions: usize) -> Result<Self> {
        if max_expansions == 0 {
            return Err(crate::Error::ExpansionLimitZero);
        }
        Ok(Self {
            max_expansions: Some(max_expansions),
        })
    }
}

/// Arena node: a board plus the node it was expanded from. Paths are
/// reconstructed by walking parent pointers instead of copying the path
/// into every frontier entry.
struct Node {
    board: Board,
    parent: Option<NodeId>,
}

/// Run one strategy on `initial` to completion.
///
/// The observer is invoked synchronously; the search blocks until each
/// callback returns. Observer errors abort the search and propagate.
///
/// # Errors
///
/// Returns an invalid-state error (see [`crate::Error::is_invalid_state`])
/// before any expansion if `initial` is not a permutation of 0-8, or any
/// error an observer callback reports.
pub fn solve(
    initial: &Board,
    strategy: Strategy,
    config: SearchConfig,
    observer: &mut dyn SearchObserver,
) -> Result<SearchReport> {
    initial.validate()?;
    match strategy {
        Strategy::Bfs => run(initial, strategy, FifoFrontier::new(), config, observer),
        Strategy::Dfs => run(initial, strategy, LifoFrontier::new(), config, observer),
        Strategy::AStar => run(initial, strategy, BestFirstFrontier::new(), config, observer),
    }
}

/// Breadth-first search with default configuration and no observer.
pub fn solve_bfs(initial: &Board) -> Result<SearchReport> {
    solve(
        initial,
        Strategy::Bfs,
        SearchConfig::default(),
        &mut crate::observers::NoopObserver,
    )
}

/// Depth-first search with default configuration and no observer.
pub fn solve_dfs(initial: &Board) -> Result<SearchReport> {
    solve(
        initial,
        Strategy::Dfs,
        SearchConfig::default(),
        &mut crate::observers::NoopObserver,
    )
}

/// A* search with default configuration and no observer.
pub fn solve_astar(initial: &Board) -> Result<SearchReport> {
    solve(
        initial,
        Strategy::AStar,
        SearchConfig::default(),
        &mut crate::observers::NoopObserver,
    )
}

fn priority(strategy: Strategy, board: &Board, g: u32) -> u32 {
    match strategy {
        Strategy::AStar => g + manhattan(board),
        Strategy::Bfs | Strategy::Dfs => 0,
    }
}

fn run<F: Frontier>(
    initial: &Board,
    strategy: Strategy,
    mut frontier: F,
    config: SearchConfig,
    observer: &mut dyn SearchObserver,
) -> Result<SearchReport> {
    observer.on_search_start(initial)?;

    let mut nodes = vec![Node {
        board: *initial,
        parent: None,
    }];
    frontier.push(Entry {
        node: 0,
        g: 0,
        f: priority(strategy, initial, 0),
    });

    let mut explored: HashSet<Board> = HashSet::new();
    let mut stats = SearchStats {
        max_frontier: 1,
        ..SearchStats::default()
    };

    let outcome = loop {
        let Some(entry) = frontier.pop() else {
            break SearchOutcome::Unsolved;
        };
        let board = nodes[entry.node].board;

        // A state can sit in the frontier more than once (no dedupe at
        // enqueue time); expand it only on its first dequeue.
        if !explored.insert(board) {
            continue;
        }
        stats.expanded += 1;
        observer.on_expand(&board, entry.g as usize)?;

        if board.is_goal() {
            let path = reconstruct(&nodes, entry.node);
            let moves = path.len();
            break SearchOutcome::Solved { path, moves };
        }

        if let Some(limit) = config.max_expansions {
            if stats.expanded >= limit {
                break SearchOutcome::Aborted;
            }
        }

        for neighbor in board.neighbors() {
            if explored.contains(&neighbor) {
                continue;
            }
            nodes.push(Node {
                board: neighbor,
                parent: Some(entry.node),
            });
            frontier.push(Entry {
                node: nodes.len() - 1,
                g: entry.g + 1,
                f: priority(strategy, &neighbor, entry.g + 1),
            });
            stats.generated += 1;
            observer.on_candidate(&neighbor)?;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    };

    observer.on_search_end(&outcome, &stats)?;
    Ok(SearchReport {
        strategy,
        outcome,
        stats,
    })
}

/// Walk parent pointers from `id` back to the root, excluding the root
/// itself, and return the boards in forward order.
fn reconstruct(nodes: &[Node], mut id: NodeId) -> Vec<Board> {
    let mut path = Vec::new();
    while let Some(parent) = nodes[id].parent {
        path.push(nodes[id].board);
        id = parent;
    }
    path.reverse();
    path
}
