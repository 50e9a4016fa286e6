//! Observer port - abstraction for search observation and data collection
//!
//! This port defines the interface for observing search events, allowing
//! composable data collection (progress bars, metrics, traces) without
//! coupling the engine to any output format.

use crate::{
    Result,
    board::Board,
    search::{SearchOutcome, SearchStats},
};

/// Observer trait for monitoring a search
///
/// Observers are a capability the caller supplies; the engine behaves
/// identically with a no-op observer. Callbacks are invoked synchronously
/// from the search loop - the search blocks until each callback returns -
/// and must not be relied on to influence ordering, correctness or
/// termination. An observer returning an error aborts the search and the
/// error propagates to the caller.
///
/// # Event Sequence
///
/// 1. `on_search_start(initial)` - once, after input validation
/// 2. Per expansion:
///    - `on_expand(state, depth)` - the dequeued state
///    - `on_candidate(state)` - once per generated neighbor
/// 3. `on_search_end(outcome, stats)` - once, for every terminal outcome
///
/// A board that fails validation produces no events at all.
pub trait SearchObserver: Send {
    /// Called once before the first expansion.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_search_start(&mut self, _initial: &Board) -> Result<()> {
        Ok(())
    }

    /// Called for each state dequeued from the frontier, before its goal
    /// test. `depth` is the number of moves from the initial board.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to observe exploration order.
    fn on_expand(&mut self, _state: &Board, _depth: usize) -> Result<()> {
        Ok(())
    }

    /// Called once per neighbor pushed onto the frontier.
    ///
    /// This mirrors the per-neighbor display pacing of live visualization;
    /// observers that only care about exploration order can ignore it.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_candidate(&mut self, _state: &Board) -> Result<()> {
        Ok(())
    }

    /// Called once when the search terminates, whatever the outcome.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to finalize outputs or display summaries.
    fn on_search_end(&mut self, _outcome: &SearchOutcome, _stats: &SearchStats) -> Result<()> {
        Ok(())
    }
}
