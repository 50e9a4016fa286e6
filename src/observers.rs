//! Observer adapters for search monitoring
//!
//! Observers allow composable data collection during a search without
//! coupling the engine to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::Board,
    ports::SearchObserver,
    search::{SearchOutcome, SearchStats},
};

/// Observer that ignores every event.
///
/// The engine behaves identically with this observer and with none at all;
/// the convenience entry points (`solve_bfs` and friends) use it.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Fans every event out to a list of observers, in registration order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Box<dyn SearchObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer to the fan-out list.
    pub fn with_observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SearchObserver for CompositeObserver {
    fn on_search_start(&mut self, initial: &Board) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_search_start(initial)?;
        }
        Ok(())
    }

    fn on_expand(&mut self, state: &Board, depth: usize) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_expand(state, depth)?;
        }
        Ok(())
    }

    fn on_candidate(&mut self, state: &Board) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_candidate(state)?;
        }
        Ok(())
    }

    fn on_search_end(&mut self, outcome: &SearchOutcome, stats: &SearchStats) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_search_end(outcome, stats)?;
        }
        Ok(())
    }
}

/// Progress spinner observer - Shows live expansion progress
///
/// The total number of expansions is unknown up front, so this drives an
/// `indicatif` spinner rather than a bar, refreshing the message every
/// few hundred expansions.
pub struct ProgressObserver {
    spinner: Option<ProgressBar>,
    expanded: usize,
    depth: usize,
}

/// Refresh the spinner message every this many expansions.
const PROGRESS_REFRESH_INTERVAL: usize = 500;

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            spinner: None,
            expanded: 0,
            depth: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressObserver {
    fn on_search_start(&mut self, _initial: &Board) -> Result<()> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?,
        );
        pb.set_message("searching...");
        self.spinner = Some(pb);
        self.expanded = 0;
        self.depth = 0;
        Ok(())
    }

    fn on_expand(&mut self, _state: &Board, depth: usize) -> Result<()> {
        self.expanded += 1;
        self.depth = depth;
        if self.expanded % PROGRESS_REFRESH_INTERVAL == 0 {
            if let Some(pb) = &self.spinner {
                pb.set_message(format!(
                    "expanded {} states (current depth {})",
                    self.expanded, self.depth
                ));
                pb.tick();
            }
        }
        Ok(())
    }

    fn on_search_end(&mut self, outcome: &SearchOutcome, stats: &SearchStats) -> Result<()> {
        if let Some(pb) = &self.spinner {
            let verdict = match outcome {
                SearchOutcome::Solved { moves, .. } => format!("solved in {moves} moves"),
                SearchOutcome::Unsolved => "no solution".to_string(),
                SearchOutcome::Aborted => "aborted at expansion limit".to_string(),
            };
            pb.finish_with_message(format!("{verdict} ({} states expanded)", stats.expanded));
        }
        Ok(())
    }
}

/// Metrics observer - Counts events independently of the engine's stats
pub struct MetricsObserver {
    searches: usize,
    expanded: usize,
    candidates: usize,
    max_depth: usize,
    last_outcome: Option<SearchOutcome>,
}

/// Summary of observed search metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub searches: usize,
    pub expanded: usize,
    pub candidates: usize,
    pub max_depth: usize,
    pub solved: bool,
    pub moves: Option<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            searches: 0,
            expanded: 0,
            candidates: 0,
            max_depth: 0,
            last_outcome: None,
        }
    }

    /// Number of states dequeued and expanded, across observed searches.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of neighbors generated, across observed searches.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Deepest expansion observed.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Outcome of the most recent observed search.
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Get a metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            searches: self.searches,
            expanded: self.expanded,
            candidates: self.candidates,
            max_depth: self.max_depth,
            solved: self
                .last_outcome
                .as_ref()
                .is_some_and(SearchOutcome::is_solved),
            moves: self.last_outcome.as_ref().and_then(SearchOutcome::moves),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for MetricsObserver {
    fn on_search_start(&mut self, _initial: &Board) -> Result<()> {
        self.searches += 1;
        Ok(())
    }

    fn on_expand(&mut self, _state: &Board, depth: usize) -> Result<()> {
        self.expanded += 1;
        self.max_depth = self.max_depth.max(depth);
        Ok(())
    }

    fn on_candidate(&mut self, _state: &Board) -> Result<()> {
        self.candidates += 1;
        Ok(())
    }

    fn on_search_end(&mut self, outcome: &SearchOutcome, _stats: &SearchStats) -> Result<()> {
        self.last_outcome = Some(outcome.clone());
        Ok(())
    }
}

/// Record of a single expansion, one JSONL line per dequeued state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionRecord {
    /// 1-based expansion index
    pub step: usize,
    /// Moves from the initial board
    pub depth: usize,
    /// The expanded board, digit-encoded
    pub state: String,
}

/// JSONL observer - Exports the exploration order to JSON Lines format
///
/// Writes exactly one line per expansion, so the line count of the trace
/// file equals the engine's `expanded` counter.
pub struct JsonlObserver {
    writer: BufWriter<File>,
    step: usize,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            step: 0,
        })
    }
}

impl SearchObserver for JsonlObserver {
    fn on_expand(&mut self, state: &Board, depth: usize) -> Result<()> {
        self.step += 1;
        let record = ExpansionRecord {
            step: self.step,
            depth,
            state: state.encode(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_search_end(&mut self, _outcome: &SearchOutcome, _stats: &SearchStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
