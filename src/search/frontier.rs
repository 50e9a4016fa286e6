//! Frontier disciplines shared by all search strategies
//!
//! The three strategies differ only in how the frontier orders candidate
//! entries: FIFO (breadth-first), LIFO (depth-first) or ascending priority
//! (best-first). Each discipline implements [`Frontier`] so the engine can
//! run a single expansion loop over any of them.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

/// Index of a node in the engine's parent-pointer arena.
pub type NodeId = usize;

/// A frontier entry: an arena node plus its path cost and priority.
///
/// `f` is only meaningful under the best-first discipline; FIFO and LIFO
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub node: NodeId,
    pub g: u32,
    pub f: u32,
}

/// Ordering discipline for not-yet-expanded candidates.
pub trait Frontier {
    fn push(&mut self, entry: Entry);
    fn pop(&mut self) -> Option<Entry>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO queue: entries leave in insertion order (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Entry>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: Entry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// LIFO stack: the most recently inserted entry leaves first (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Entry>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: Entry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Heap key ordered by `(f, g, seq)`: ascending priority, then ascending
/// path cost, then insertion order so equal-priority entries leave FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapKey {
    f: u32,
    g: u32,
    seq: u64,
    node: NodeId,
}

/// Priority queue popping the minimum `(f, g, insertion-order)` entry
/// (best-first / A*).
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<HeapKey>>,
    seq: u64,
}

impl BestFirstFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for BestFirstFrontier {
    fn push(&mut self, entry: Entry) {
        self.heap.push(Reverse(HeapKey {
            f: entry.f,
            g: entry.g,
            seq: self.seq,
            node: entry.node,
        }));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(key)| Entry {
            node: key.node,
            g: key.g,
            f: key.f,
        })
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(node: NodeId, g: u32, f: u32) -> Entry {
        Entry { node, g, f }
    }

    #[test]
    fn test_fifo_pops_in_insertion_order() {
        let mut frontier = FifoFrontier::new();
        frontier.push(entry(0, 0, 0));
        frontier.push(entry(1, 1, 0));
        frontier.push(entry(2, 2, 0));
        assert_eq!(frontier.pop().unwrap().node, 0);
        assert_eq!(frontier.pop().unwrap().node, 1);
        assert_eq!(frontier.pop().unwrap().node, 2);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_lifo_pops_in_reverse_order() {
        let mut frontier = LifoFrontier::new();
        frontier.push(entry(0, 0, 0));
        frontier.push(entry(1, 1, 0));
        frontier.push(entry(2, 2, 0));
        assert_eq!(frontier.pop().unwrap().node, 2);
        assert_eq!(frontier.pop().unwrap().node, 1);
        assert_eq!(frontier.pop().unwrap().node, 0);
    }

    #[test]
    fn test_best_first_pops_minimum_priority() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(0, 0, 7));
        frontier.push(entry(1, 1, 3));
        frontier.push(entry(2, 2, 5));
        assert_eq!(frontier.pop().unwrap().node, 1);
        assert_eq!(frontier.pop().unwrap().node, 2);
        assert_eq!(frontier.pop().unwrap().node, 0);
    }

    #[test]
    fn test_best_first_ties_break_by_insertion_order() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(0, 2, 4));
        frontier.push(entry(1, 2, 4));
        frontier.push(entry(2, 2, 4));
        assert_eq!(frontier.pop().unwrap().node, 0);
        assert_eq!(frontier.pop().unwrap().node, 1);
        assert_eq!(frontier.pop().unwrap().node, 2);
    }

    #[test]
    fn test_best_first_prefers_lower_g_on_equal_f() {
        let mut frontier = BestFirstFrontier::new();
        frontier.push(entry(0, 3, 4));
        frontier.push(entry(1, 1, 4));
        assert_eq!(frontier.pop().unwrap().node, 1);
        assert_eq!(frontier.pop().unwrap().node, 0);
    }
}
