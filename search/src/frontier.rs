//! Priority frontier with a closed set.
//!
//! The frontier stores arena indices, not nodes. The closed set is a
//! `BTreeSet` keyed by state identity bytes so its iteration order is
//! deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::node::{FrontierKey, SearchNode};

/// `BinaryHeap` is a max-heap, so entries hold `Reverse<FrontierKey>`.
/// `creation_order` is unique per node, so keys never tie.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: usize,
}

/// Open list plus closed set.
///
/// Unlike a visited-on-push set, states enter the closed set when they are
/// popped for expansion. The same state may sit on the frontier several
/// times via different paths; the cheapest pops first and the rest are
/// discarded at pop time.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    closed: BTreeSet<Vec<u8>>,
    high_water: usize,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: &SearchNode) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node)),
            node_id: node.node_id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the best entry: its key and arena index.
    pub fn pop(&mut self) -> Option<(FrontierKey, usize)> {
        self.heap.pop().map(|e| (e.key.0, e.node_id))
    }

    /// Mark a state as expanded. Returns `false` if it already was.
    pub fn close(&mut self, state_key: &[u8]) -> bool {
        if self.closed.contains(state_key) {
            return false;
        }
        self.closed.insert(state_key.to_vec())
    }

    #[must_use]
    pub fn is_closed(&self, state_key: &[u8]) -> bool {
        self.closed.contains(state_key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest frontier size seen so far.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }
}
