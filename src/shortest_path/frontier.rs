//! The open set of a single-source search.
//!
//! A binary min-heap of candidate paths with a node → slot index, so the
//! search can ask "is there already a candidate for this node, and what does
//! it cost?" and replace it in place. There is at most one candidate per node.
//! Ties on cost go to the candidate that was pushed or replaced first.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::{Cost, NodeId};
use crate::path::Path;

struct Candidate {
    path: Arc<Path>,
    seq: u64,
}

impl Candidate {
    fn key(&self) -> (Cost, u64) {
        (self.path.cost(), self.seq)
    }
}

pub(crate) struct Frontier {
    heap: Vec<Candidate>,
    slots: HashMap<NodeId, usize>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Cost of the live candidate for `node`, if there is one.
    pub(crate) fn candidate_cost(&self, node: NodeId) -> Option<Cost> {
        self.slots.get(&node).map(|&i| self.heap[i].path.cost())
    }

    /// Inserts `path`, or replaces the existing candidate for its node.
    ///
    /// Replacement does not check that the new path is cheaper; the caller
    /// decides that.
    pub(crate) fn upsert(&mut self, path: Arc<Path>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let node = path.node();
        let candidate = Candidate { path, seq };

        match self.slots.get(&node).copied() {
            Some(idx) => {
                self.heap[idx] = candidate;
                self.sift_up(idx);
                let idx = self.slots.get(&node).copied().unwrap_or(idx);
                self.sift_down(idx);
            }
            None => {
                let idx = self.heap.len();
                self.heap.push(candidate);
                self.slots.insert(node, idx);
                self.sift_up(idx);
            }
        }
    }

    /// Removes and returns the cheapest candidate.
    pub(crate) fn pop_min(&mut self) -> Option<Arc<Path>> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let candidate = self.heap.pop()?;
        self.slots.remove(&candidate.path.node());
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(candidate.path)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(idx, parent) {
                self.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, idx) {
                self.swap(idx, smaller);
                idx = smaller;
            } else {
                break;
            }
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].key() < self.heap[b].key()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].path.node(), a);
        self.slots.insert(self.heap[b].path.node(), b);
    }
}
