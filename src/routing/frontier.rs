//! Frontier (open set) for A* search
//!
//! Discovered-but-unexpanded nodes ordered by estimated total cost
//! `f = g + h`. Ties are broken deterministically: lowest `h` first,
//! then discovery order, so equal-cost searches are reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::common::NodeId;

/// Heap entry for the frontier (min-heap by `f`, then `h`, then sequence)
#[derive(Debug)]
struct FrontierEntry {
    id: NodeId,
    g: f64,
    f: OrderedFloat<f64>,
    h: OrderedFloat<f64>,
    seq: u64,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.h == other.h && self.seq == other.seq
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open set over discovered nodes.
///
/// The caller records `g`, `h`, and the parent link in its side table
/// before pushing; the frontier only orders candidates.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier { heap: BinaryHeap::new(), seq: 0 }
    }

    /// Add a discovered node with its cost-so-far and heuristic estimate
    pub fn push(&mut self, id: NodeId, g: f64, h: f64) {
        let entry = FrontierEntry {
            id,
            g,
            f: OrderedFloat(g + h),
            h: OrderedFloat(h),
            seq: self.seq,
        };
        self.seq += 1;
        self.heap.push(entry);
    }

    /// Remove and return the node minimizing `f = g + h`, with its `g`.
    ///
    /// `None` means the frontier is exhausted: every reachable node has
    /// been expanded without meeting the goal.
    pub fn pop(&mut self) -> Option<(NodeId, f64)> {
        self.heap.pop().map(|entry| (entry.id, entry.g))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_lowest_f() {
        let mut frontier = Frontier::new();
        frontier.push(0, 3.0, 4.0); // f = 7
        frontier.push(1, 1.0, 1.0); // f = 2
        frontier.push(2, 2.0, 3.0); // f = 5

        assert_eq!(frontier.pop().map(|(id, _)| id), Some(1));
        assert_eq!(frontier.pop().map(|(id, _)| id), Some(2));
        assert_eq!(frontier.pop().map(|(id, _)| id), Some(0));
    }

    #[test]
    fn test_equal_f_breaks_tie_on_lower_h() {
        let mut frontier = Frontier::new();
        frontier.push(0, 1.0, 4.0); // f = 5, h = 4
        frontier.push(1, 3.0, 2.0); // f = 5, h = 2

        assert_eq!(frontier.pop().map(|(id, _)| id), Some(1));
        assert_eq!(frontier.pop().map(|(id, _)| id), Some(0));
    }

    #[test]
    fn test_equal_f_and_h_breaks_tie_on_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(5, 2.0, 3.0);
        frontier.push(9, 2.0, 3.0);
        frontier.push(1, 2.0, 3.0);

        assert_eq!(frontier.pop().map(|(id, _)| id), Some(5));
        assert_eq!(frontier.pop().map(|(id, _)| id), Some(9));
        assert_eq!(frontier.pop().map(|(id, _)| id), Some(1));
    }

    #[test]
    fn test_pop_preserves_g() {
        let mut frontier = Frontier::new();
        frontier.push(4, 1.25, 0.5);
        assert_eq!(frontier.pop(), Some((4, 1.25)));
    }

    #[test]
    fn test_exhausted_frontier_pops_none() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);

        frontier.push(0, 0.0, 1.0);
        assert_eq!(frontier.len(), 1);
        frontier.pop();
        assert_eq!(frontier.pop(), None);
    }
}
