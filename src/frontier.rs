//! Orderings over discovered-but-unexamined cells. The search loop is the same for every
//! algorithm; the [Frontier] it is given decides which cell is examined next.
use crate::cell::Cell;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

pub trait Frontier {
    /// Adds a cell. `key` is the estimated total cost and is ignored by the unordered policies.
    fn push(&mut self, cell: Cell, key: f64);
    fn pop(&mut self) -> Option<Cell>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Frontier + ?Sized> Frontier for Box<F> {
    fn push(&mut self, cell: Cell, key: f64) {
        (**self).push(cell, key)
    }
    fn pop(&mut self) -> Option<Cell> {
        (**self).pop()
    }
    fn len(&self) -> usize {
        (**self).len()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Cell>,
}

impl FifoFrontier {
    pub fn new() -> FifoFrontier {
        FifoFrontier::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, cell: Cell, _key: f64) {
        self.queue.push_back(cell);
    }
    fn pop(&mut self) -> Option<Cell> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Cell>,
}

impl LifoFrontier {
    pub fn new() -> LifoFrontier {
        LifoFrontier::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, cell: Cell, _key: f64) {
        self.stack.push(cell);
    }
    fn pop(&mut self) -> Option<Cell> {
        self.stack.pop()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[derive(Clone, Debug)]
struct SmallestKeyHolder {
    estimated_cost: f64,
    sequence: u64,
    cell: Cell,
}

impl Eq for SmallestKeyHolder {}

impl PartialEq for SmallestKeyHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestKeyHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestKeyHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reversed on the key, then on insertion order so that
        // equal keys come out first-in first-out
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority queue on the estimated total cost with stable tie-breaking. Drives A*.
///
/// Decrease-key is not supported: a cell pushed again with a smaller key stays in the queue
/// under its old key as well, and the search skips it when it comes out a second time.
#[derive(Clone, Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<SmallestKeyHolder>,
    next_sequence: u64,
}

impl PriorityFrontier {
    pub fn new() -> PriorityFrontier {
        PriorityFrontier::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, cell: Cell, key: f64) {
        self.heap.push(SmallestKeyHolder {
            estimated_cost: key,
            sequence: self.next_sequence,
            cell,
        });
        self.next_sequence += 1;
    }
    fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|h| h.cell)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier>(mut frontier: F) -> Vec<Cell> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    fn cells(n: i32) -> Vec<Cell> {
        (0..n).map(|i| Cell::new(i, 0)).collect()
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut frontier = FifoFrontier::new();
        for (i, c) in cells(4).into_iter().enumerate() {
            frontier.push(c, -(i as f64));
        }
        assert_eq!(frontier.len(), 4);
        assert_eq!(drain(frontier), cells(4));
    }

    #[test]
    fn lifo_reverses_insertion_order() {
        let mut frontier = LifoFrontier::new();
        for c in cells(4) {
            frontier.push(c, 0.0);
        }
        let mut expected = cells(4);
        expected.reverse();
        assert_eq!(drain(frontier), expected);
    }

    #[test]
    fn priority_pops_smallest_key() {
        let mut frontier = PriorityFrontier::new();
        let c = cells(4);
        frontier.push(c[0], 3.0);
        frontier.push(c[1], 1.5);
        frontier.push(c[2], 7.0);
        frontier.push(c[3], 0.0);
        assert_eq!(frontier.len(), 4);
        assert_eq!(drain(frontier), vec![c[3], c[1], c[0], c[2]]);
    }

    #[test]
    fn priority_ties_are_stable() {
        let mut frontier = PriorityFrontier::new();
        let c = cells(5);
        frontier.push(c[0], 2.0);
        frontier.push(c[1], 1.0);
        frontier.push(c[2], 2.0);
        frontier.push(c[3], 1.0);
        frontier.push(c[4], 2.0);
        assert_eq!(drain(frontier), vec![c[1], c[3], c[0], c[2], c[4]]);
    }

    #[test]
    fn priority_tolerates_duplicates() {
        let mut frontier = PriorityFrontier::new();
        let c = Cell::new(1, 1);
        frontier.push(c, 5.0);
        frontier.push(c, 3.0);
        assert_eq!(frontier.len(), 2);
        assert_eq!(drain(frontier), vec![c, c]);
    }

    #[test]
    fn empty_frontiers() {
        assert!(FifoFrontier::new().is_empty());
        assert!(LifoFrontier::new().is_empty());
        let mut frontier = PriorityFrontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
