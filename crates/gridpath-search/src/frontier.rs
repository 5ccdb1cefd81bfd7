use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued cell, ordered by `(priority, seq)`.
///
/// `seq` is only a tie-breaker: among equal priorities the entry pushed
/// first pops first.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub priority: f64,
    pub seq: u64,
    /// Arena index of the queued cell.
    pub idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-heap of [`Entry`] values with lazy deletion.
///
/// There is no decrease-key. When a cell's cost improves it is simply pushed
/// again; the outdated entry stays in the heap and the caller must discard it
/// on pop by comparing its priority with the cell's current best. The heap
/// can therefore hold more entries than there are cells.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `idx` with `priority`, returning the sequence number assigned.
    pub fn push(&mut self, priority: f64, idx: usize) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, idx });
        seq
    }

    /// Remove the entry with the smallest `(priority, seq)`.
    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    /// Entries currently queued, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes so far.
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut f = Frontier::new();
        f.push(3.0, 30);
        f.push(1.0, 10);
        f.push(2.0, 20);
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![10, 20, 30]);
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for idx in [7, 3, 9, 1] {
            f.push(4.0, idx);
        }
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let mut f = Frontier::new();
        assert_eq!(f.push(1.0, 0), 0);
        assert_eq!(f.push(0.5, 1), 1);
        assert_eq!(f.pushed(), 2);
        assert_eq!(f.pop().map(|e| (e.idx, e.seq)), Some((1, 1)));
    }

    #[test]
    fn stale_entries_stay_until_popped() {
        let mut f = Frontier::new();
        f.push(5.0, 2);
        // Cost of cell 2 improved: push again instead of decreasing the key.
        f.push(3.0, 2);
        assert_eq!(f.len(), 2);
        let best = f.pop().unwrap();
        assert_eq!(best.priority, 3.0);
        let stale = f.pop().unwrap();
        assert_eq!((stale.idx, stale.priority), (2, 5.0));
        assert!(f.is_empty());
    }

    #[test]
    fn fractional_priorities_order_correctly() {
        let mut f = Frontier::new();
        f.push(2.0f64.sqrt() + 1.0, 0);
        f.push(2.4, 1);
        f.push(2.0, 2);
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
