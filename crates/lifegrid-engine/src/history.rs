//! Bounded undo history of live-set snapshots.
//!
//! [`HistoryStack`] evicts from the oldest end when full and pops from
//! the newest end, so it behaves as a fixed-capacity LIFO over the most
//! recent `capacity` pushes.

use std::collections::VecDeque;

use lifegrid_core::Snapshot;

/// Fixed-capacity undo stack.
///
/// The session pushes exactly one entry before every tick (manual or
/// automatic), never per mutation, so popping restores the state
/// immediately before the most recent tick.
#[derive(Clone, Debug)]
pub struct HistoryStack {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl HistoryStack {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    /// [`SessionConfig::validate`](crate::SessionConfig::validate) rejects
    /// such configurations before a history is built.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "HistoryStack capacity must be >= 1");
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Push a snapshot, evicting and returning the oldest entry if the
    /// history is full.
    pub fn push(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(snapshot);
        evicted
    }

    /// Remove and return the most recent snapshot, or `None` if empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    /// The most recent snapshot without removing it.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::Cell;

    fn snap(tag: i64) -> Snapshot {
        [Cell::new(tag, 0)].into_iter().collect()
    }

    #[test]
    fn new_is_empty() {
        let h = HistoryStack::new(4);
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.capacity(), 4);
        assert!(h.latest().is_none());
    }

    #[test]
    #[should_panic(expected = "capacity must be >= 1")]
    fn zero_capacity_panics() {
        let _ = HistoryStack::new(0);
    }

    #[test]
    fn pop_is_lifo() {
        let mut h = HistoryStack::new(4);
        for i in 1..=3 {
            h.push(snap(i));
        }
        assert_eq!(h.pop(), Some(snap(3)));
        assert_eq!(h.pop(), Some(snap(2)));
        assert_eq!(h.pop(), Some(snap(1)));
        assert_eq!(h.pop(), None);
    }

    #[test]
    fn push_past_capacity_evicts_oldest() {
        let mut h = HistoryStack::new(4);
        for i in 1..=4 {
            assert!(h.push(snap(i)).is_none());
        }
        assert_eq!(h.push(snap(5)), Some(snap(1)));
        assert_eq!(h.len(), 4);

        let drained: Vec<_> = std::iter::from_fn(|| h.pop()).collect();
        assert_eq!(drained, vec![snap(5), snap(4), snap(3), snap(2)]);
    }

    #[test]
    fn capacity_one_keeps_only_latest() {
        let mut h = HistoryStack::new(1);
        h.push(snap(1));
        assert_eq!(h.push(snap(2)), Some(snap(1)));
        assert_eq!(h.latest(), Some(&snap(2)));
    }
}
