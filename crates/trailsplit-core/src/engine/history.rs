//! Bounded undo history over marker configurations.

use serde::{Deserialize, Serialize};

use crate::marker::SplitMarker;

/// Maximum retained snapshots; the oldest is evicted beyond this.
const CAPACITY: usize = 20;

/// Snapshot stack of marker lists, newest last.
///
/// Snapshots are taken by value before each tracked mutation, so popping
/// one restores the exact pre-mutation layout including marker kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<Vec<SplitMarker>>,
}

impl HistoryStack {
    pub fn push(&mut self, snapshot: Vec<SplitMarker>) {
        if self.entries.len() == CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Vec<SplitMarker>> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::MarkerKind;

    fn snapshot_of(indices: &[usize]) -> Vec<SplitMarker> {
        indices
            .iter()
            .map(|&i| SplitMarker::new(i, MarkerKind::Split))
            .collect()
    }

    #[test]
    fn pop_returns_newest_first() {
        let mut stack = HistoryStack::default();
        stack.push(snapshot_of(&[1]));
        stack.push(snapshot_of(&[1, 2]));
        assert_eq!(stack.pop(), Some(snapshot_of(&[1, 2])));
        assert_eq!(stack.pop(), Some(snapshot_of(&[1])));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut stack = HistoryStack::default();
        for i in 0..25 {
            stack.push(snapshot_of(&[i]));
        }
        assert_eq!(stack.len(), 20);
        // The five oldest snapshots (indices 0..4) are gone.
        assert_eq!(stack.pop(), Some(snapshot_of(&[24])));
        let mut last = None;
        while let Some(entry) = stack.pop() {
            last = Some(entry);
        }
        assert_eq!(last, Some(snapshot_of(&[5])));
    }
}
