// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change to search state is recorded as an `(id, old_value)` entry.
//! Rewinding to a checkpoint pops entries in reverse order and hands each
//! one back to the owner of the state, which restores the old value.
//!
//! Checkpoints are plain trail lengths, so nested checkpoints compose
//! without any bookkeeping beyond the entry vector itself.

pub mod trailed;

pub use trailed::{TrailRestore, TrailedFlags};

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Identifier of the value that changed (for flags: the cell index)
    id: usize,
    /// The value before the change
    old_value: u64,
}

/// Undo log for O(1) backtracking.
///
/// # Memory Model
///
/// The trail owns no search state. Each context owns its own trail and the
/// state it protects, so independent searches never share a trail.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// The current position, usable as a checkpoint for [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change (old value of `id`).
    pub(crate) fn record_change(&mut self, id: usize, old_value: u64) {
        self.entries.push(TrailEntry { id, old_value });
    }

    /// Undo every change recorded after `checkpoint`, most recent first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length is a no-op.
    pub fn rewind_to<R: TrailRestore + ?Sized>(&mut self, checkpoint: usize, target: &mut R) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                target.restore(entry.id, entry.old_value);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Restores into a plain vector so the trail can be tested in isolation.
    struct Recorder(Vec<u64>);

    impl TrailRestore for Recorder {
        fn restore(&mut self, id: usize, old_value: u64) {
            self.0[id] = old_value;
        }
    }

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.checkpoint(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut values = Recorder(vec![1, 2, 3, 4]);
        let mut trail = Trail::new();

        trail.record_change(0, 1);
        values.0[0] = 10;
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 1);

        trail.record_change(2, 3);
        values.0[2] = 30;
        trail.record_change(3, 4);
        values.0[3] = 40;
        assert_eq!(trail.len(), 3);

        trail.rewind_to(checkpoint, &mut values);
        assert_eq!(trail.len(), 1);
        assert_eq!(values.0, vec![10, 2, 3, 4]);
    }

    #[test]
    fn test_rewind_restores_in_reverse_order() {
        let mut values = Recorder(vec![0]);
        let mut trail = Trail::new();

        // The same id changes twice; the oldest value must win.
        trail.record_change(0, 0);
        values.0[0] = 5;
        trail.record_change(0, 5);
        values.0[0] = 9;

        trail.rewind_to(0, &mut values);
        assert_eq!(values.0[0], 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut values = Recorder(vec![0; 3]);
        let mut trail = Trail::new();

        let outer = trail.checkpoint();
        trail.record_change(0, 0);
        values.0[0] = 1;

        let inner = trail.checkpoint();
        trail.record_change(1, 0);
        values.0[1] = 1;

        trail.rewind_to(inner, &mut values);
        assert_eq!(values.0, vec![1, 0, 0]);

        trail.rewind_to(outer, &mut values);
        assert_eq!(values.0, vec![0, 0, 0]);
    }

    #[test]
    fn test_rewind_past_end_is_noop() {
        let mut values = Recorder(vec![7]);
        let mut trail = Trail::new();
        trail.record_change(0, 3);

        trail.rewind_to(5, &mut values);
        assert_eq!(trail.len(), 1);
        assert_eq!(values.0[0], 7);
    }
}
