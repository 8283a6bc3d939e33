// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed values that automatically record changes for backtracking.

use super::Trail;

/// State that can be restored from trail entries.
///
/// The trail calls `restore` once per entry while rewinding, newest first.
pub trait TrailRestore {
    /// Restore the value identified by `id` from a u64 stored in the trail.
    fn restore(&mut self, id: usize, old_value: u64);
}

/// A fixed-size vector of flags whose writes are recorded on a trail.
///
/// The flag index doubles as the trail id, so one `TrailedFlags` should be
/// the only state restored from a given trail.
///
/// # Example
///
/// ```
/// use snaking_katas::trail::{Trail, TrailedFlags};
///
/// let mut trail = Trail::new();
/// let mut flags = TrailedFlags::new(4);
///
/// let checkpoint = trail.checkpoint();
/// flags.set(&mut trail, 2, true);
/// assert!(flags.get(2));
///
/// trail.rewind_to(checkpoint, &mut flags);
/// assert!(!flags.get(2)); // Value restored
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailedFlags {
    flags: Vec<bool>,
}

impl TrailedFlags {
    /// Create `len` flags, all cleared.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Get the flag at `index`. Out-of-range indices read as cleared.
    pub fn get(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Set the flag, recording the old value in the trail.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, trail: &mut Trail, index: usize, value: bool) {
        let old_value = self.flags[index] as u64;
        trail.record_change(index, old_value);
        self.flags[index] = value;
    }

    /// Set the flag only if it differs from the current value.
    ///
    /// Returns true if the value was changed, false if it was already correct.
    pub fn maybe_set(&mut self, trail: &mut Trail, index: usize, value: bool) -> bool {
        if self.flags[index] != value {
            self.set(trail, index, value);
            true
        } else {
            false
        }
    }

    /// Number of set flags.
    pub fn count_set(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True if there are no flags at all.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl TrailRestore for TrailedFlags {
    fn restore(&mut self, id: usize, old_value: u64) {
        self.flags[id] = old_value != 0;
    }
}
