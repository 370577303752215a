//! Fixed-capacity position history.
//!
//! A ring buffer that keeps the most recent samples handed to the detector.
//! Storage is allocated once at construction and never grows; once full, each
//! push overwrites the oldest slot.
//!
//! ```text
//!  capacity = 4, after 6 pushes (p0..p5):
//!
//!  slots: [ p4 | p5 | p2 | p3 ]
//!                 ^
//!                 next (oldest = p2)
//! ```

use std::num::NonZeroUsize;

use crate::geo::GeoPoint;

/// One slot in the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEntry {
    /// An accepted position fix.
    Fix(GeoPoint),
    /// A tick without a usable fix (no data yet, or rejected for accuracy).
    Absent,
}

impl HistoryEntry {
    /// The fix carried by this entry, if any.
    pub fn point(&self) -> Option<&GeoPoint> {
        match self {
            HistoryEntry::Fix(point) => Some(point),
            HistoryEntry::Absent => None,
        }
    }
}

impl From<Option<GeoPoint>> for HistoryEntry {
    fn from(point: Option<GeoPoint>) -> Self {
        point.map_or(HistoryEntry::Absent, HistoryEntry::Fix)
    }
}

/// Ring buffer of the most recent [`HistoryEntry`] values.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    /// Slot storage; grows only until `capacity` is reached.
    slots: Vec<HistoryEntry>,
    /// Maximum number of entries.
    capacity: NonZeroUsize,
    /// Slot the next push writes to once the buffer is full.
    next: usize,
}

impl PositionHistory {
    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.get()),
            capacity,
            next: 0,
        }
    }

    /// Append an entry, overwriting the oldest one when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        if !self.is_full() {
            self.slots.push(entry);
            return None;
        }

        let evicted = std::mem::replace(&mut self.slots[self.next], entry);
        self.next = (self.next + 1) % self.capacity.get();
        Some(evicted)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no entries have been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the next push will evict an entry.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity.get()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        let (newer, older) = self.slots.split_at(self.next);
        older.iter().chain(newer.iter())
    }

    /// Iterate over the position fixes only, oldest first.
    pub fn fixes(&self) -> impl Iterator<Item = &GeoPoint> + '_ {
        self.iter().filter_map(HistoryEntry::point)
    }

    /// Remove all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.next = 0;
    }
}
