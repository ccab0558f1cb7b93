//! Slot contents for the open addressing table.
//!
//! A slot is never-used, a tombstone, or occupied. Tombstones keep the entry they
//! used to hold so a dump of the table still shows what lived there, but the entry
//! is marked deleted and is invisible to search.

use std::fmt;

/// A key stored in the table along with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K> {
    key: K,
    frequency: u64,
    probe_count: usize,
    deleted: bool,
}

impl<K> Entry<K> {
    /// A fresh entry placed after `probe_count` probe attempts.
    pub(crate) fn new(key: K, probe_count: usize) -> Self {
        Self {
            key,
            frequency: 1,
            probe_count,
            deleted: false,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Number of inserts of this key while the entry was live.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Probe attempts used to place the entry, counting the successful one.
    pub fn probe_count(&self) -> usize {
        self.probe_count
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub(crate) fn increment_frequency(&mut self) {
        self.frequency += 1;
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }
}

impl<K: fmt::Display> fmt::Display for Entry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.frequency, self.probe_count)
    }
}

/// State of a single table slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    /// Never held an entry. Terminates a search.
    Empty,
    /// Held an entry that has since been deleted. Search probes past it and insert
    /// may reuse it.
    Tombstone(Entry<K>),
    /// Holds a live entry.
    Occupied(Entry<K>),
}

impl<K> Default for Slot<K> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K> Slot<K> {
    /// True for never-used and tombstoned slots.
    pub fn is_available(&self) -> bool {
        !matches!(self, Slot::Occupied(_))
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone(_))
    }

    /// The live entry, if any.
    pub fn entry(&self) -> Option<&Entry<K>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Turns an occupied slot into a tombstone. Other states are left as they are.
    pub(crate) fn bury(&mut self) -> bool {
        match std::mem::take(self) {
            Slot::Occupied(mut entry) => {
                entry.mark_deleted();
                *self = Slot::Tombstone(entry);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }
}
