//! # Open Addressing Hash Table
//!
//! A fixed-capacity hash table that resolves collisions by probing other slots of a
//! single array. It exists to measure probing strategies, so instead of values it
//! records, per key, how often the key was inserted and how many probes its
//! placement took.
//!
//! ## Key Features
//! - **Pluggable probing**: the table owns a [`ProbeSequence`] passed in at
//!   construction ([`LinearProbing`](super::probe::LinearProbing),
//!   [`DoubleHashing`](super::probe::DoubleHashing), or your own).
//! - **No growth**: capacity is fixed. Once `size / capacity` reaches the load
//!   factor, `insert` returns `false` and leaves the table untouched.
//! - **Tombstones**: deletion marks the slot instead of clearing it, so keys that
//!   probed past it can still be found. Search stops only at never-used slots.
//! - **Read-only inspection**: counters and a slot snapshot for reporting; the slot
//!   array itself is never handed out mutably.
//!
//! The table is not thread-safe. Wrap it in a mutex if several threads need it.
//!
//! ```rust
//! use probe_experiment::cs::hashing::open_addressing::HashTable;
//! use probe_experiment::cs::hashing::probe::DoubleHashing;
//!
//! let mut table = HashTable::new(7, 0.5, DoubleHashing).unwrap();
//! assert!(table.insert(10));
//! assert!(table.insert(10));
//! assert_eq!(table.search(&10).unwrap().frequency(), 2);
//! assert_eq!(table.num_duplicates(), 1);
//! ```

use super::entry::{Entry, Slot};
use super::probe::ProbeSequence;
use super::raw_hash::RawHash;
use super::twin_prime::generate_twin_prime;
use crate::error::{Error, Result};

/// What an insert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New entry placed at `index` after `probes` attempts.
    Placed { index: usize, probes: usize },
    /// Key already live at `index`; its frequency is now `frequency`.
    Duplicate { index: usize, frequency: u64 },
    /// Refused because the table is at its load factor.
    AtLoadFactor,
    /// Every probe hit a live entry holding another key.
    Exhausted,
}

impl InsertOutcome {
    /// True when the key was recorded, as a new entry or as a duplicate.
    pub fn is_recorded(&self) -> bool {
        matches!(
            self,
            InsertOutcome::Placed { .. } | InsertOutcome::Duplicate { .. }
        )
    }
}

/// Snapshot of a table's counters.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub strategy: &'static str,
    pub capacity: usize,
    pub size: usize,
    pub num_duplicates: u64,
    pub num_probes: u64,
}

impl TableStats {
    /// Total recorded inserts, new keys plus duplicates.
    pub fn inserted(&self) -> u64 {
        self.size as u64 + self.num_duplicates
    }

    /// Mean probes per live entry, `0.0` when the table is empty.
    pub fn average_probes(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        self.num_probes as f64 / self.size as f64
    }
}

/// Fixed-capacity open addressing table.
#[derive(Debug, Clone)]
pub struct HashTable<K, P> {
    slots: Vec<Slot<K>>,
    load_factor: f64,
    probe: P,

    size: usize,
    num_duplicates: u64,
    num_probes: u64,
    num_tombstones: usize,
}

impl<K, P: ProbeSequence> HashTable<K, P> {
    /// Builds an empty table with `capacity` slots.
    ///
    /// `load_factor` must be finite and in `(0, 1]`, and `capacity` must be one the
    /// probe sequence accepts.
    pub fn new(capacity: usize, load_factor: f64, probe: P) -> Result<Self> {
        probe.check_capacity(capacity)?;
        if !load_factor.is_finite() || load_factor <= 0.0 || load_factor > 1.0 {
            return Err(Error::InvalidLoadFactor(load_factor));
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Default::default);

        Ok(Self {
            slots,
            load_factor,
            probe,
            size: 0,
            num_duplicates: 0,
            num_probes: 0,
            num_tombstones: 0,
        })
    }

    /// Builds a table sized by [`generate_twin_prime`] over `[min, max]`.
    pub fn with_twin_prime(min: usize, max: usize, load_factor: f64, probe: P) -> Result<Self> {
        let capacity = generate_twin_prime(min, max)?;
        Self::new(capacity, load_factor, probe)
    }
}

impl<K: RawHash + Eq, P: ProbeSequence> HashTable<K, P> {
    /// Records `key`. Returns `false` when the table is at its load factor or no
    /// probe found room.
    pub fn insert(&mut self, key: K) -> bool {
        self.try_insert(key).is_recorded()
    }

    /// Records `key` and reports what happened.
    ///
    /// Probing continues past tombstones until a never-used slot, so a key that is
    /// still live further along its sequence is bumped rather than stored twice. A
    /// new key goes into the first tombstone seen, or else the never-used slot.
    pub fn try_insert(&mut self, key: K) -> InsertOutcome {
        if self.is_at_load_factor() {
            log::debug!(
                "{}: insert refused at load factor {} ({} of {} slots)",
                self.probe.name(),
                self.load_factor,
                self.size,
                self.capacity()
            );
            return InsertOutcome::AtLoadFactor;
        }

        let capacity = self.capacity();
        let raw = key.raw_hash();
        // (index, probe) of the slot a new entry would take.
        let mut vacancy: Option<(usize, usize)> = None;

        for probe in 0..capacity {
            let index = self.probe.index(raw, probe, capacity);
            match &mut self.slots[index] {
                Slot::Occupied(entry) if *entry.key() == key => {
                    entry.increment_frequency();
                    self.num_duplicates += 1;
                    return InsertOutcome::Duplicate {
                        index,
                        frequency: entry.frequency(),
                    };
                }
                Slot::Occupied(_) => {}
                Slot::Tombstone(_) => {
                    vacancy.get_or_insert((index, probe));
                }
                Slot::Empty => {
                    vacancy.get_or_insert((index, probe));
                    break;
                }
            }
        }

        if let Some((index, probe)) = vacancy {
            let slot = &mut self.slots[index];
            if slot.is_tombstone() {
                self.num_tombstones -= 1;
            }
            let probes = probe + 1;
            *slot = Slot::Occupied(Entry::new(key, probes));
            self.size += 1;
            self.num_probes += probes as u64;
            return InsertOutcome::Placed { index, probes };
        }

        log::debug!(
            "{}: probe budget of {} exhausted",
            self.probe.name(),
            capacity
        );
        InsertOutcome::Exhausted
    }

    /// Finds the live entry for `key`.
    pub fn search(&self, key: &K) -> Option<&Entry<K>> {
        self.find_index(key).and_then(|index| self.slots[index].entry())
    }

    /// Tombstones the live entry for `key`. Returns `false` if there is none.
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(index) = self.find_index(key) else {
            return false;
        };
        if !self.slots[index].bury() {
            return false;
        }
        self.size -= 1;
        self.num_tombstones += 1;
        log::trace!("{}: tombstoned slot {}", self.probe.name(), index);
        true
    }

    /// Replays the insert probe sequence for `key`. Never-used slots end the
    /// search; tombstones are probed past, since the key may have been placed
    /// beyond one before it was deleted.
    fn find_index(&self, key: &K) -> Option<usize> {
        let capacity = self.capacity();
        let raw = key.raw_hash();

        for probe in 0..capacity {
            let index = self.probe.index(raw, probe, capacity);
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone(_) => {}
                Slot::Occupied(entry) => {
                    if entry.key() == key {
                        return Some(index);
                    }
                }
            }
        }
        None
    }
}

impl<K, P: ProbeSequence> HashTable<K, P> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Number of live entries.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts that found the key already live.
    pub fn num_duplicates(&self) -> u64 {
        self.num_duplicates
    }

    /// Sum of probe counts over every placed entry.
    pub fn num_probes(&self) -> u64 {
        self.num_probes
    }

    pub fn num_tombstones(&self) -> usize {
        self.num_tombstones
    }

    /// True once `size / capacity` has reached the load factor.
    pub fn is_at_load_factor(&self) -> bool {
        self.size as f64 / self.capacity() as f64 >= self.load_factor
    }

    pub fn probe_sequence(&self) -> &P {
        &self.probe
    }

    /// Every slot with its index, in table order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Slot<K>)> + '_ {
        self.slots.iter().enumerate()
    }

    /// Live entries with their slot index, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Entry<K>)> + '_ {
        self.slots()
            .filter_map(|(index, slot)| slot.entry().map(|entry| (index, entry)))
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            strategy: self.probe.name(),
            capacity: self.capacity(),
            size: self.size,
            num_duplicates: self.num_duplicates,
            num_probes: self.num_probes,
        }
    }
}
