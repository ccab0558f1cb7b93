//! Side-by-side comparison of linear probing and double hashing.
//!
//! An [`Experiment`] feeds the same keys into two tables of equal capacity and load
//! factor, one per strategy, until either table refuses a key or the key source
//! runs dry. The tables themselves never print; reporting lives in [`report`].

pub mod report;
pub mod source;

pub use report::{describe_insert, dump_table, dump_to_file, Summary};
pub use source::{DataSource, RandomIntegers, Timestamp, Timestamps, WordList};

use crate::cs::hashing::{
    generate_twin_prime, DoubleHashing, HashTable, InsertOutcome, LinearProbing, ProbeSequence,
    RawHash,
};
use crate::error::Result;

/// Range the experiment searches for its twin prime capacity.
pub const DEFAULT_CAPACITY_RANGE: (usize, usize) = (95500, 96000);

/// A linear probing table and a double hashing table fed in lockstep.
#[derive(Debug, Clone)]
pub struct Experiment<K> {
    linear: HashTable<K, LinearProbing>,
    double: HashTable<K, DoubleHashing>,
}

impl<K: RawHash + Eq + Clone> Experiment<K> {
    pub fn new(capacity: usize, load_factor: f64) -> Result<Self> {
        Ok(Self {
            linear: HashTable::new(capacity, load_factor, LinearProbing)?,
            double: HashTable::new(capacity, load_factor, DoubleHashing)?,
        })
    }

    /// Sizes both tables with the twin prime found in `[min, max]`.
    pub fn with_twin_prime(min: usize, max: usize, load_factor: f64) -> Result<Self> {
        Self::new(generate_twin_prime(min, max)?, load_factor)
    }

    /// Inserts keys into both tables until one refuses. Returns the number of keys
    /// taken from the source, including the refused one.
    pub fn run<I: IntoIterator<Item = K>>(&mut self, keys: I) -> usize {
        self.run_with(keys, |_, _, _| {})
    }

    /// [`run`](Self::run), handing every insert outcome to `observe`.
    pub fn run_with<I, F>(&mut self, keys: I, mut observe: F) -> usize
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&'static str, &K, InsertOutcome),
    {
        let mut consumed = 0;
        for key in keys {
            consumed += 1;

            let linear = self.linear.try_insert(key.clone());
            observe(self.linear.probe_sequence().name(), &key, linear);
            let double = self.double.try_insert(key.clone());
            observe(self.double.probe_sequence().name(), &key, double);

            if !linear.is_recorded() || !double.is_recorded() {
                log::debug!("table full after {} keys", consumed);
                return consumed;
            }
        }
        log::info!("key source exhausted after {} keys", consumed);
        consumed
    }
}

impl<K> Experiment<K> {
    pub fn linear(&self) -> &HashTable<K, LinearProbing> {
        &self.linear
    }

    pub fn double(&self) -> &HashTable<K, DoubleHashing> {
        &self.double
    }

    pub fn summary(&self, source: DataSource) -> Summary {
        Summary {
            capacity: self.linear.capacity(),
            source,
            load_factor: self.linear.load_factor(),
            tables: vec![self.linear.stats(), self.double.stats()],
        }
    }
}
