//! # Probe Sequences
//!
//! A probe sequence maps `(raw hash, probe number)` to a slot index. The table asks
//! for probe `0, 1, 2, ...` in order and stops as soon as a slot settles the
//! operation, so the sequence must be deterministic for a given key and capacity.
//!
//! Two strategies are provided:
//! - [`LinearProbing`]: `(h1 + i) mod m`. Cheap, but occupied runs grow into each
//!   other (primary clustering) as the table fills.
//! - [`DoubleHashing`]: `(h1 + i * h2) mod m` with `h2 = 1 + (k mod (m - 2))`.
//!   When `m` is prime the step is coprime with `m`, so probes `0..m` visit every
//!   slot exactly once.
//!
//! The table receives its strategy by value at construction, so new strategies only
//! need to implement [`ProbeSequence`].
//!
//! ```rust
//! use probe_experiment::cs::hashing::probe::{DoubleHashing, ProbeSequence};
//!
//! // capacity 7, raw hash 10: h1 = 3, h2 = 1 + 10 mod 5 = 1
//! assert_eq!(DoubleHashing.index(10, 2, 7), 5);
//! ```

use crate::error::{Error, Result};

/// Strategy that enumerates candidate slots for a key.
pub trait ProbeSequence {
    /// Name used in reports.
    fn name(&self) -> &'static str;

    /// Rejects capacities the strategy cannot probe.
    fn check_capacity(&self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity {
                capacity,
                reason: "capacity must be positive",
            });
        }
        Ok(())
    }

    /// Slot index in `[0, capacity)` for attempt `probe` of a key hashing to
    /// `raw_hash`. Callers keep `probe < capacity`.
    ///
    /// # Panics
    ///
    /// May panic for a capacity that [`check_capacity`](Self::check_capacity)
    /// rejects.
    fn index(&self, raw_hash: i64, probe: usize, capacity: usize) -> usize;
}

impl<P: ProbeSequence + ?Sized> ProbeSequence for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn check_capacity(&self, capacity: usize) -> Result<()> {
        (**self).check_capacity(capacity)
    }

    fn index(&self, raw_hash: i64, probe: usize, capacity: usize) -> usize {
        (**self).index(raw_hash, probe, capacity)
    }
}

/// `raw_hash mod modulus`, corrected to be non-negative.
fn positive_mod(raw_hash: i64, modulus: usize) -> usize {
    (raw_hash as i128).rem_euclid(modulus as i128) as usize
}

/// Home slot of a key: `raw_hash mod capacity` in `[0, capacity)`.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn primary_hash(raw_hash: i64, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be positive");
    positive_mod(raw_hash, capacity)
}

/// Step size for double hashing, in `[1, capacity - 2]`.
///
/// # Panics
///
/// Panics if `capacity < 3`.
pub fn secondary_hash(raw_hash: i64, capacity: usize) -> usize {
    assert!(capacity >= 3, "double hashing needs a capacity of at least 3");
    1 + positive_mod(raw_hash, capacity - 2)
}

/// Linear probing: `(primary + probe) mod capacity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearProbing;

impl ProbeSequence for LinearProbing {
    fn name(&self) -> &'static str {
        "Linear Probing"
    }

    fn index(&self, raw_hash: i64, probe: usize, capacity: usize) -> usize {
        let home = primary_hash(raw_hash, capacity) as u128;
        ((home + probe as u128) % capacity as u128) as usize
    }
}

/// Double hashing: `(primary + probe * secondary) mod capacity`.
///
/// Needs `capacity >= 3`. The full cycle over every slot is only guaranteed for a
/// prime capacity, which is left to the caller (see
/// [`generate_twin_prime`](super::twin_prime::generate_twin_prime)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleHashing;

impl ProbeSequence for DoubleHashing {
    fn name(&self) -> &'static str {
        "Double Hashing"
    }

    fn check_capacity(&self, capacity: usize) -> Result<()> {
        if capacity < 3 {
            return Err(Error::InvalidCapacity {
                capacity,
                reason: "double hashing needs a capacity of at least 3",
            });
        }
        Ok(())
    }

    fn index(&self, raw_hash: i64, probe: usize, capacity: usize) -> usize {
        let home = primary_hash(raw_hash, capacity) as u128;
        let step = secondary_hash(raw_hash, capacity) as u128;
        ((home + probe as u128 * step) % capacity as u128) as usize
    }
}
