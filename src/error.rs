//! Error types shared by the hash table core and the experiment driver.
//!
//! Only configuration problems are errors. A full table or a missing key is an
//! ordinary `bool`/`Option` result and never shows up here.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No `n` in `[min, max]` has both `n` and `n + 2` prime.
    #[error("no twin prime pair found with lower member in [{min}, {max}]")]
    NoTwinPrime { min: usize, max: usize },

    /// The capacity cannot back a table with the chosen probe sequence.
    #[error("invalid table capacity {capacity}: {reason}")]
    InvalidCapacity { capacity: usize, reason: &'static str },

    /// Load factor must be finite and within (0, 1].
    #[error("invalid load factor {0}, expected a value in (0, 1]")]
    InvalidLoadFactor(f64),

    #[error("unknown data source {0}, expected 1 (random numbers), 2 (dates) or 3 (word list)")]
    InvalidDataSource(u8),

    #[error("unknown debug level {0}, expected 0, 1 or 2")]
    InvalidDebugLevel(u8),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
