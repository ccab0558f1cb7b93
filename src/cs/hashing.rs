//! Open addressing core: capacity sizing, entries, probe sequences and the table.
//!
//! Nothing in here prints or touches files. Statistics come out through accessors
//! on [`HashTable`] and presentation is left to the caller.

pub mod entry;
pub mod open_addressing;
pub mod probe;
pub mod raw_hash;
pub mod twin_prime;

pub use entry::{Entry, Slot};
pub use open_addressing::{HashTable, InsertOutcome, TableStats};
pub use probe::{DoubleHashing, LinearProbing, ProbeSequence};
pub use raw_hash::RawHash;
pub use twin_prime::{generate_twin_prime, is_prime};
