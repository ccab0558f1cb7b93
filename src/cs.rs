pub mod hashing;

// Re-export the table and strategies
pub use hashing::{DoubleHashing, HashTable, LinearProbing, ProbeSequence};
