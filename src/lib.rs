pub mod cs;
pub mod error;
pub mod experiment;

pub use cs::hashing;
pub use error::{Error, Result};
