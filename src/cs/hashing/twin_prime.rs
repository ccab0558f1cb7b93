//! # Twin Prime Capacity Sizing
//!
//! Double hashing only visits every slot when the step size is coprime with the
//! table capacity. Using a prime capacity makes that hold for every step in
//! `[1, capacity - 2]`, which is exactly the range the secondary hash produces.
//!
//! The experiment sizes its tables with the larger member of the first twin prime
//! pair found in a range. Picking a twin prime is a sizing convention, not
//! something double hashing needs: any prime capacity would give the full cycle.
//!
//! ```rust
//! use probe_experiment::cs::hashing::twin_prime::generate_twin_prime;
//!
//! // 95789 and 95791 are both prime.
//! assert_eq!(generate_twin_prime(95500, 96000).unwrap(), 95791);
//! assert!(generate_twin_prime(24, 28).is_err());
//! ```

use num_integer::Roots;

use crate::error::{Error, Result};

/// Trial division primality test.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let limit = n.sqrt();
    (3..=limit).step_by(2).all(|d| n % d != 0)
}

/// Scans `n` upward from `min` to `max` and returns `n + 2` for the first `n`
/// where both `n` and `n + 2` are prime.
///
/// Fails with [`Error::NoTwinPrime`] when the range holds no such pair; an empty
/// range (`min > max`) fails the same way.
pub fn generate_twin_prime(min: usize, max: usize) -> Result<usize> {
    for n in min..=max {
        let Some(upper) = n.checked_add(2) else {
            break;
        };
        if is_prime(n) && is_prime(upper) {
            log::debug!("twin prime pair ({}, {}) in [{}, {}]", n, upper, min, max);
            return Ok(upper);
        }
    }
    Err(Error::NoTwinPrime { min, max })
}
