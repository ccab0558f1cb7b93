//! # Raw Key Hashes
//!
//! Probe sequences work from a single signed hash per key. The hashes here are
//! deterministic (no random seed), so two tables given the same keys see the same
//! collisions and an experiment can be replayed.
//!
//! Integers hash to their own value, 64-bit integers are folded into 32 bits, and
//! strings use a polynomial rolling hash with multiplier 31 in wrapping 32-bit
//! arithmetic. Either way the result may be negative; the probe sequences are
//! responsible for bringing it into range.

/// A deterministic hash that may be negative.
pub trait RawHash {
    fn raw_hash(&self) -> i64;
}

/// Folds a 64-bit value into 32 bits by xoring the high half into the low half.
pub fn fold64(value: u64) -> i64 {
    (value ^ (value >> 32)) as u32 as i32 as i64
}

/// `s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]` over UTF-16 code units, wrapping.
pub fn polynomial_hash(s: &str) -> i64 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32)) as i64
}

impl RawHash for i32 {
    fn raw_hash(&self) -> i64 {
        *self as i64
    }
}

impl RawHash for u32 {
    fn raw_hash(&self) -> i64 {
        *self as i64
    }
}

impl RawHash for i64 {
    fn raw_hash(&self) -> i64 {
        fold64(*self as u64)
    }
}

impl RawHash for u64 {
    fn raw_hash(&self) -> i64 {
        fold64(*self)
    }
}

impl RawHash for usize {
    fn raw_hash(&self) -> i64 {
        fold64(*self as u64)
    }
}

impl RawHash for str {
    fn raw_hash(&self) -> i64 {
        polynomial_hash(self)
    }
}

impl RawHash for String {
    fn raw_hash(&self) -> i64 {
        polynomial_hash(self)
    }
}

impl<T: RawHash + ?Sized> RawHash for &T {
    fn raw_hash(&self) -> i64 {
        (**self).raw_hash()
    }
}
