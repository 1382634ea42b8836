//! Structural hash codes.
//!
//! Unlike `std::hash`, these codes are plain `i32` values with fixed
//! combining rules, so they are stable across processes, platforms and
//! language bindings. The per-type rules are those of the service's
//! reference SDK (UTF-16 string hashing, `1231`/`1237` for booleans, folded
//! 64-bit integers), which keeps golden values portable.

use std::collections::BTreeMap;

use crate::Timestamp;

/// Multiplier applied to the running code before each value is added.
pub const HASH_PRIME: i32 = 31;

/// Starting value for ordered combinations (entities and lists).
pub const HASH_SEED: i32 = 1;

/// A value with a portable structural hash code.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

/// Folds one value's code into a running code: `acc * 31 + value`, wrapping.
#[must_use]
pub const fn combine(acc: i32, value: i32) -> i32 {
    acc.wrapping_mul(HASH_PRIME).wrapping_add(value)
}

/// Hash code of a possibly-absent value; absent contributes `0`.
#[must_use]
pub fn optional_hash<T: HashCode + ?Sized>(value: Option<&T>) -> i32 {
    value.map_or(0, HashCode::hash_code)
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0, |acc, unit| combine(acc, i32::from(unit)))
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl HashCode for i64 {
    fn hash_code(&self) -> i32 {
        // Low 32 bits of `v ^ (v >>> 32)`.
        (*self ^ ((*self as u64) >> 32) as i64) as i32
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl HashCode for Timestamp {
    fn hash_code(&self) -> i32 {
        self.as_millis().hash_code()
    }
}

impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(HASH_SEED, |acc, item| combine(acc, item.hash_code()))
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}

impl<K: HashCode, V: HashCode> HashCode for BTreeMap<K, V> {
    fn hash_code(&self) -> i32 {
        // Order-independent: sum of per-entry codes.
        self.iter().fold(0, |acc, (key, value)| {
            acc.wrapping_add(key.hash_code() ^ value.hash_code())
        })
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        optional_hash(self.as_ref())
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_codes_match_reference_values() {
        assert_eq!("".hash_code(), 0);
        assert_eq!("a".hash_code(), 97);
        assert_eq!("abc".hash_code(), 96354);
        assert_eq!("Hello".hash_code(), 69_609_650);
    }

    #[test]
    fn long_folds_high_bits() {
        assert_eq!(0_i64.hash_code(), 0);
        assert_eq!(1_i64.hash_code(), 1);
        assert_eq!((1_i64 << 32).hash_code(), 1);
        assert_eq!((-1_i64).hash_code(), 0);
    }

    #[test]
    fn combine_wraps() {
        assert_eq!(combine(i32::MAX, 1), i32::MAX.wrapping_mul(31).wrapping_add(1));
    }
}
