/*!
Abstraction over a length.
This is usually being used in conjunction with [`Address`](../address/index.html)
to describe page sizes and offsets within pages.
*/

use std::default::Default;
use std::fmt;
use std::ops;

/**
This type represents a length.
It internally holds a `u64` value but can also be used
when working in 32-bit environments.

This type will not handle overflow for 32-bit or 64-bit addresses / lengths.
*/
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Length(u64);

/// Constructs a `Length` from a `i32` value.
impl From<i32> for Length {
    fn from(item: i32) -> Self {
        Self { 0: item as u64 }
    }
}

/// Constructs a `Length` from a `u32` value.
impl From<u32> for Length {
    fn from(item: u32) -> Self {
        Self { 0: u64::from(item) }
    }
}

/// Constructs a `Length` from a `u64` value.
impl From<u64> for Length {
    fn from(item: u64) -> Self {
        Self { 0: item }
    }
}

/// Constructs a `Length` from a `usize` value.
impl From<usize> for Length {
    fn from(item: usize) -> Self {
        Self { 0: item as u64 }
    }
}

impl Length {
    /// A length with the value of zero.
    pub const ZERO: Length = Length { 0: 0 };

    /// Returns a length with a value of zero.
    pub const fn zero() -> Self {
        Length { 0: 0 }
    }

    /// Checks wether the length is zero or not.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Converts the length into a `u64` value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Converts the length into a `usize` value.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Constructs a length from the given number of bytes.
    pub const fn from_b(len: u64) -> Self {
        Length { 0: len }
    }

    /// Constructs a length from the given number of kilobytes.
    pub const fn from_kb(len: u64) -> Self {
        Length { 0: len * 1024 }
    }

    /// Constructs a length from the given number of megabytes.
    pub const fn from_mb(len: u64) -> Self {
        Length {
            0: len * 1024 * 1024,
        }
    }
}

/// Returns a length with a value of zero.
impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

/// Adds a `Length` to a `Length` which results in a `Length`.
impl ops::Add for Length {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            0: self.0 + other.0,
        }
    }
}

/// Adds a `Length` to a `Length`.
impl ops::AddAssign for Length {
    fn add_assign(&mut self, other: Self) {
        *self = Self {
            0: self.0 + other.0,
        }
    }
}

/// Subtracts a `Length` from a `Length` resulting in a `Length`.
impl ops::Sub for Length {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            0: self.0 - other.0,
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
impl fmt::UpperHex for Length {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
impl fmt::LowerHex for Length {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from() {
        assert_eq!(Length::zero().as_u64(), 0);
        assert_eq!(Length::from(1337).as_u64(), 1337);
        assert_eq!(Length::from(4321).as_usize(), 4321);
        assert_eq!(Length::from_b(500), Length::from(500));
        assert_eq!(Length::from_kb(20), Length::from(20 * 1024));
        assert_eq!(Length::from_mb(20), Length::from(20 * 1024 * 1024));
    }

    #[test]
    fn test_ops() {
        assert_eq!(Length::from(100) - Length::from(50), Length::from(50));
        assert_eq!(Length::from(100) + Length::from(50), Length::from(150));
    }
}
