//! Unsigned magnitude storage for `Bigint`.
//!
//! A magnitude owns a normalized, little-endian limb buffer. It carries no
//! sign; sign rules live one layer up in `Bigint`.

mod bits;
mod math;
mod radix;

pub(crate) use self::math::{Limb, LIMB_BITS};
pub(crate) use self::radix::{digit_char, digit_value, MAX_RADIX, MIN_RADIX};

use self::math::{large, small};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Storage for the unsigned value of a big integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Magnitude {
    /// Internal storage, in little-endian order. Never empty.
    data: Vec<Limb>,
}

impl Magnitude {
    // CONSTRUCTION

    #[inline]
    pub(crate) fn zero() -> Self {
        Magnitude { data: vec![0] }
    }

    #[inline]
    pub(crate) fn one() -> Self {
        Magnitude { data: vec![1] }
    }

    #[inline]
    pub(crate) fn from_u128(x: u128) -> Self {
        Magnitude {
            data: math::from_u128(x),
        }
    }

    /// Take ownership of an arbitrary little-endian buffer.
    pub(crate) fn from_limbs(mut data: Vec<Limb>) -> Self {
        small::normalize(&mut data);
        Magnitude { data }
    }

    /// Parse digit values, most significant first, all below `radix`.
    pub(crate) fn from_digits(digits: &[u8], radix: u32) -> Self {
        Magnitude {
            data: radix::from_radix(digits, radix),
        }
    }

    // PROPERTIES

    #[inline]
    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.data
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        math::is_zero(&self.data)
    }

    #[inline]
    pub(crate) fn is_one(&self) -> bool {
        self.data.len() == 1 && self.data[0] == 1
    }

    #[inline]
    pub(crate) fn is_even(&self) -> bool {
        self.data[0] & 1 == 0
    }

    /// Number of significant bits; zero has none.
    #[inline]
    pub(crate) fn bit_length(&self) -> usize {
        small::bit_length(&self.data)
    }

    #[inline]
    pub(crate) fn count_ones(&self) -> usize {
        bits::count_ones(&self.data)
    }

    #[inline]
    pub(crate) fn to_u128(&self) -> Option<u128> {
        math::to_u128(&self.data)
    }

    /// Digit values in `radix`, most significant first.
    #[inline]
    pub(crate) fn to_digits(&self, radix: u32) -> Vec<u8> {
        radix::to_radix(&self.data, radix)
    }

    // ADDITION

    #[inline]
    pub(crate) fn iadd(&mut self, y: &Magnitude) {
        large::iadd(&mut self.data, &y.data);
    }

    #[inline]
    pub(crate) fn iadd_small(&mut self, y: Limb) {
        small::iadd(&mut self.data, y);
    }

    // SUBTRACTION

    /// SubAssign a magnitude no larger than `self`.
    #[inline]
    pub(crate) fn isub(&mut self, y: &Magnitude) {
        large::isub(&mut self.data, &y.data);
    }

    /// Replace `self` with `y - self`, for `y` no smaller than `self`.
    pub(crate) fn isub_from(&mut self, y: &Magnitude) {
        let mut z = y.data.clone();
        large::isub(&mut z, &self.data);
        self.data = z;
    }

    /// SubAssign a small value no larger than `self`.
    #[inline]
    pub(crate) fn isub_small(&mut self, y: Limb) {
        small::isub(&mut self.data, y);
    }

    // MULTIPLICATION

    #[inline]
    pub(crate) fn imul(&mut self, y: &Magnitude) {
        large::imul(&mut self.data, &y.data);
    }

    #[inline]
    pub(crate) fn imul_small(&mut self, y: Limb) {
        small::imul(&mut self.data, y);
    }

    // DIVISION

    /// Quotient and remainder by a non-zero divisor.
    pub(crate) fn divrem(&self, y: &Magnitude) -> (Magnitude, Magnitude) {
        let (q, r) = large::divrem(&self.data, &y.data);
        (Magnitude { data: q }, Magnitude { data: r })
    }

    // SHIFTS

    #[inline]
    pub(crate) fn ishl(&mut self, n: usize) {
        small::ishl(&mut self.data, n);
    }

    #[inline]
    pub(crate) fn ishr(&mut self, n: usize) {
        small::ishr(&mut self.data, n);
    }

    // BITWISE

    #[inline]
    pub(crate) fn and(&self, y: &Magnitude) -> Magnitude {
        Magnitude {
            data: bits::and(&self.data, &y.data),
        }
    }

    #[inline]
    pub(crate) fn or(&self, y: &Magnitude) -> Magnitude {
        Magnitude {
            data: bits::or(&self.data, &y.data),
        }
    }

    #[inline]
    pub(crate) fn xor(&self, y: &Magnitude) -> Magnitude {
        Magnitude {
            data: bits::xor(&self.data, &y.data),
        }
    }

    #[inline]
    pub(crate) fn not(&self) -> Magnitude {
        Magnitude {
            data: bits::not(&self.data),
        }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::zero()
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        large::compare(&self.data, &other.data)
    }
}
