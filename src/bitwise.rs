//! Bit-level operations on `Bigint`.
//!
//! Bitwise operators act on magnitudes, zero-extended to the wider operand.
//! The sign of the result follows the same operator applied to the sign
//! bits: `&` is negative when both operands are, `|` when either is, and
//! `^` when exactly one is. Shifts scale the magnitude and keep the sign.

use crate::bigint::{Bigint, Sign};

impl Bigint {
    /// Number of set bits in the magnitude.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::from(0xF0F0).popcount(), 8);
    /// assert_eq!(Bigint::from(-7).popcount(), 3);
    /// assert_eq!(Bigint::zero().popcount(), 0);
    /// ```
    #[inline]
    pub fn popcount(&self) -> usize {
        self.mag.count_ones()
    }

    pub(crate) fn bitand_ref(&self, other: &Bigint) -> Bigint {
        let negative = self.is_negative() && other.is_negative();
        Bigint::from_parts(sign_of(negative), self.mag.and(&other.mag))
    }

    pub(crate) fn bitor_ref(&self, other: &Bigint) -> Bigint {
        let negative = self.is_negative() || other.is_negative();
        Bigint::from_parts(sign_of(negative), self.mag.or(&other.mag))
    }

    pub(crate) fn bitxor_ref(&self, other: &Bigint) -> Bigint {
        let negative = self.is_negative() != other.is_negative();
        Bigint::from_parts(sign_of(negative), self.mag.xor(&other.mag))
    }

    /// Complement of the magnitude over its own bit width. Zero is treated
    /// as one bit wide, so `!0 == 1`.
    pub(crate) fn not_ref(&self) -> Bigint {
        Bigint::from_parts(sign_of(self.is_negative()), self.mag.not())
    }

    pub(crate) fn shl_in_place(&mut self, n: usize) {
        self.mag.ishl(n);
    }

    pub(crate) fn shr_in_place(&mut self, n: usize) {
        self.mag.ishr(n);
        if self.mag.is_zero() {
            self.sign = Sign::Zero;
        }
    }
}

#[inline]
fn sign_of(negative: bool) -> Sign {
    if negative {
        Sign::Negative
    } else {
        Sign::Positive
    }
}
