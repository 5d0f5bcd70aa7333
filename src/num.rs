//! Integration with the `num-traits` numeric hierarchy.

use crate::bigint::Bigint;
use crate::error::Error;
use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};

impl Zero for Bigint {
    #[inline]
    fn zero() -> Self {
        Bigint::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Bigint::is_zero(self)
    }

    #[inline]
    fn set_zero(&mut self) {
        *self = Bigint::zero();
    }
}

impl One for Bigint {
    #[inline]
    fn one() -> Self {
        Bigint::one()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.is_positive() && self.mag.is_one()
    }
}

impl Num for Bigint {
    type FromStrRadixErr = Error;

    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        Bigint::from_str_radix(s, radix)
    }
}

impl Signed for Bigint {
    #[inline]
    fn abs(&self) -> Self {
        Bigint::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            Bigint::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        Bigint::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Bigint::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Bigint::is_negative(self)
    }
}

impl ToPrimitive for Bigint {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_integer()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.to_integer()
    }
}

impl FromPrimitive for Bigint {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Bigint::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(Bigint::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Bigint::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(Bigint::from(n))
    }
}

impl Pow<u32> for Bigint {
    type Output = Bigint;

    #[inline]
    fn pow(self, exponent: u32) -> Bigint {
        Bigint::pow(&self, exponent)
    }
}

impl<'a> Pow<u32> for &'a Bigint {
    type Output = Bigint;

    #[inline]
    fn pow(self, exponent: u32) -> Bigint {
        Bigint::pow(self, exponent)
    }
}
