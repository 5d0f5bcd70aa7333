//! Sign-combination rules for addition, subtraction, multiplication and
//! truncating division on top of the magnitude kernel.

use crate::bigint::{Bigint, Sign};
use crate::error::{Error, Result};
use crate::magnitude::{Limb, Magnitude};
use core::cmp::Ordering;

impl Bigint {
    /// Add a signed magnitude to `self` in place.
    pub(crate) fn add_signed(&mut self, sign: Sign, mag: &Magnitude) {
        if sign == Sign::Zero {
            return;
        }
        if self.sign == Sign::Zero {
            self.sign = sign;
            self.mag = mag.clone();
        } else if self.sign == sign {
            self.mag.iadd(mag);
        } else {
            // Opposite signs, the larger magnitude decides the sign.
            match self.mag.cmp(mag) {
                Ordering::Greater => self.mag.isub(mag),
                Ordering::Less => {
                    self.mag.isub_from(mag);
                    self.sign = sign;
                }
                Ordering::Equal => *self = Bigint::zero(),
            }
        }
    }

    /// Add a signed single-limb value to `self` in place.
    fn add_limb(&mut self, sign: Sign, y: Limb) {
        if self.sign == Sign::Zero {
            *self = Bigint::from_parts(sign, Magnitude::from_u128(y as u128));
        } else if self.sign == sign {
            self.mag.iadd_small(y);
        } else {
            let limbs = self.mag.limbs();
            if limbs.len() > 1 || limbs[0] > y {
                self.mag.isub_small(y);
            } else {
                let rest = y - limbs[0];
                *self = Bigint::from_parts(sign, Magnitude::from_u128(rest as u128));
            }
        }
    }

    /// Multiply `self` in place by a single-limb factor without promoting it
    /// to a `Bigint`.
    pub(crate) fn mul_limb(&mut self, y: Limb, negative: bool) {
        if y == 0 {
            *self = Bigint::zero();
            return;
        }
        self.mag.imul_small(y);
        if negative {
            self.negate();
        }
    }

    /// Multiply two values.
    pub(crate) fn mul_ref(&self, other: &Bigint) -> Bigint {
        let sign = self.sign * other.sign;
        if sign == Sign::Zero {
            return Bigint::zero();
        }
        let mut mag = self.mag.clone();
        mag.imul(&other.mag);
        Bigint::from_parts(sign, mag)
    }

    /// Prefix increment, `++x`.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// let mut x = Bigint::from(-1);
    /// x.increment();
    /// assert!(x.is_zero());
    /// assert_eq!(x.increment().to_string(), "1");
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        self.add_limb(Sign::Positive, 1);
        self
    }

    /// Prefix decrement, `--x`.
    pub fn decrement(&mut self) -> &mut Self {
        self.add_limb(Sign::Negative, 1);
        self
    }

    /// Postfix increment, `x++`: returns the value from before the
    /// increment.
    pub fn post_increment(&mut self) -> Bigint {
        let prior = self.clone();
        self.increment();
        prior
    }

    /// Postfix decrement, `x--`: returns the value from before the
    /// decrement.
    pub fn post_decrement(&mut self) -> Bigint {
        let prior = self.clone();
        self.decrement();
        prior
    }

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// the dividend, so `-44 % 42 == -2`.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// let (q, r) = Bigint::from(-44).div_rem(&Bigint::from(42));
    /// assert_eq!(q, Bigint::from(-1));
    /// assert_eq!(r, Bigint::from(-2));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub fn div_rem(&self, other: &Bigint) -> (Bigint, Bigint) {
        match self.try_div_rem(other) {
            Ok(pair) => pair,
            Err(err) => panic!("{}", err),
        }
    }

    /// Truncating division, failing with `ErrorCode::DivisionByZero` rather
    /// than panicking on a zero divisor.
    pub fn try_div_rem(&self, other: &Bigint) -> Result<(Bigint, Bigint)> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        let (q, r) = self.mag.divrem(&other.mag);
        Ok((
            Bigint::from_parts(self.sign * other.sign, q),
            Bigint::from_parts(self.sign, r),
        ))
    }

    /// Truncating quotient, or `None` for a zero divisor.
    pub fn checked_div(&self, other: &Bigint) -> Option<Bigint> {
        self.try_div_rem(other).ok().map(|(q, _)| q)
    }

    /// Remainder with the dividend's sign, or `None` for a zero divisor.
    pub fn checked_rem(&self, other: &Bigint) -> Option<Bigint> {
        self.try_div_rem(other).ok().map(|(_, r)| r)
    }
}
