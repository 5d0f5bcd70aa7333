//! Exponentiation, integer square root and gcd/lcm.

use crate::bigint::{Bigint, Sign};
use crate::magnitude::Magnitude;
use core::mem;

impl Bigint {
    /// Raise `self` to the power `exponent` by repeated squaring.
    ///
    /// `pow(0)` is one for every base, including zero.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::from(-3).pow(3), Bigint::from(-27));
    /// assert_eq!(Bigint::from(-3).pow(4), Bigint::from(81));
    /// assert_eq!(Bigint::zero().pow(0), Bigint::one());
    /// assert_eq!(Bigint::from(2).pow(100).to_string(), "1267650600228229401496703205376");
    /// ```
    pub fn pow(&self, mut exponent: u32) -> Bigint {
        let mut result = Bigint::one();
        let mut base = self.clone();
        while exponent != 0 {
            if exponent & 1 == 1 {
                result = result.mul_ref(&base);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.mul_ref(&base);
            }
        }
        result
    }

    /// Floor of the square root.
    ///
    /// # Panics
    ///
    /// Panics if `self` is negative. See [`Bigint::checked_sqrt`].
    pub fn sqrt(&self) -> Bigint {
        match self.checked_sqrt() {
            Some(root) => root,
            None => panic!("square root of negative number"),
        }
    }

    /// Floor of the square root, or `None` for a negative value.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::from(99).checked_sqrt(), Some(Bigint::from(9)));
    /// assert_eq!(Bigint::from(100).checked_sqrt(), Some(Bigint::from(10)));
    /// assert_eq!(Bigint::from(-1).checked_sqrt(), None);
    /// ```
    pub fn checked_sqrt(&self) -> Option<Bigint> {
        match self.sign {
            Sign::Negative => None,
            Sign::Zero => Some(Bigint::zero()),
            Sign::Positive => Some(Bigint::from_parts(Sign::Positive, isqrt(&self.mag))),
        }
    }

    /// Greatest common divisor of the absolute values. `gcd(0, x) == |x|`.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::from(-12).gcd(&Bigint::from(18)), Bigint::from(6));
    /// assert_eq!(Bigint::zero().gcd(&Bigint::from(-5)), Bigint::from(5));
    /// ```
    pub fn gcd(&self, other: &Bigint) -> Bigint {
        let mut a = self.mag.clone();
        let mut b = other.mag.clone();
        while !b.is_zero() {
            let (_, r) = a.divrem(&b);
            a = mem::replace(&mut b, r);
        }
        Bigint::from_parts(Sign::Positive, a)
    }

    /// Least common multiple of the absolute values. Zero when either
    /// operand is zero.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::from(-4).lcm(&Bigint::from(6)), Bigint::from(12));
    /// assert!(Bigint::zero().lcm(&Bigint::from(6)).is_zero());
    /// ```
    pub fn lcm(&self, other: &Bigint) -> Bigint {
        if self.is_zero() || other.is_zero() {
            return Bigint::zero();
        }
        let gcd = self.gcd(other);
        let (mut mag, _) = self.mag.divrem(&gcd.mag);
        mag.imul(&other.mag);
        Bigint::from_parts(Sign::Positive, mag)
    }
}

/// Newton iteration from an initial guess of `2^ceil(bits / 2)`, which is
/// never below the root. The sequence decreases until it reaches the floor.
fn isqrt(x: &Magnitude) -> Magnitude {
    let mut guess = Magnitude::one();
    guess.ishl((x.bit_length() + 1) / 2);
    loop {
        let (mut next, _) = x.divrem(&guess);
        next.iadd(&guess);
        next.ishr(1);
        if next >= guess {
            return guess;
        }
        guess = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_bounds() {
        for n in 1u128..2000 {
            let root = isqrt(&Magnitude::from_u128(n)).to_u128().unwrap();
            assert!(root * root <= n, "{}", n);
            assert!((root + 1) * (root + 1) > n, "{}", n);
        }
        let max = isqrt(&Magnitude::from_u128(u128::MAX));
        assert_eq!(max.to_u128(), Some(u64::MAX as u128));
    }

    #[test]
    fn gcd_lcm_product() {
        let a = Bigint::from(-360);
        let b = Bigint::from(84);
        assert_eq!(a.gcd(&b), Bigint::from(12));
        assert_eq!(a.lcm(&b), Bigint::from(2520));
        assert_eq!(a.gcd(&Bigint::zero()), Bigint::from(360));
        assert!(Bigint::zero().gcd(&Bigint::zero()).is_zero());
    }
}
