//! The signed, arbitrary-precision integer value.

use crate::magnitude::Magnitude;
use core::cmp::Ordering;
use core::ops::{Mul, Neg};

/// Sign of a [`Bigint`].
///
/// Variants are declared in numeric order, so the derived `Ord` ranks
/// `Negative < Zero < Positive`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly less than zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly greater than zero.
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (lhs, rhs) if lhs == rhs => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// A `Bigint` is a sign paired with a normalized magnitude. Every value
/// exclusively owns its storage: `clone` duplicates the limbs, and moving
/// out with [`core::mem::take`] leaves zero behind.
///
/// ```
/// use bigint::Bigint;
///
/// let a: Bigint = "1234567890123456789012345678901234567890".parse().unwrap();
/// let b = Bigint::from(-42);
///
/// assert_eq!(a.count(), 40);
/// assert_eq!((&a * &b).to_string(), "-51851851385185185138518518513851851851380");
/// assert!(b < a);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bigint {
    pub(crate) sign: Sign,
    pub(crate) mag: Magnitude,
}

impl Bigint {
    /// Pair a sign with a magnitude, forcing `Sign::Zero` for a zero
    /// magnitude.
    #[inline]
    pub(crate) fn from_parts(sign: Sign, mag: Magnitude) -> Self {
        if mag.is_zero() {
            Bigint::zero()
        } else {
            debug_assert!(sign != Sign::Zero);
            Bigint { sign, mag }
        }
    }

    /// The value `0`.
    #[inline]
    pub fn zero() -> Self {
        Bigint {
            sign: Sign::Zero,
            mag: Magnitude::zero(),
        }
    }

    /// The value `1`.
    #[inline]
    pub fn one() -> Self {
        Bigint {
            sign: Sign::Positive,
            mag: Magnitude::one(),
        }
    }

    /// Returns the sign of the value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.mag.is_even()
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.mag.is_even()
    }

    /// Absolute value.
    pub fn abs(&self) -> Bigint {
        match self.sign {
            Sign::Negative => Bigint {
                sign: Sign::Positive,
                mag: self.mag.clone(),
            },
            _ => self.clone(),
        }
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> Bigint {
        match self.sign {
            Sign::Negative => -Bigint::one(),
            Sign::Zero => Bigint::zero(),
            Sign::Positive => Bigint::one(),
        }
    }

    /// Flip the sign in place. Zero stays zero.
    ///
    /// Use the `-` operator for a negated copy that leaves the operand
    /// untouched.
    #[inline]
    pub fn negate(&mut self) {
        self.sign = -self.sign;
    }

    /// Number of decimal digits in the canonical base-10 form, not counting
    /// a leading `-`. Zero has one digit.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::zero().count(), 1);
    /// assert_eq!(Bigint::from(-12345).count(), 5);
    /// assert_eq!(Bigint::from(u128::MAX).count(), 39);
    /// ```
    pub fn count(&self) -> usize {
        match self.mag.to_u128() {
            Some(small) => itoa::Buffer::new().format(small).len(),
            None => self.mag.to_digits(10).len(),
        }
    }

    /// Number of significant bits in the magnitude. Zero has none.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.mag.bit_length()
    }
}

impl Default for Bigint {
    #[inline]
    fn default() -> Self {
        Bigint::zero()
    }
}

impl PartialOrd for Bigint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bigint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => self.mag.cmp(&other.mag),
                // A larger magnitude is a smaller negative value.
                Sign::Negative => other.mag.cmp(&self.mag),
            },
            unequal => unequal,
        }
    }
}
