//! Conversions between `Bigint` and the primitive integer types.

use crate::bigint::{Bigint, Sign};
use crate::error::Error;
use crate::magnitude::Magnitude;

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Bigint {
                #[inline]
                fn from(n: $ty) -> Self {
                    Bigint::from_parts(Sign::Positive, Magnitude::from_u128(n as u128))
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Bigint {
                #[inline]
                fn from(n: $ty) -> Self {
                    let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                    Bigint::from_parts(sign, Magnitude::from_u128(n.unsigned_abs() as u128))
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 u128 usize);
from_signed!(i8 i16 i32 i64 i128 isize);

mod private {
    pub trait Sealed {}
}

/// A primitive integer type that a `Bigint` can be narrowed into.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `bigint`.
pub trait FromBigint: private::Sealed + Sized {
    #[doc(hidden)]
    fn from_bigint(n: &Bigint) -> Option<Self>;
}

impl Bigint {
    /// Narrow into a primitive integer, or `None` when the value does not
    /// fit.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::from(-128).to_integer::<i8>(), Some(-128));
    /// assert_eq!(Bigint::from(128).to_integer::<i8>(), None);
    /// assert_eq!(Bigint::from(-1).to_integer::<u64>(), None);
    /// ```
    #[inline]
    pub fn to_integer<T: FromBigint>(&self) -> Option<T> {
        T::from_bigint(self)
    }
}

macro_rules! into_unsigned {
    ($($ty:ident)*) => {
        $(
            impl private::Sealed for $ty {}

            impl FromBigint for $ty {
                fn from_bigint(n: &Bigint) -> Option<Self> {
                    if n.is_negative() {
                        return None;
                    }
                    n.mag.to_u128().and_then(|m| $ty::try_from(m).ok())
                }
            }
        )*
    };
}

macro_rules! into_signed {
    ($($ty:ident)*) => {
        $(
            impl private::Sealed for $ty {}

            impl FromBigint for $ty {
                fn from_bigint(n: &Bigint) -> Option<Self> {
                    let m = n.mag.to_u128()?;
                    let wide = if n.is_negative() {
                        if m > i128::MIN.unsigned_abs() {
                            return None;
                        }
                        // 2^127 wraps onto i128::MIN, its own negation.
                        (m as i128).wrapping_neg()
                    } else {
                        i128::try_from(m).ok()?
                    };
                    $ty::try_from(wide).ok()
                }
            }
        )*
    };
}

into_unsigned!(u8 u16 u32 u64 u128 usize);
into_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! try_into_primitive {
    ($($ty:ident)*) => {
        $(
            impl<'a> TryFrom<&'a Bigint> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(n: &Bigint) -> Result<Self, Error> {
                    n.to_integer().ok_or_else(Error::out_of_range)
                }
            }

            impl TryFrom<Bigint> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(n: Bigint) -> Result<Self, Error> {
                    $ty::try_from(&n)
                }
            }
        )*
    };
}

try_into_primitive!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);
