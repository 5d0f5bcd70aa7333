//! Operator overloading for `Bigint`.
//!
//! Each operator has a single in-place implementation taking `&Bigint` on
//! the right; the owned and borrowed combinations forward to it. Division
//! and remainder panic on a zero divisor, every other operator is total.

use crate::bigint::Bigint;
use crate::magnitude::Limb;
use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

// IN-PLACE CORE
// -------------

impl<'a> AddAssign<&'a Bigint> for Bigint {
    #[inline]
    fn add_assign(&mut self, other: &Bigint) {
        self.add_signed(other.sign, &other.mag);
    }
}

impl<'a> SubAssign<&'a Bigint> for Bigint {
    #[inline]
    fn sub_assign(&mut self, other: &Bigint) {
        self.add_signed(-other.sign, &other.mag);
    }
}

impl<'a> MulAssign<&'a Bigint> for Bigint {
    #[inline]
    fn mul_assign(&mut self, other: &Bigint) {
        *self = self.mul_ref(other);
    }
}

impl<'a> DivAssign<&'a Bigint> for Bigint {
    #[inline]
    fn div_assign(&mut self, other: &Bigint) {
        *self = self.div_rem(other).0;
    }
}

impl<'a> RemAssign<&'a Bigint> for Bigint {
    #[inline]
    fn rem_assign(&mut self, other: &Bigint) {
        *self = self.div_rem(other).1;
    }
}

impl<'a> BitAndAssign<&'a Bigint> for Bigint {
    #[inline]
    fn bitand_assign(&mut self, other: &Bigint) {
        *self = self.bitand_ref(other);
    }
}

impl<'a> BitOrAssign<&'a Bigint> for Bigint {
    #[inline]
    fn bitor_assign(&mut self, other: &Bigint) {
        *self = self.bitor_ref(other);
    }
}

impl<'a> BitXorAssign<&'a Bigint> for Bigint {
    #[inline]
    fn bitxor_assign(&mut self, other: &Bigint) {
        *self = self.bitxor_ref(other);
    }
}

// FORWARDING
// ----------

/// Derive the owned and borrowed forms of a binary operator from its
/// `OpAssign<&Bigint>` implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $assign_imp<Bigint> for Bigint {
            #[inline]
            fn $assign_method(&mut self, other: Bigint) {
                $assign_imp::$assign_method(self, &other);
            }
        }

        impl<'a> $imp<&'a Bigint> for Bigint {
            type Output = Bigint;

            #[inline]
            fn $method(mut self, other: &Bigint) -> Bigint {
                $assign_imp::$assign_method(&mut self, other);
                self
            }
        }

        impl $imp<Bigint> for Bigint {
            type Output = Bigint;

            #[inline]
            fn $method(self, other: Bigint) -> Bigint {
                $imp::$method(self, &other)
            }
        }

        impl<'a> $imp<Bigint> for &'a Bigint {
            type Output = Bigint;

            #[inline]
            fn $method(self, other: Bigint) -> Bigint {
                $imp::$method(self.clone(), &other)
            }
        }

        impl<'a, 'b> $imp<&'b Bigint> for &'a Bigint {
            type Output = Bigint;

            #[inline]
            fn $method(self, other: &Bigint) -> Bigint {
                $imp::$method(self.clone(), other)
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

// PRIMITIVE OPERANDS
// ------------------

/// Binary operators with a primitive right-hand side, promoted to `Bigint`.
macro_rules! scalar_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $($ty:ident)*) => {
        $(
            impl $assign_imp<$ty> for Bigint {
                #[inline]
                fn $assign_method(&mut self, other: $ty) {
                    $assign_imp::$assign_method(self, &Bigint::from(other));
                }
            }

            impl $imp<$ty> for Bigint {
                type Output = Bigint;

                #[inline]
                fn $method(mut self, other: $ty) -> Bigint {
                    $assign_imp::$assign_method(&mut self, other);
                    self
                }
            }

            impl<'a> $imp<$ty> for &'a Bigint {
                type Output = Bigint;

                #[inline]
                fn $method(self, other: $ty) -> Bigint {
                    $imp::$method(self.clone(), other)
                }
            }
        )*
    };
}

scalar_binop!(Add, add, AddAssign, add_assign, i32 i64 u32 u64);
scalar_binop!(Sub, sub, SubAssign, sub_assign, i32 i64 u32 u64);
scalar_binop!(Mul, mul, MulAssign, mul_assign, i64 u64);
scalar_binop!(Div, div, DivAssign, div_assign, i32 i64 u32 u64);
scalar_binop!(Rem, rem, RemAssign, rem_assign, i32 i64 u32 u64);

/// A factor that fits in a single limb, split into magnitude and sign.
trait LimbFactor: Copy {
    fn split(self) -> (Limb, bool);
}

impl LimbFactor for u32 {
    #[inline]
    fn split(self) -> (Limb, bool) {
        (self as Limb, false)
    }
}

impl LimbFactor for i32 {
    #[inline]
    fn split(self) -> (Limb, bool) {
        (self.unsigned_abs() as Limb, self < 0)
    }
}

/// Multiplication by a factor that fits a single limb, without promotion.
macro_rules! scalar_mul {
    ($($ty:ident)*) => {
        $(
            impl MulAssign<$ty> for Bigint {
                #[inline]
                fn mul_assign(&mut self, other: $ty) {
                    let (y, negative) = other.split();
                    self.mul_limb(y, negative);
                }
            }

            impl Mul<$ty> for Bigint {
                type Output = Bigint;

                #[inline]
                fn mul(mut self, other: $ty) -> Bigint {
                    self *= other;
                    self
                }
            }

            impl<'a> Mul<$ty> for &'a Bigint {
                type Output = Bigint;

                #[inline]
                fn mul(self, other: $ty) -> Bigint {
                    self.clone() * other
                }
            }
        )*
    };
}

scalar_mul!(i32 u32);

// UNARY
// -----

impl Neg for Bigint {
    type Output = Bigint;

    #[inline]
    fn neg(mut self) -> Bigint {
        self.negate();
        self
    }
}

impl<'a> Neg for &'a Bigint {
    type Output = Bigint;

    #[inline]
    fn neg(self) -> Bigint {
        -self.clone()
    }
}

impl Not for Bigint {
    type Output = Bigint;

    #[inline]
    fn not(self) -> Bigint {
        self.not_ref()
    }
}

impl<'a> Not for &'a Bigint {
    type Output = Bigint;

    #[inline]
    fn not(self) -> Bigint {
        self.not_ref()
    }
}

// SHIFTS
// ------

macro_rules! shift_ops {
    ($($ty:ident)*) => {
        $(
            impl ShlAssign<$ty> for Bigint {
                #[inline]
                fn shl_assign(&mut self, n: $ty) {
                    self.shl_in_place(n as usize);
                }
            }

            /// Divides the magnitude by `2^n` and keeps the sign, so a negative
            /// value rounds toward zero rather than toward negative infinity.
            impl ShrAssign<$ty> for Bigint {
                #[inline]
                fn shr_assign(&mut self, n: $ty) {
                    self.shr_in_place(n as usize);
                }
            }

            impl Shl<$ty> for Bigint {
                type Output = Bigint;

                #[inline]
                fn shl(mut self, n: $ty) -> Bigint {
                    self <<= n;
                    self
                }
            }

            impl<'a> Shl<$ty> for &'a Bigint {
                type Output = Bigint;

                #[inline]
                fn shl(self, n: $ty) -> Bigint {
                    self.clone() << n
                }
            }

            /// Shifts the magnitude right by `n` bits, keeping the sign.
            ///
            /// This is truncating division by `2^n`, the same rounding as `/`,
            /// so `-5 >> 1` is `-2`. A result of zero has [`Sign::Zero`].
            ///
            /// [`Sign::Zero`]: crate::Sign::Zero
            impl Shr<$ty> for Bigint {
                type Output = Bigint;

                #[inline]
                fn shr(mut self, n: $ty) -> Bigint {
                    self >>= n;
                    self
                }
            }

            impl<'a> Shr<$ty> for &'a Bigint {
                type Output = Bigint;

                #[inline]
                fn shr(self, n: $ty) -> Bigint {
                    self.clone() >> n
                }
            }
        )*
    };
}

shift_ops!(u32 usize);

// PRIMITIVE COMPARISONS
// ---------------------

macro_rules! scalar_cmp {
    ($($ty:ident)*) => {
        $(
            impl PartialEq<$ty> for Bigint {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.to_integer::<$ty>() == Some(*other)
                }
            }

            impl PartialOrd<$ty> for Bigint {
                #[inline]
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.cmp(&Bigint::from(*other)))
                }
            }
        )*
    };
}

scalar_cmp!(i64 u64);
