//! `Sum` and `Product` over iterators of `Bigint`.

use crate::bigint::Bigint;
use core::iter::{Product, Sum};

impl Sum for Bigint {
    fn sum<I: Iterator<Item = Bigint>>(iter: I) -> Self {
        iter.fold(Bigint::zero(), |acc, x| acc + &x)
    }
}

impl<'a> Sum<&'a Bigint> for Bigint {
    fn sum<I: Iterator<Item = &'a Bigint>>(iter: I) -> Self {
        iter.fold(Bigint::zero(), |acc, x| acc + x)
    }
}

impl Product for Bigint {
    fn product<I: Iterator<Item = Bigint>>(iter: I) -> Self {
        iter.fold(Bigint::one(), |acc, x| acc * &x)
    }
}

impl<'a> Product<&'a Bigint> for Bigint {
    fn product<I: Iterator<Item = &'a Bigint>>(iter: I) -> Self {
        iter.fold(Bigint::one(), |acc, x| acc * x)
    }
}
