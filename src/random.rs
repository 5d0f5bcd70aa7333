//! Uniform random `Bigint` values drawn from a caller-supplied `rand::Rng`.
//!
//! Bounded sampling draws just enough bits to cover the span and retries
//! on overshoot, so the result carries no modulo bias at any width.

use crate::bigint::{Bigint, Sign};
use crate::magnitude::{Limb, Magnitude, LIMB_BITS};
use alloc::vec;
use rand::distributions::uniform::{SampleBorrow, SampleUniform, UniformSampler};
use rand::Rng;

/// Uniform magnitude in `[0, 2^bits)`.
fn gen_bits<R: Rng + ?Sized>(rng: &mut R, bits: usize) -> Magnitude {
    if bits == 0 {
        return Magnitude::zero();
    }
    let len = (bits + LIMB_BITS - 1) / LIMB_BITS;
    let mut data = vec![0 as Limb; len];
    rng.fill(&mut data[..]);
    let rem = bits % LIMB_BITS;
    if rem != 0 {
        data[len - 1] &= (1 << rem) - 1;
    }
    Magnitude::from_limbs(data)
}

/// Uniform magnitude in `[0, bound)` for a non-zero `bound`.
fn gen_below<R: Rng + ?Sized>(rng: &mut R, bound: &Magnitude) -> Magnitude {
    let mut max = bound.clone();
    max.isub_small(1);
    let bits = max.bit_length();
    loop {
        let candidate = gen_bits(rng, bits);
        if candidate < *bound {
            return candidate;
        }
    }
}

/// Uniform value in `[start, end)`.
///
/// ```
/// use bigint::{random_range, Bigint};
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
/// let start = Bigint::from(-1000);
/// let end: Bigint = "100000000000000000000000000000".parse().unwrap();
/// let x = random_range(&mut rng, &start, &end);
/// assert!(start <= x && x < end);
/// ```
///
/// # Panics
///
/// Panics if `start >= end`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, start: &Bigint, end: &Bigint) -> Bigint {
    assert!(start < end, "cannot sample empty range");
    let span = end - start;
    start + Bigint::from_parts(Sign::Positive, gen_below(rng, &span.mag))
}

/// Extension trait for drawing `Bigint` values from any `rand::Rng`.
pub trait RandomBigint {
    /// Uniform non-negative value below `2^bits`.
    fn gen_bigint_bits(&mut self, bits: usize) -> Bigint;

    /// Uniform value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    fn gen_bigint_below(&mut self, bound: &Bigint) -> Bigint;

    /// Uniform value in `[start, end)`, same as [`random_range`].
    fn gen_bigint_range(&mut self, start: &Bigint, end: &Bigint) -> Bigint;
}

impl<R: Rng + ?Sized> RandomBigint for R {
    fn gen_bigint_bits(&mut self, bits: usize) -> Bigint {
        Bigint::from_parts(Sign::Positive, gen_bits(self, bits))
    }

    fn gen_bigint_below(&mut self, bound: &Bigint) -> Bigint {
        assert!(bound.is_positive(), "upper bound must be positive");
        Bigint::from_parts(Sign::Positive, gen_below(self, &bound.mag))
    }

    fn gen_bigint_range(&mut self, start: &Bigint, end: &Bigint) -> Bigint {
        random_range(self, start, end)
    }
}

/// Sampler behind `rng.gen_range(a..b)` and `Uniform<Bigint>`.
#[derive(Clone, Debug)]
pub struct UniformBigint {
    low: Bigint,
    span: Bigint,
}

impl UniformSampler for UniformBigint {
    type X = Bigint;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low.borrow();
        let high = high.borrow();
        assert!(low < high, "Uniform::new called with `low >= high`");
        UniformBigint {
            low: low.clone(),
            span: high - low,
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let low = low.borrow();
        let high = high.borrow();
        assert!(low <= high, "Uniform::new_inclusive called with `low > high`");
        let mut span = high - low;
        span.increment();
        UniformBigint {
            low: low.clone(),
            span,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        &self.low + Bigint::from_parts(Sign::Positive, gen_below(rng, &self.span.mag))
    }
}

impl SampleUniform for Bigint {
    type Sampler = UniformBigint;
}
