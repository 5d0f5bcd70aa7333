//! Building-blocks for arbitrary-precision magnitudes.
//!
//! These algorithms assume little-endian order for the limb buffers, so for
//! a `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0` is the
//! least significant limb.
//!
//! Every buffer leaving this module is normalized: there are no high-order
//! zero limbs, except for zero itself, which is exactly one zero limb.

use alloc::vec;
use alloc::vec::Vec;
use core::{cmp, iter};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. The 64-bit limb is only selected on
//  platforms with native 64x64->128 bit multiplication, see build.rs.

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) type Wide = u64;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) type Wide = u128;

/// Number of bits in a single limb.
pub(crate) const LIMB_BITS: usize = Limb::BITS as usize;

// CONVERSIONS
// -----------

/// Split u128 into limbs, in little-endian order.
pub(crate) fn from_u128(mut x: u128) -> Vec<Limb> {
    let mut v = Vec::with_capacity(128 / LIMB_BITS);
    loop {
        v.push(x as Limb);
        x >>= LIMB_BITS;
        if x == 0 {
            return v;
        }
    }
}

/// Join the limbs back into a u128, if they fit.
pub(crate) fn to_u128(x: &[Limb]) -> Option<u128> {
    if small::bit_length(x) > 128 {
        return None;
    }
    let value = x
        .iter()
        .rev()
        .fold(0u128, |acc, &xi| (acc << LIMB_BITS) | xi as u128);
    Some(value)
}

/// Check if the normalized buffer represents zero.
#[inline]
pub(crate) fn is_zero(x: &[Limb]) -> bool {
    x.len() == 1 && x[0] == 0
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_add(y)
    }

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_sub(y)
    }

    /// SubAssign two small integers and return if overflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow, as long as wide is 2x as wide. This is because
        // the following is always true:
        // `Wide::MAX - (Narrow::MAX * Narrow::MAX) >= Narrow::MAX`
        let z = x as Wide * y as Wide + carry as Wide;
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    /// Multiply two small integers (with carry) (and return if overflow happens).
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }

    // DIVISION

    /// Divide the two-limb value `(hi, lo)` by `y`.
    ///
    /// Requires `hi < y`, so the quotient fits in one limb. Returns the
    /// (quotient, remainder) components.
    #[inline]
    pub fn div(hi: Limb, lo: Limb, y: Limb) -> (Limb, Limb) {
        debug_assert!(hi < y);
        let n = ((hi as Wide) << LIMB_BITS) | lo as Wide;
        ((n / y as Wide) as Limb, (n % y as Wide) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    #[inline]
    pub fn iadd_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            x.push(y);
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                x.push(1);
            }
        }
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    #[inline]
    pub fn isub_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        // Initial subtraction
        let mut carry = scalar::isub(&mut x[xstart], y);

        // Decrement until underflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    /// SubAssign small integer to bigint.
    #[inline]
    pub fn isub(x: &mut Vec<Limb>, y: Limb) {
        isub_impl(x, y, 0);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
        normalize(x);
    }

    /// Mul small integer to bigint.
    #[inline]
    pub fn mul(x: &[Limb], y: Limb) -> Vec<Limb> {
        let mut z = Vec::with_capacity(x.len() + 1);
        z.extend_from_slice(x);
        imul(&mut z, y);
        z
    }

    // DIVISION

    /// DivAssign small integer to bigint, returning the remainder.
    #[inline]
    pub fn idiv(x: &mut Vec<Limb>, y: Limb) -> Limb {
        debug_assert!(y != 0);

        // Walk from the most significant limb, carrying the remainder down.
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let (q, r) = scalar::div(rem, *xi, y);
            *xi = q;
            rem = r;
        }
        normalize(x);
        rem
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            Some(&xi) => xi.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x);
        LIMB_BITS
            .checked_mul(x.len())
            .map(|v| v - nlz)
            .unwrap_or(usize::MAX)
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < Limb::BITS`, IE, internally shifting bits.
    #[inline]
    pub fn ishl_bits(x: &mut Vec<Limb>, n: usize) {
        // Need to shift by the number of `bits % Limb::BITS)`.
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left `n` digits inside a buffer.
    #[inline]
    pub fn ishl_limbs(x: &mut Vec<Limb>, n: usize) {
        if n != 0 && !is_zero(x) {
            x.splice(0..0, iter::repeat(0).take(n));
        }
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut Vec<Limb>, n: usize) {
        // Need to pad with zeros for the number of `bits / Limb::BITS`,
        // and shift-left with carry for `bits % Limb::BITS`.
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishl_bits(x, rem);
        ishl_limbs(x, div);
    }

    // SHR

    /// Shift-right bits inside a buffer, discarding the low bits.
    ///
    /// Assumes `n < Limb::BITS`, IE, internally shifting bits.
    #[inline]
    pub fn ishr_bits(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Mirror image of `ishl_bits`: walk from the top, pulling the low
        // bits of the more significant limb into the vacated high bits.
        let lshift = LIMB_BITS - n;
        let rshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi >>= rshift;
            *xi |= prev << lshift;
            prev = tmp;
        }
        normalize(x);
    }

    /// Shift-right `n` digits inside a buffer.
    #[inline]
    pub fn ishr_limbs(x: &mut Vec<Limb>, n: usize) {
        if n >= x.len() {
            x.clear();
            x.push(0);
        } else {
            x.drain(..n);
        }
    }

    /// Shift-right buffer by n bits.
    #[inline]
    pub fn ishr(x: &mut Vec<Limb>, n: usize) {
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishr_limbs(x, div);
        ishr_bits(x, rem);
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros, keeping a
    /// single zero limb for zero itself.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.len() > 1 && x[x.len() - 1] == 0 {
            x.pop();
        }
        if x.is_empty() {
            x.push(0);
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            // Equal case.
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed, optimized for vectors.
    pub fn iadd_impl(x: &mut Vec<Limb>, y: &[Limb], xstart: usize) {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if y.len() > x.len() - xstart {
            x.resize(y.len() + xstart, 0);
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Limb::MAX + Limb::MAX. Add the previous carry,
            // and store the current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous bit.
        if carry {
            small::iadd_impl(x, 1, y.len() + xstart);
        }
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: &[Limb]) {
        iadd_impl(x, y, 0);
        small::normalize(x);
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint.
    pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) {
        // Basic underflow checks.
        debug_assert!(greater_equal(x, y));

        // Iteratively subtract elements of y from x.
        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            // Only one op of the two can underflow, since the first wrap
            // leaves a non-zero limb behind. Subtract the previous borrow,
            // and store the current borrow for the next.
            let mut tmp = scalar::isub(xi, *yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Slow, naive algorithm, using limb-bit bases and just shifting left for
    /// each iteration. Each iteration, of which there are `m` iterations,
    /// requires `n` multiplications, and `n` additions, or grade-school
    /// multiplication. The product never needs more than `x.len() + y.len()`
    /// limbs.
    pub fn long_mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        // Using the immutable value, multiply by all the scalars in y, using
        // the algorithm defined above. Handle the first case to avoid a
        // redundant addition, since we know y.len() >= 1.
        let mut z: Vec<Limb> = small::mul(x, y[0]);
        z.resize(x.len() + y.len(), 0);

        // Handle the iterative cases.
        for (i, &yi) in y[1..].iter().enumerate() {
            if yi == 0 {
                continue;
            }
            let zi: Vec<Limb> = small::mul(x, yi);
            iadd_impl(&mut z, &zi, i + 1);
        }

        small::normalize(&mut z);

        z
    }

    /// MulAssign bigint to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: &[Limb]) {
        if y.len() == 1 {
            small::imul(x, y[0]);
        } else if x.len() == 1 {
            let scalar = x[0];
            *x = small::mul(y, scalar);
        } else {
            *x = long_mul(x, y);
        }
    }

    // DIVISION

    /// Long division of `x` by a non-zero `y`, returning the
    /// (quotient, remainder) pair.
    ///
    /// Single-limb divisors walk the dividend once. Otherwise this is
    /// Knuth's Algorithm D (TAOCP vol. 2, 4.3.1): both operands are scaled
    /// so the top divisor limb has its high bit set, which bounds every
    /// trial quotient to at most two corrections.
    pub fn divrem(x: &[Limb], y: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        debug_assert!(!is_zero(y));

        if less(x, y) {
            return (vec![0], x.to_vec());
        }
        if y.len() == 1 {
            let mut q = x.to_vec();
            let r = small::idiv(&mut q, y[0]);
            return (q, vec![r]);
        }

        // D1. Normalize.
        let shift = small::leading_zeros(y);
        let mut v = y.to_vec();
        small::ishl_bits(&mut v, shift);
        let mut u = x.to_vec();
        small::ishl_bits(&mut u, shift);
        if u.len() == x.len() {
            u.push(0);
        }

        let n = v.len();
        let m = u.len() - n - 1;
        let mut q: Vec<Limb> = vec![0; m + 1];
        let base: Wide = 1 << LIMB_BITS;
        let vtop = v[n - 1] as Wide;
        let vnext = v[n - 2] as Wide;

        for j in (0..=m).rev() {
            // D3. Calculate the trial quotient.
            let num = ((u[j + n] as Wide) << LIMB_BITS) | u[j + n - 1] as Wide;
            let mut qhat = num / vtop;
            let mut rhat = num % vtop;
            while qhat >= base || qhat * vnext > ((rhat << LIMB_BITS) | u[j + n - 2] as Wide) {
                qhat -= 1;
                rhat += vtop;
                if rhat >= base {
                    break;
                }
            }

            // D4. Multiply and subtract.
            let mut carry: Limb = 0;
            let mut borrow = false;
            for i in 0..n {
                let (lo, hi) = scalar::mul(v[i], qhat as Limb, carry);
                carry = hi;
                let mut tmp = scalar::isub(&mut u[i + j], lo);
                if borrow {
                    tmp |= scalar::isub(&mut u[i + j], 1);
                }
                borrow = tmp;
            }
            let mut tmp = scalar::isub(&mut u[j + n], carry);
            if borrow {
                tmp |= scalar::isub(&mut u[j + n], 1);
            }

            // D5/D6. The trial quotient was one too large, add back.
            if tmp {
                qhat -= 1;
                let mut carry = false;
                for i in 0..n {
                    let mut tmp = scalar::iadd(&mut u[i + j], v[i]);
                    if carry {
                        tmp |= scalar::iadd(&mut u[i + j], 1);
                    }
                    carry = tmp;
                }
                u[j + n] = u[j + n].wrapping_add(carry as Limb);
            }

            q[j] = qhat as Limb;
        }

        // D8. Unnormalize the remainder.
        u.truncate(n);
        small::normalize(&mut u);
        small::ishr_bits(&mut u, shift);
        small::normalize(&mut q);

        (q, u)
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(limb_width_32)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        x.to_vec()
    }

    #[cfg(limb_width_64)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        let mut v = Vec::<Limb>::new();
        for xi in x.chunks(2) {
            match xi.len() {
                1 => v.push(xi[0] as u64),
                2 => v.push(((xi[1] as u64) << 32) | (xi[0] as u64)),
                _ => unreachable!(),
            }
        }
        small::normalize(&mut v);
        v
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = from_u32(&[1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Less);
        assert_eq!(large::compare(&x, &x), cmp::Ordering::Equal);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Greater);

        // Check asymmetric
        let x = from_u32(&[5, 1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);

        // Check when we use reverse ordering properly.
        let x = from_u32(&[5, 1, 9]);
        let y = from_u32(&[6, 2, 8]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);

        // Complex scenario, check it properly uses reverse ordering.
        let x = from_u32(&[0, 1, 9]);
        let y = from_u32(&[4294967295, 0, 9]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);
    }

    #[test]
    fn u128_test() {
        assert_eq!(from_u128(0), vec![0]);
        assert_eq!(to_u128(&from_u128(0)), Some(0));
        assert_eq!(to_u128(&from_u128(u128::MAX)), Some(u128::MAX));
        assert_eq!(from_u128(0xFFFF_FFFF_0000_0001), from_u32(&[1, 0xFFFF_FFFF]));
        assert_eq!(to_u128(&from_u32(&[0, 0, 0, 0, 1])), None);
    }

    #[test]
    fn bit_length_test() {
        let x = from_u32(&[0, 0, 0, 1]);
        assert_eq!(small::bit_length(&x), 97);

        let x = from_u32(&[0, 0, 0, 3]);
        assert_eq!(small::bit_length(&x), 98);

        let x = from_u32(&[1 << 31]);
        assert_eq!(small::bit_length(&x), 32);

        assert_eq!(small::bit_length(&[0]), 0);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single)
        let mut x = from_u32(&[4294967295]);
        small::iadd(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[12]));

        // Double carry, overflow
        let mut x = from_u128(0xFFFFFFFFFFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0, 1]));
    }

    #[test]
    fn isub_small_test() {
        let mut x = from_u32(&[4, 1]);
        small::isub(&mut x, 5);
        assert_eq!(x, from_u32(&[4294967295]));

        let mut x = from_u32(&[6, 0, 1]);
        small::isub(&mut x, 7);
        assert_eq!(x, from_u128(0xFFFFFFFFFFFFFFFF));

        let mut x = from_u32(&[7]);
        small::isub(&mut x, 7);
        assert_eq!(x, vec![0]);
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = from_u32(&[5]);
        small::imul(&mut x, 7);
        assert_eq!(x, from_u32(&[35]));

        // Overflow, 1 carry.
        let mut x = from_u32(&[0x33333334]);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // Overflow, 2 carries.
        let mut x = from_u128(0x3333333333333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 0, 1]));

        // Multiplying by zero collapses to the canonical zero.
        let mut x = from_u32(&[1, 2, 3]);
        small::imul(&mut x, 0);
        assert_eq!(x, vec![0]);
    }

    #[test]
    fn idiv_small_test() {
        let mut x = from_u32(&[4, 0, 1]);
        let rem = small::idiv(&mut x, 5);
        assert_eq!(x, from_u128(0x3333333333333334));
        assert_eq!(rem, 0);

        let mut x = from_u32(&[37]);
        let rem = small::idiv(&mut x, 5);
        assert_eq!(x, from_u32(&[7]));
        assert_eq!(rem, 2);
    }

    #[test]
    fn shl_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut big = from_u32(&[0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x44208100, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0xD2210408]));

        // 96-bits of previous pattern
        let mut big = from_u32(&[0x20020010, 0x8040100, 0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));

        // Zero stays canonical.
        let mut zero = vec![0];
        small::ishl(&mut zero, 200);
        assert_eq!(zero, vec![0]);
    }

    #[test]
    fn shr_test() {
        let mut big = from_u32(&[0, 0, 0xD2210408]);
        small::ishr(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0x44208100, 0x1A]));
        small::ishr(&mut big, 32);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        small::ishr(&mut big, 5);
        assert_eq!(big, from_u32(&[0xD2210408]));
        small::ishr(&mut big, 64);
        assert_eq!(big, vec![0]);
    }

    #[test]
    fn iadd_isub_large_test() {
        let mut x = from_u32(&[0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF]);
        large::iadd(&mut x, &from_u32(&[1]));
        assert_eq!(x, from_u32(&[0, 0, 0, 1]));
        large::isub(&mut x, &from_u32(&[1]));
        assert_eq!(x, from_u32(&[0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF]));
        let y = x.clone();
        large::isub(&mut x, &y);
        assert_eq!(x, vec![0]);
    }

    #[test]
    fn long_mul_test() {
        let x = from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]);
        let z = large::long_mul(&x, &x);
        assert_eq!(z, from_u32(&[1, 0, 0xFFFFFFFE, 0xFFFFFFFF]));

        let z = large::long_mul(&x, &[0]);
        assert_eq!(z, vec![0]);
    }

    #[test]
    fn divrem_test() {
        // (2^128 - 1) / (2^64 - 1) == 2^64 + 1, exactly.
        let x = from_u32(&[0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF]);
        let y = from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]);
        let (q, r) = large::divrem(&x, &y);
        assert_eq!(q, from_u32(&[1, 0, 1]));
        assert_eq!(r, vec![0]);

        // Dividend smaller than divisor.
        let (q, r) = large::divrem(&from_u32(&[5]), &from_u32(&[0, 0, 1]));
        assert_eq!(q, vec![0]);
        assert_eq!(r, from_u32(&[5]));

        // Reconstruct an uneven division through multiplication.
        let x = from_u32(&[0x89ABCDEF, 0x01234567, 0xDEADBEEF, 0x0BADF00D, 0x7]);
        let y = from_u32(&[0x12345678, 0x9ABCDEF0, 0x3]);
        let (q, r) = large::divrem(&x, &y);
        assert!(large::less(&r, &y));
        let mut back = large::long_mul(&q, &y);
        large::iadd(&mut back, &r);
        assert_eq!(back, x);
    }
}
