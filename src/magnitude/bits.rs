//! Bitwise logic over limb buffers.
//!
//! Operands are unsigned bit patterns zero-extended to the longer operand.
//! `not` is a fixed-width complement over the operand's own bit length,
//! where zero counts as one bit wide.

use super::math::{small, Limb, LIMB_BITS};
use alloc::vec::Vec;

/// Bitwise AND of two normalized buffers.
pub(crate) fn and(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z: Vec<Limb> = x.iter().zip(y).map(|(xi, yi)| xi & yi).collect();
    small::normalize(&mut z);
    z
}

/// Bitwise OR of two normalized buffers.
pub(crate) fn or(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = long.to_vec();
    for (zi, si) in z.iter_mut().zip(short) {
        *zi |= si;
    }
    z
}

/// Bitwise XOR of two normalized buffers.
pub(crate) fn xor(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = long.to_vec();
    for (zi, si) in z.iter_mut().zip(short) {
        *zi ^= si;
    }
    small::normalize(&mut z);
    z
}

/// Complement every bit below the bit length of `x`.
pub(crate) fn not(x: &[Limb]) -> Vec<Limb> {
    let width = small::bit_length(x).max(1);
    let mut z: Vec<Limb> = x.iter().map(|xi| !xi).collect();

    // Clear the bits above the width in the top limb.
    let rem = width % LIMB_BITS;
    if rem != 0 {
        if let Some(top) = z.last_mut() {
            *top &= (1 << rem) - 1;
        }
    }
    small::normalize(&mut z);
    z
}

/// Number of set bits.
pub(crate) fn count_ones(x: &[Limb]) -> usize {
    x.iter().map(|xi| xi.count_ones() as usize).sum()
}
