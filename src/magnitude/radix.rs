//! Conversion between magnitudes and base-N digit strings.
//!
//! Parsing, formatting, `Debug` and the format-specifier path all go
//! through these two routines. Digits are processed in chunks of the
//! largest power of the radix that fits in a single limb, so the carry
//! logic lives only in the `small` limb operations.

use super::math::{is_zero, small, Limb};
use alloc::vec;
use alloc::vec::Vec;

/// Smallest supported radix.
pub(crate) const MIN_RADIX: u32 = 2;

/// Largest supported radix, digits `0-9` then `a-z`.
pub(crate) const MAX_RADIX: u32 = 36;

/// Largest power of `radix` that fits in a limb, with its exponent.
fn big_base(radix: u32) -> (Limb, usize) {
    let radix = radix as Limb;
    let mut base = radix;
    let mut exponent = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        exponent += 1;
    }
    (base, exponent)
}

/// Convert a normalized magnitude into digit values, most significant
/// digit first. Zero converts to a single `0` digit.
pub(crate) fn to_radix(x: &[Limb], radix: u32) -> Vec<u8> {
    debug_assert!((MIN_RADIX..=MAX_RADIX).contains(&radix));
    if is_zero(x) {
        return vec![0];
    }

    let (base, exponent) = big_base(radix);
    let estimate = small::bit_length(x) / radix.ilog2() as usize + 1;
    let mut digits = Vec::with_capacity(estimate);
    let mut x = x.to_vec();
    while !is_zero(&x) {
        let mut chunk = small::idiv(&mut x, base);
        for _ in 0..exponent {
            digits.push((chunk % radix as Limb) as u8);
            chunk /= radix as Limb;
        }
    }

    // The last chunk was padded out to a full exponent worth of digits.
    while digits.len() > 1 && digits[digits.len() - 1] == 0 {
        digits.pop();
    }
    digits.reverse();
    digits
}

/// Build a normalized magnitude from digit values, most significant digit
/// first. Every digit must already be below `radix`.
pub(crate) fn from_radix(digits: &[u8], radix: u32) -> Vec<Limb> {
    debug_assert!((MIN_RADIX..=MAX_RADIX).contains(&radix));
    debug_assert!(digits.iter().all(|&d| (d as u32) < radix));

    let (_, exponent) = big_base(radix);
    let mut x = vec![0];
    for chunk in digits.chunks(exponent) {
        let mut scale: Limb = 1;
        let mut value: Limb = 0;
        for &digit in chunk {
            value = value * radix as Limb + digit as Limb;
            scale *= radix as Limb;
        }
        small::imul(&mut x, scale);
        small::iadd(&mut x, value);
    }
    x
}

/// Value of an ASCII digit in any radix up to 36, case-insensitive.
#[inline]
pub(crate) fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' => Some(c - b'a' + 10),
        b'A'..=b'Z' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// ASCII character for a digit value below 36.
#[inline]
pub(crate) fn digit_char(d: u8, uppercase: bool) -> u8 {
    match d {
        0..=9 => b'0' + d,
        _ if uppercase => b'A' + d - 10,
        _ => b'a' + d - 10,
    }
}
