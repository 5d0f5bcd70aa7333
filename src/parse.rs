//! Text to `Bigint`.

use crate::bigint::{Bigint, Sign};
use crate::error::{Error, Result};
use crate::magnitude::{digit_value, Magnitude, MAX_RADIX, MIN_RADIX};
use alloc::vec::Vec;
use core::str::FromStr;

/// Fail with `InvalidBase` unless `radix` lies in `2..=36`.
#[inline]
pub(crate) fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::invalid_base(radix))
    }
}

/// Split an optional leading `-` or `+` off the input.
fn parse_sign(bytes: &[u8]) -> (Sign, usize) {
    match bytes.first() {
        Some(b'-') => (Sign::Negative, 1),
        Some(b'+') => (Sign::Positive, 1),
        _ => (Sign::Positive, 0),
    }
}

/// Parse the digit run `input[start..]` in `radix`.
///
/// Errors point at the one-based column of the first byte that is not a
/// digit of `radix`, or one past the end of the input for an empty run.
fn parse_digits(input: &[u8], start: usize, radix: u32) -> Result<Magnitude> {
    let run = &input[start..];
    if run.is_empty() {
        return Err(Error::syntax(input.len() + 1));
    }

    let mut digits = Vec::with_capacity(run.len());
    for (index, &byte) in run.iter().enumerate() {
        match digit_value(byte) {
            Some(digit) if (digit as u32) < radix => digits.push(digit),
            _ => return Err(Error::syntax(start + index + 1)),
        }
    }
    Ok(Magnitude::from_digits(&digits, radix))
}

impl Bigint {
    /// Parse an integer literal.
    ///
    /// Accepts an optional `-` or `+`, then one of `0x`/`0X` followed by
    /// hexadecimal digits, `0b`/`0B` followed by binary digits, a `0`
    /// followed by octal digits, or plain decimal digits.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// assert_eq!(Bigint::parse("-0x1F").unwrap(), Bigint::from(-31));
    /// assert_eq!(Bigint::parse("0b101").unwrap(), Bigint::from(5));
    /// assert_eq!(Bigint::parse("017").unwrap(), Bigint::from(15));
    ///
    /// let err = Bigint::parse("12a4").unwrap_err();
    /// assert!(err.is_syntax());
    /// assert_eq!(err.column(), 3);
    /// ```
    pub fn parse(s: &str) -> Result<Bigint> {
        let bytes = s.as_bytes();
        let (sign, start) = parse_sign(bytes);

        let (radix, start) = match &bytes[start..] {
            [b'0', b'x' | b'X', ..] => (16, start + 2),
            [b'0', b'b' | b'B', ..] => (2, start + 2),
            [b'0', _, ..] => (8, start + 1),
            _ => (10, start),
        };

        let mag = parse_digits(bytes, start, radix)?;
        Ok(Bigint::from_parts(sign, mag))
    }

    /// Parse bare digits in `radix`, with an optional leading sign and no
    /// base prefix. Letters are case-insensitive.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// let x = Bigint::from_str_radix("-zz", 36).unwrap();
    /// assert_eq!(x, Bigint::from(-1295));
    /// assert!(Bigint::from_str_radix("10", 37).unwrap_err().is_argument());
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Bigint> {
        check_radix(radix)?;
        let bytes = s.as_bytes();
        let (sign, start) = parse_sign(bytes);
        let mag = parse_digits(bytes, start, radix)?;
        Ok(Bigint::from_parts(sign, mag))
    }
}

impl FromStr for Bigint {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Bigint> {
        Bigint::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn sign_prefix() {
        assert_eq!(parse_sign(b"-1"), (Sign::Negative, 1));
        assert_eq!(parse_sign(b"+1"), (Sign::Positive, 1));
        assert_eq!(parse_sign(b"1"), (Sign::Positive, 0));
        assert_eq!(parse_sign(b""), (Sign::Positive, 0));
    }

    #[test]
    fn digit_columns() {
        let err = parse_digits(b"-12z", 1, 10).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidFormat);
        assert_eq!(err.column(), 4);

        let err = parse_digits(b"0x", 2, 16).unwrap_err();
        assert_eq!(err.column(), 3);

        let err = parse_digits(b"012", 1, 2).unwrap_err();
        assert_eq!(err.column(), 3);
    }

    #[test]
    fn radix_bounds() {
        assert!(check_radix(2).is_ok());
        assert!(check_radix(36).is_ok());
        assert_eq!(*check_radix(1).unwrap_err().code(), ErrorCode::InvalidBase(1));
        assert_eq!(*check_radix(37).unwrap_err().code(), ErrorCode::InvalidBase(37));
    }

    #[test]
    fn zero_forms() {
        for text in ["0", "-0", "+0", "00", "0x0", "0b000", "-0x00"] {
            let value = Bigint::parse(text).unwrap();
            assert_eq!(value.sign(), Sign::Zero, "{}", text);
        }
    }
}
