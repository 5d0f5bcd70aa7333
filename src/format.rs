//! `Bigint` to text.

use crate::bigint::{Bigint, Sign};
use crate::error::{Error, Result};
use crate::magnitude::digit_char;
use crate::parse::check_radix;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Binary, Debug, Display, LowerHex, Octal, UpperHex};
use core::str;

impl Bigint {
    /// Format the value in `radix`, with `-` for negative values and
    /// letters for digits of ten and above.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// let x = Bigint::from(-255);
    /// assert_eq!(x.to_string_radix(16, false).unwrap(), "-ff");
    /// assert_eq!(x.to_string_radix(16, true).unwrap(), "-FF");
    /// assert_eq!(x.to_string_radix(2, false).unwrap(), "-11111111");
    /// assert!(x.to_string_radix(1, false).is_err());
    /// ```
    pub fn to_string_radix(&self, radix: u32, uppercase: bool) -> Result<String> {
        check_radix(radix)?;
        let digits = self.digit_bytes(radix, uppercase);
        let mut out = String::with_capacity(digits.len() + 1);
        if self.sign == Sign::Negative {
            out.push('-');
        }
        out.push_str(ascii(&digits));
        Ok(out)
    }

    /// Format the value according to a format specifier.
    ///
    /// An empty specifier selects base 10, `x` and `X` select lower and
    /// upper case hexadecimal, and `b<N>` selects base `N`.
    ///
    /// ```
    /// use bigint::Bigint;
    ///
    /// let x = Bigint::from(3054);
    /// assert_eq!(x.format_spec("").unwrap(), "3054");
    /// assert_eq!(x.format_spec("x").unwrap(), "bee");
    /// assert_eq!(x.format_spec("X").unwrap(), "BEE");
    /// assert_eq!(x.format_spec("b36").unwrap(), "2cu");
    /// assert!(x.format_spec("b40").unwrap_err().is_argument());
    /// assert!(x.format_spec("q").unwrap_err().is_syntax());
    /// ```
    pub fn format_spec(&self, spec: &str) -> Result<String> {
        let (radix, uppercase) = parse_spec(spec)?;
        self.to_string_radix(radix, uppercase)
    }

    /// ASCII digits of the magnitude, most significant first.
    fn digit_bytes(&self, radix: u32, uppercase: bool) -> Vec<u8> {
        let mut digits = self.mag.to_digits(radix);
        for digit in &mut digits {
            *digit = digit_char(*digit, uppercase);
        }
        digits
    }
}

/// Decode a format specifier into `(radix, uppercase)`.
fn parse_spec(spec: &str) -> Result<(u32, bool)> {
    match spec.as_bytes() {
        [] => Ok((10, false)),
        [b'x'] => Ok((16, false)),
        [b'X'] => Ok((16, true)),
        [b'b', rest @ ..] if !rest.is_empty() => {
            let mut radix: u32 = 0;
            for (index, &byte) in rest.iter().enumerate() {
                if !byte.is_ascii_digit() {
                    return Err(Error::syntax(index + 2));
                }
                // Saturate, anything this large is rejected below anyway.
                radix = radix.saturating_mul(10).saturating_add((byte - b'0') as u32);
            }
            check_radix(radix)?;
            Ok((radix, false))
        }
        [b'b'] => Err(Error::syntax(2)),
        _ => Err(Error::syntax(1)),
    }
}

fn ascii(digits: &[u8]) -> &str {
    // Digits come from `digit_char`, which only yields ASCII.
    unsafe { str::from_utf8_unchecked(digits) }
}

impl Display for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nonnegative = self.sign != Sign::Negative;
        match self.mag.to_u128() {
            Some(small) => {
                let mut buffer = itoa::Buffer::new();
                f.pad_integral(nonnegative, "", buffer.format(small))
            }
            None => f.pad_integral(nonnegative, "", ascii(&self.digit_bytes(10, false))),
        }
    }
}

macro_rules! radix_fmt {
    ($($trait:ident, $radix:expr, $uppercase:expr, $prefix:expr;)*) => {
        $(
            impl $trait for Bigint {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    let digits = self.digit_bytes($radix, $uppercase);
                    f.pad_integral(self.sign != Sign::Negative, $prefix, ascii(&digits))
                }
            }
        )*
    };
}

radix_fmt! {
    LowerHex, 16, false, "0x";
    UpperHex, 16, true, "0x";
    Octal, 8, false, "0o";
    Binary, 2, false, "0b";
}

impl Debug for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bigint({})", self)
    }
}
