//! # Bigint
//!
//! Arbitrary-precision signed integers with exact arithmetic.
//!
//! A [`Bigint`] is a [`Sign`] paired with a normalized magnitude of machine
//! words. It supports the full set of arithmetic, bitwise and comparison
//! operators, parsing and formatting in any base from 2 to 36,
//! exponentiation, integer square roots, gcd/lcm and uniform random
//! sampling.
//!
//! ```
//! use bigint::Bigint;
//!
//! # fn main() -> bigint::Result<()> {
//! let p: Bigint = "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF".parse()?;
//! let q = &p + 1u32;
//!
//! assert_eq!(q, Bigint::one() << 128u32);
//! assert_eq!(q.to_string(), "340282366920938463463374607431768211456");
//! assert_eq!(q.format_spec("b16")?, "100000000000000000000000000000000");
//! # Ok(())
//! # }
//! ```
//!
//! # Parsing
//!
//! [`Bigint::parse`] and the `FromStr` impl accept an optional sign
//! followed by a base-prefixed literal: `0x` for hexadecimal, `0b` for
//! binary, a leading `0` for octal, or plain decimal digits. Malformed
//! input is reported as an [`Error`] carrying the column of the offending
//! character.
//!
//! ```
//! use bigint::{Bigint, ErrorCode};
//!
//! let err = "-0x12g4".parse::<Bigint>().unwrap_err();
//! assert_eq!(*err.code(), ErrorCode::InvalidFormat);
//! assert_eq!(err.column(), 6);
//! ```
//!
//! # Division
//!
//! Division truncates toward zero and the remainder takes the sign of the
//! dividend. The `/` and `%` operators panic on a zero divisor, the same
//! way primitive integers do; use [`Bigint::try_div_rem`] or
//! [`Bigint::checked_div`] to handle it instead.
//!
//! # Features
//!
//! - `std` (default) implements `std::error::Error` for [`Error`].
//! - `alloc` builds the crate on `no_std` targets with an allocator.
//! - `serde` adds `Serialize` and `Deserialize` for [`Bigint`].

#![doc(html_root_url = "https://docs.rs/bigint/0.3.0")]
// Ignored clippy lints
#![allow(
    clippy::many_single_char_names,
    clippy::needless_range_loop,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

#[doc(inline)]
pub use crate::bigint::{Bigint, Sign};
#[doc(inline)]
pub use crate::convert::FromBigint;
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::random::{random_range, RandomBigint, UniformBigint};

mod arith;
mod bigint;
mod bitwise;
mod convert;
mod derived;
pub mod error;
mod features_check;
mod format;
mod iter;
mod magnitude;
mod num;
mod ops;
mod parse;
mod random;
#[cfg(feature = "serde")]
mod ser;
