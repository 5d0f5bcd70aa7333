//! Serde support for `Bigint`.
//!
//! Values serialize as their decimal string, which every format can carry
//! without loss. Deserialization accepts that string form, any literal
//! [`Bigint::parse`] accepts, or a native integer.

use crate::bigint::Bigint;
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

impl Serialize for Bigint {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bigint {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Bigint, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigintVisitor;

        impl<'de> Visitor<'de> for BigintVisitor {
            type Value = Bigint;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<Bigint, E> {
                Ok(Bigint::from(value))
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<Bigint, E> {
                Ok(Bigint::from(value))
            }

            #[inline]
            fn visit_i128<E>(self, value: i128) -> Result<Bigint, E> {
                Ok(Bigint::from(value))
            }

            #[inline]
            fn visit_u128<E>(self, value: u128) -> Result<Bigint, E> {
                Ok(Bigint::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Bigint, E>
            where
                E: de::Error,
            {
                Bigint::parse(value).map_err(|_| {
                    de::Error::invalid_value(de::Unexpected::Str(value), &self)
                })
            }
        }

        deserializer.deserialize_any(BigintVisitor)
    }
}
