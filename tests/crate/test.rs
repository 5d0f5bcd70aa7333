#![no_std]

pub use bigint::*;
