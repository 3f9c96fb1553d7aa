//! Functions to construct [`Integer`]s and [`Float`]s from various types.

use rug::{Assign, Float, Integer};

/// The number of bits of precision used by [`Float`]s, matching a native 64-bit float.
///
/// Integers have no such limit.
pub const PRECISION: u32 = 53;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}
