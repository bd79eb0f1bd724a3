//! # Literals
//!
//! Shorthand for writing rational constants, mostly in tests.

/// Shorthand for creating a rational number in tests.
///
/// `RB!(n)` is `n/1`, `RB!(n, d)` is `n/d` as stored, without reduction.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::RationalBig::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::RationalBig::from_integer_ratio($numerator, $denominator)
            .expect("denominator should be nonzero")
    };
}
