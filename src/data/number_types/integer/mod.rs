//! # Integer helpers
//!
//! Operations on the `BigInt` primitive that the rational type builds on.
use num::{BigInt, Signed, Zero};

/// Greatest common divisor of the absolute values of `left` and `right`.
///
/// Repeatedly replaces the larger of the two by its remainder modulo the smaller. Once one of
/// them reaches zero, the other one is the divisor, so their sum is returned.
///
/// The result is zero only if both arguments are zero.
pub fn gcd(left: &BigInt, right: &BigInt) -> BigInt {
    let mut left = left.abs();
    let mut right = right.abs();

    while !left.is_zero() && !right.is_zero() {
        if left > right {
            left %= &right;
        } else {
            right %= &left;
        }
    }

    left + right
}

/// Whether `text` matches `'-'? digit+`.
///
/// `BigInt`'s own parser is more lenient (it accepts a leading `+` and `_` separators), so literals
/// are checked against this grammar first.
pub fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|c| c.is_ascii_digit())
}
