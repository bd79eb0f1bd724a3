//! # Rational numbers
//!
//! Primary way to do exact computation.
pub use big::Big as RationalBig;
pub use canonical::CanonicalCache;
pub use range::ClosedRationalRange;

mod big;
mod canonical;
mod macros;
mod parse;
mod range;

/// Raw access to a fraction as it is stored.
///
/// The stored pair need not be in lowest terms, and the denominator may be negative.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;
}
