//! # Rationals
//!
//! Exact rational arithmetic over arbitrary precision integers.
//!
//! Values are kept in the representation they were created with; reduction to lowest terms
//! happens only when a canonical view is needed: comparison, equality, hashing and formatting.
pub use crate::data::number_types::rational::{CanonicalCache, ClosedRationalRange, Rational, RationalBig};
pub use crate::error::{ParseErrorKind, RationalError};

pub mod data;
pub mod error;
