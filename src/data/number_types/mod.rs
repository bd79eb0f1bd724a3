//! # Number types
//!
//! The integer primitive is `num::BigInt`; this module only adds what the rational type needs on
//! top of it.
pub mod integer;
pub mod rational;
