//! # Canonical form
//!
//! The unique representative of a value: numerator and denominator coprime, denominator positive
//! and zero stored as `0/1`.
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::trace;
use num::{BigInt, One, Signed, Zero};

use crate::data::number_types::integer::gcd;
use crate::data::number_types::rational::RationalBig;

impl RationalBig {
    /// Reduce to lowest terms with a positive denominator.
    pub fn canonicalize(&self) -> Self {
        // Never zero, as the denominator isn't
        let divisor = gcd(&self.numerator, &self.denominator);
        let mut numerator = &self.numerator / &divisor;
        let mut denominator = &self.denominator / &divisor;

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        if numerator.is_zero() {
            denominator = BigInt::one();
        }

        Self { numerator, denominator }
    }

    /// Whether the stored pair already is the canonical representative.
    pub fn is_canonical(&self) -> bool {
        if self.numerator.is_zero() {
            self.denominator.is_one()
        } else {
            self.denominator.is_positive() && gcd(&self.numerator, &self.denominator).is_one()
        }
    }
}

/// Memoized canonicalization.
///
/// Entries are keyed by the stored `(numerator, denominator)` pair, so each distinct pair is
/// reduced at most once. The key can't be the rational itself, because its `Hash` and `Eq` are
/// those of the canonical form.
#[derive(Debug, Default)]
pub struct CanonicalCache {
    entries: Mutex<HashMap<(BigInt, BigInt), RationalBig>>,
}

impl CanonicalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canonicalize(&self, value: &RationalBig) -> RationalBig {
        let key = (value.numerator.clone(), value.denominator.clone());
        // Entries are only ever inserted whole, so a poisoned map is still consistent
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries
            .entry(key)
            .or_insert_with(|| {
                trace!("Canonical cache miss for {}/{}", value.numerator, value.denominator);
                value.canonicalize()
            })
            .clone()
    }

    /// Number of distinct stored pairs seen.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
