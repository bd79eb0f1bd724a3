//! # Closed ranges
use std::ops::RangeInclusive;

use crate::data::number_types::rational::RationalBig;

/// Inclusive interval `[start, end]`.
///
/// Nothing is checked at construction: a range with `start > end` can be created, it is empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClosedRationalRange {
    start: RationalBig,
    end: RationalBig,
}

impl ClosedRationalRange {
    pub fn new(start: RationalBig, end: RationalBig) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &RationalBig {
        &self.start
    }

    pub fn end(&self) -> &RationalBig {
        &self.end
    }

    pub fn contains(&self, value: &RationalBig) -> bool {
        &self.start <= value && value <= &self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl From<RangeInclusive<RationalBig>> for ClosedRationalRange {
    fn from(range: RangeInclusive<RationalBig>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl RationalBig {
    /// The range from this value up to and including `end`.
    pub fn to_range(&self, end: &Self) -> ClosedRationalRange {
        ClosedRationalRange::new(self.clone(), end.clone())
    }
}
