//! # Text form
//!
//! Input is `integer ('/' integer)?` with `integer` being `'-'? digit+`. Output is always the
//! canonical form: sign on the numerator only, no denominator for integers and `0` for zero.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use num::{BigInt, One};

use crate::data::number_types::integer::is_integer_literal;
use crate::data::number_types::rational::RationalBig;
use crate::error::{ParseErrorKind, RationalError};

impl FromStr for RationalBig {
    type Err = RationalError;

    /// Parse without reducing; `"2/4"` is stored as `2/4`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = match text.split('/').collect_vec().as_slice() {
            [numerator] => (parse_integer(numerator)?, BigInt::one()),
            [numerator, denominator] => (parse_integer(numerator)?, parse_integer(denominator)?),
            _ => {
                debug!("Rejected rational literal {:?}: more than one '/'", text);
                return Err(RationalError::parse(text, ParseErrorKind::TooManySlashes));
            }
        };

        Self::new(numerator, denominator)
    }
}

fn parse_integer(segment: &str) -> Result<BigInt, RationalError> {
    let kind = if segment.is_empty() {
        ParseErrorKind::EmptySegment
    } else if !is_integer_literal(segment) {
        ParseErrorKind::InvalidDigit
    } else {
        return segment
            .parse()
            .map_err(|_| RationalError::parse(segment, ParseErrorKind::InvalidDigit));
    };

    debug!("Rejected integer segment {:?}: {}", segment, kind);
    Err(RationalError::parse(segment, kind))
}

impl fmt::Display for RationalBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.canonicalize();
        if canonical.denominator.is_one() {
            // Includes zero, which is canonically `0/1`
            write!(f, "{}", canonical.numerator)
        } else {
            write!(f, "{}/{}", canonical.numerator, canonical.denominator)
        }
    }
}
