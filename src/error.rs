//! # Errors
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    // Zero denominator at construction, or a divisor with a zero numerator
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot parse rational from {segment:?}: {kind}")]
    Parse {
        /// The offending part of the input.
        segment: String,
        kind: ParseErrorKind,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("more than one '/'")]
    TooManySlashes,

    #[error("empty numerator or denominator")]
    EmptySegment,

    #[error("expected an optional '-' followed by decimal digits")]
    InvalidDigit,
}

impl RationalError {
    pub(crate) fn parse(segment: &str, kind: ParseErrorKind) -> Self {
        Self::Parse {
            segment: segment.to_owned(),
            kind,
        }
    }
}
