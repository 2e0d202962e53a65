use thiserror::Error;

use crate::numeric::Real;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: Real },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

/// Coarse classification of a bounds validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsErrorKind {
    /// Input is not a sequence of optional numbers.
    Type,
    /// Sequence does not hold exactly two values.
    Arity,
    /// Lower bound is not strictly below the upper bound.
    Range,
}

/// Errors raised while validating a bounds specification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Bounds should be a list or tuple of two values [lower, upper]: {what}")]
    Type { what: &'static str },

    #[error("Only a two valued list/tuple is allowed for bounds, got {len} values")]
    Arity { len: usize },

    #[error("Upper bound should be higher than lower bound (lower={lower}, upper={upper})")]
    Range { lower: Real, upper: Real },
}

impl BoundsError {
    pub fn kind(&self) -> BoundsErrorKind {
        match self {
            Self::Type { .. } => BoundsErrorKind::Type,
            Self::Arity { .. } => BoundsErrorKind::Arity,
            Self::Range { .. } => BoundsErrorKind::Range,
        }
    }
}

/// Result type for unit conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors reported by a [`UnitConversion`](crate::UnitConversion) strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// No known relationship between the two unit labels.
    #[error("Conversion from '{from}' to '{to}' is not supported")]
    Unsupported { from: String, to: String },
}

impl ConversionError {
    pub fn unsupported(from: &str, to: &str) -> Self {
        Self::Unsupported {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
