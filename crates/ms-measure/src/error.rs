//! Error types for measurement operations.

use std::fmt;

use ms_core::{BoundsError, ConversionError, CoreError};
use thiserror::Error;

/// Result type for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Operation that combines two measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Divide,
    Compare,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "added"),
            Self::Subtract => write!(f, "subtracted"),
            Self::Divide => write!(f, "divided"),
            Self::Compare => write!(f, "compared"),
        }
    }
}

/// Errors that halt a measurement operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// Malformed bounds specification.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// Conversion strategy could not relate the two units.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Two measurements could not be reconciled into one unit.
    #[error(
        "Measurement with two different unrelated units can't be {op} ('{left}' and '{right}')"
    )]
    IncompatibleUnits {
        op: Operation,
        left: String,
        right: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incompatible_message_names_operation() {
        let err = MeasureError::IncompatibleUnits {
            op: Operation::Add,
            left: "m".into(),
            right: "kg".into(),
        };
        assert!(err.to_string().contains("can't be added"));

        let err = MeasureError::IncompatibleUnits {
            op: Operation::Subtract,
            left: "m".into(),
            right: "kg".into(),
        };
        assert!(err.to_string().contains("can't be subtracted"));
    }

    #[test]
    fn wrapped_errors_keep_message() {
        let err: MeasureError = BoundsError::Arity { len: 3 }.into();
        assert!(err.to_string().contains("3 values"));
    }
}
