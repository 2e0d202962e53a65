//! Recoverable diagnostics returned by measurement setters.
//!
//! A warning never stops an operation. Setters return it so callers can
//! react, and the same condition is logged through `tracing` at `WARN`.

use std::fmt;

use ms_core::Cap;

#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The magnitude was forced to a bound.
    Capped(Cap),

    /// A unit change was rolled back; nothing was modified.
    UnsupportedConversion { from: String, to: String },

    /// A unit change was rolled back because the converted bounds were no
    /// longer ordered (a decreasing conversion).
    InvertedBounds { from: String, to: String },
}

impl From<Cap> for Warning {
    fn from(cap: Cap) -> Self {
        Self::Capped(cap)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capped(cap) => write!(f, "{cap}"),
            Self::UnsupportedConversion { from, to } => {
                write!(f, "Conversion from '{from}' to '{to}' is not supported")
            }
            Self::InvertedBounds { from, to } => {
                write!(f, "Converting bounds from '{from}' to '{to}' inverts them")
            }
        }
    }
}
