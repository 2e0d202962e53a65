//! Physical dimension families known to the standard unit catalog.

use std::fmt;

/// Dimension/quantity family of a unit label.
///
/// Two labels convert into each other only when they share a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Length (base: meter)
    Length,
    /// Mass (base: kilogram)
    Mass,
    /// Absolute temperature (base: Kelvin)
    Temperature,
    /// Absolute pressure (base: Pa)
    Pressure,
    /// Time (base: second)
    Time,
    /// Dimensionless ratio (base: plain ratio, 1.0 = 100%)
    Ratio,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "Length"),
            Self::Mass => write!(f, "Mass"),
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Time => write!(f, "Time"),
            Self::Ratio => write!(f, "Ratio"),
        }
    }
}
