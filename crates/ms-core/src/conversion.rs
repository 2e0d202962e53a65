//! The unit conversion capability consumed by measurements.
//!
//! A measurement never knows how to relate two unit labels on its own; it
//! borrows a [`UnitConversion`] strategy and asks it. Strategies are only
//! ever queried, so implementations are free to be stateless tables or
//! wrappers around a larger units library.

use crate::error::{ConversionError, ConversionResult};
use crate::numeric::Real;

/// Strategy converting a magnitude between two unit labels.
pub trait UnitConversion {
    /// Identifier used for debugging and for strategy equality.
    fn name(&self) -> &str;

    /// Convert `value` expressed in `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Unsupported`] when the pair has no known
    /// relationship.
    fn convert(&self, value: Real, from: &str, to: &str) -> ConversionResult<Real>;

    /// Convert an optional value; an absent value stays absent without
    /// consulting the strategy.
    fn convert_opt(
        &self,
        value: Option<Real>,
        from: &str,
        to: &str,
    ) -> ConversionResult<Option<Real>> {
        value.map(|v| self.convert(v, from, to)).transpose()
    }

    /// Whether two strategies convert identically.
    ///
    /// Default compares [`name`](Self::name).
    fn same_as(&self, other: &dyn UnitConversion) -> bool {
        self.name() == other.name()
    }
}

/// Strategy that only knows the identity conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityOnly;

impl UnitConversion for IdentityOnly {
    fn name(&self) -> &str {
        "identity"
    }

    fn convert(&self, value: Real, from: &str, to: &str) -> ConversionResult<Real> {
        if from == to {
            Ok(value)
        } else {
            Err(ConversionError::unsupported(from, to))
        }
    }
}

/// Compare two optional strategies: both absent, or both present and
/// [`same_as`](UnitConversion::same_as) each other.
pub fn same_strategy(a: Option<&dyn UnitConversion>, b: Option<&dyn UnitConversion>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_as(b),
        _ => false,
    }
}
