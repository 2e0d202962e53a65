use ms_core::{ConversionError, ConversionResult, Real, UnitConversion};
use tracing::debug;

use crate::catalog::{self, UNITS};
use crate::dimension::Dimension;

/// Conversion strategy over the built-in SI/imperial unit catalog.
///
/// Converts between any two labels of the same [`Dimension`] by going
/// through the SI base unit. Unknown labels and cross-dimension pairs are
/// reported as [`ConversionError::Unsupported`].
///
/// # Example
///
/// ```
/// use ms_core::UnitConversion;
/// use ms_units::StandardUnits;
///
/// let units = StandardUnits::new();
/// let f = units.convert(100.0, "C", "F").unwrap();
/// assert!((f - 212.0).abs() < 1e-9);
/// assert!(units.convert(1.0, "m", "kg").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardUnits;

impl StandardUnits {
    pub fn new() -> Self {
        Self
    }

    /// Dimension of `label`, if it is in the catalog.
    pub fn dimension_of(&self, label: &str) -> Option<Dimension> {
        catalog::lookup(label).map(|def| def.dimension)
    }

    /// Whether a value can be converted from `a` to `b`.
    pub fn compatible(&self, a: &str, b: &str) -> bool {
        a == b
            || matches!(
                (self.dimension_of(a), self.dimension_of(b)),
                (Some(da), Some(db)) if da == db
            )
    }

    /// All labels of one dimension, in catalog order.
    pub fn labels(&self, dimension: Dimension) -> impl Iterator<Item = &'static str> {
        UNITS
            .iter()
            .filter(move |def| def.dimension == dimension)
            .map(|def| def.label)
    }
}

impl UnitConversion for StandardUnits {
    fn name(&self) -> &str {
        "standard"
    }

    fn convert(&self, value: Real, from: &str, to: &str) -> ConversionResult<Real> {
        if from == to {
            return Ok(value);
        }

        match (catalog::lookup(from), catalog::lookup(to)) {
            (Some(src), Some(dst)) if src.dimension == dst.dimension => {
                Ok(dst.from_base(src.to_base(value)))
            }
            (Some(src), Some(dst)) => {
                debug!(
                    from,
                    to,
                    from_dim = %src.dimension,
                    to_dim = %dst.dimension,
                    "dimension mismatch"
                );
                Err(ConversionError::unsupported(from, to))
            }
            _ => {
                debug!(from, to, "unknown unit label");
                Err(ConversionError::unsupported(from, to))
            }
        }
    }
}
