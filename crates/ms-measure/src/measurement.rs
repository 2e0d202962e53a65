//! The measurement value type: magnitude, unit, bounds and a borrowed
//! conversion strategy.

use std::fmt;

use ms_core::{
    Bounds, BoundsSpec, ConversionError, ConversionResult, Real, UnitConversion, clamp,
    parse_bounds,
};
use tracing::warn;

use crate::error::MeasureResult;
use crate::warning::Warning;

/// A magnitude expressed in a unit, optionally kept within inclusive bounds.
///
/// The magnitude and bounds are always expressed in the current unit. The
/// conversion strategy is borrowed for `'c`; the measurement only queries it.
///
/// Construction does not clamp the magnitude, and [`set_bounds`] does not
/// re-clamp it either. Only [`set_magnitude`] and the rounding operations
/// force the magnitude into range.
///
/// [`set_bounds`]: Measurement::set_bounds
/// [`set_magnitude`]: Measurement::set_magnitude
#[derive(Clone)]
pub struct Measurement<'c> {
    pub(crate) magnitude: Real,
    pub(crate) unit: String,
    pub(crate) bounds: Bounds,
    pub(crate) converter: Option<&'c dyn UnitConversion>,
}

impl<'c> Measurement<'c> {
    /// Create an unbounded measurement without a conversion strategy.
    pub fn new(magnitude: Real, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
            bounds: Bounds::UNBOUNDED,
            converter: None,
        }
    }

    /// Attach bounds. The current magnitude is left as is.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Attach the conversion strategy used for every unit change.
    pub fn with_converter(mut self, converter: &'c dyn UnitConversion) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn magnitude(&self) -> Real {
        self.magnitude
    }

    /// Store `value`, capped at the current bounds.
    ///
    /// Returns the cap as a [`Warning`] when one was applied.
    pub fn set_magnitude(&mut self, value: Real) -> Option<Warning> {
        let clamped = self.bounds.clamp(value);
        self.magnitude = clamped.value;
        clamped.cap.map(Warning::from)
    }

    /// Current unit label; empty when no unit was set.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Re-express the magnitude and bounds in `unit`.
    ///
    /// All three values are converted before anything is stored, so the
    /// change is all-or-nothing. Nothing changes and a warning is returned
    /// when:
    /// - any conversion fails ([`Warning::UnsupportedConversion`])
    /// - the converted bounds are no longer ordered, as with a decreasing
    ///   conversion ([`Warning::InvertedBounds`])
    pub fn set_unit(&mut self, unit: impl Into<String>) -> Option<Warning> {
        let unit = unit.into();
        let Ok((lower, upper, magnitude)) = self.converted_parts(&unit) else {
            warn!(from = %self.unit, to = %unit, "Conversion is not supported, unit unchanged");
            return Some(Warning::UnsupportedConversion {
                from: self.unit.clone(),
                to: unit,
            });
        };

        match Bounds::new(lower, upper) {
            Ok(bounds) => {
                self.bounds = bounds;
                self.magnitude = magnitude;
                self.unit = unit;
                None
            }
            Err(err) => {
                warn!(
                    from = %self.unit,
                    to = %unit,
                    %err,
                    "Converted bounds are inverted, unit unchanged"
                );
                Some(Warning::InvertedBounds {
                    from: self.unit.clone(),
                    to: unit,
                })
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replace the bounds after validating `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Bounds`](crate::MeasureError::Bounds) when the
    /// specification is malformed; the stored bounds are then unchanged.
    pub fn set_bounds<S: BoundsSpec + ?Sized>(&mut self, spec: &S) -> MeasureResult<()> {
        self.bounds = parse_bounds(spec)?;
        Ok(())
    }

    pub fn converter(&self) -> Option<&'c dyn UnitConversion> {
        self.converter
    }

    /// Magnitude expressed in `target`, capped at the converted bounds.
    ///
    /// Does not modify the measurement.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Conversion`](crate::MeasureError::Conversion)
    /// when the strategy cannot convert to `target`.
    pub fn convert(&self, target: &str) -> MeasureResult<Real> {
        let (lower, upper, value) = self.converted_parts(target)?;
        Ok(clamp(value, lower, upper))
    }

    /// Convert lower bound, upper bound and magnitude, in that order.
    fn converted_parts(&self, to: &str) -> ConversionResult<(Option<Real>, Option<Real>, Real)> {
        let lower = self.convert_value(self.bounds.lower(), to)?;
        let upper = self.convert_value(self.bounds.upper(), to)?;
        let magnitude = self.magnitude_in(to)?;
        Ok((lower, upper, magnitude))
    }

    /// Magnitude expressed in `to`, not capped at any bounds.
    pub(crate) fn magnitude_in(&self, to: &str) -> ConversionResult<Real> {
        let magnitude = self.convert_value(Some(self.magnitude), to)?;
        // Some in, Some out.
        Ok(magnitude.unwrap_or(self.magnitude))
    }

    // Identical labels never reach the strategy; without a strategy any
    // other pair is unsupported.
    fn convert_value(&self, value: Option<Real>, to: &str) -> ConversionResult<Option<Real>> {
        if self.unit == to {
            return Ok(value);
        }
        match self.converter {
            Some(converter) => converter.convert_opt(value, &self.unit, to),
            None if value.is_none() => Ok(None),
            None => Err(ConversionError::unsupported(&self.unit, to)),
        }
    }

    /// Same unit, bounds and strategy with a new magnitude, stored as is.
    pub(crate) fn with_magnitude(&self, magnitude: Real) -> Self {
        Self {
            magnitude,
            unit: self.unit.clone(),
            bounds: self.bounds,
            converter: self.converter,
        }
    }
}

impl Default for Measurement<'_> {
    fn default() -> Self {
        Self::new(0.0, "")
    }
}

impl fmt::Debug for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measurement")
            .field("magnitude", &self.magnitude)
            .field("unit", &self.unit)
            .field("bounds", &self.bounds)
            .field("converter", &self.converter.map(|c| c.name()))
            .finish()
    }
}

impl fmt::Display for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::{BoundsError, Cap, IdentityOnly};

    use crate::MeasureError;

    /// Maps "C" onto a reversed scale, so converted bounds come out inverted.
    struct Negate;

    impl UnitConversion for Negate {
        fn name(&self) -> &str {
            "negate"
        }

        fn convert(&self, value: Real, from: &str, to: &str) -> ConversionResult<Real> {
            match (from, to) {
                ("C", "negC") | ("negC", "C") => Ok(-value),
                _ if from == to => Ok(value),
                _ => Err(ConversionError::unsupported(from, to)),
            }
        }
    }

    fn bounded(lower: Real, upper: Real) -> Bounds {
        Bounds::new(Some(lower), Some(upper)).unwrap()
    }

    #[test]
    fn construction_does_not_clamp() {
        let m = Measurement::new(500.0, "C").with_bounds(bounded(0.0, 100.0));
        assert_eq!(m.magnitude(), 500.0);
    }

    #[test]
    fn default_is_zero_without_unit() {
        let m = Measurement::default();
        assert_eq!(m.magnitude(), 0.0);
        assert_eq!(m.unit(), "");
        assert!(m.bounds().is_unbounded());
        assert!(m.converter().is_none());
    }

    #[test]
    fn set_magnitude_caps_at_upper() {
        let mut m = Measurement::new(10.0, "C").with_bounds(bounded(0.0, 100.0));
        let warning = m.set_magnitude(150.0);
        assert_eq!(m.magnitude(), 100.0);
        assert_eq!(warning, Some(Warning::Capped(Cap::Upper(100.0))));
    }

    #[test]
    fn set_magnitude_in_range_has_no_warning() {
        let mut m = Measurement::new(10.0, "C").with_bounds(bounded(0.0, 100.0));
        assert_eq!(m.set_magnitude(42.0), None);
        assert_eq!(m.magnitude(), 42.0);
    }

    #[test]
    fn set_bounds_rejects_and_keeps_previous() {
        let mut m = Measurement::new(10.0, "C").with_bounds(bounded(0.0, 100.0));
        let err = m.set_bounds(&(5.0, 1.0)).unwrap_err();
        assert!(matches!(err, MeasureError::Bounds(BoundsError::Range { .. })));
        assert_eq!(m.bounds(), bounded(0.0, 100.0));
    }

    #[test]
    fn set_bounds_does_not_reclamp() {
        let mut m = Measurement::new(50.0, "C");
        m.set_bounds(&(0.0, 10.0)).unwrap();
        assert_eq!(m.magnitude(), 50.0);
        m.set_magnitude(m.magnitude());
        assert_eq!(m.magnitude(), 10.0);
    }

    #[test]
    fn same_unit_needs_no_strategy() {
        let mut m = Measurement::new(7.0, "m").with_bounds(bounded(0.0, 10.0));
        assert_eq!(m.convert("m"), Ok(7.0));
        assert_eq!(m.set_unit("m"), None);
    }

    #[test]
    fn missing_strategy_rolls_back_unit_change() {
        let mut m = Measurement::new(7.0, "m");
        assert!(matches!(
            m.set_unit("ft"),
            Some(Warning::UnsupportedConversion { .. })
        ));
        assert_eq!(m.unit(), "m");
        assert!(m.convert("ft").is_err());
    }

    #[test]
    fn inverted_bounds_roll_back_unit_change() {
        let mut m = Measurement::new(10.0, "C")
            .with_bounds(bounded(0.0, 100.0))
            .with_converter(&Negate);
        assert_eq!(
            m.set_unit("negC"),
            Some(Warning::InvertedBounds {
                from: "C".into(),
                to: "negC".into(),
            })
        );
        assert_eq!(m.unit(), "C");
        assert_eq!(m.magnitude(), 10.0);
        assert_eq!(m.bounds(), bounded(0.0, 100.0));

        // Without bounds there is nothing to invert.
        let mut open = Measurement::new(10.0, "C").with_converter(&Negate);
        assert_eq!(open.set_unit("negC"), None);
        assert_eq!(open.magnitude(), -10.0);
    }

    #[test]
    fn display_and_debug() {
        let strategy = IdentityOnly;
        let m = Measurement::new(12.5, "kg").with_converter(&strategy);
        assert_eq!(m.to_string(), "12.5 kg");
        assert_eq!(Measurement::new(3.0, "").to_string(), "3");
        assert!(format!("{m:?}").contains("identity"));
    }
}
