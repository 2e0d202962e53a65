//! Arithmetic between measurements and scaling by plain numbers.
//!
//! Results are new measurements in the left operand's unit, bounds and
//! strategy. Sums, differences and scaled values are stored without capping;
//! rounded values are capped at the bounds again.

use std::ops::{Add, Mul, Sub};

use ms_core::{Real, ensure_finite, round_to};

use crate::error::{MeasureError, MeasureResult, Operation};
use crate::measurement::Measurement;

impl<'c> Measurement<'c> {
    /// `self + other`, with `other` converted into `self`'s unit.
    ///
    /// # Errors
    ///
    /// [`MeasureError::IncompatibleUnits`] when `other` cannot be converted.
    pub fn add(&self, other: &Measurement<'_>) -> MeasureResult<Measurement<'c>> {
        let rhs = self.reconcile(other, Operation::Add)?;
        Ok(self.with_magnitude(self.magnitude + rhs))
    }

    /// `self - other`, with `other` converted into `self`'s unit.
    ///
    /// # Errors
    ///
    /// [`MeasureError::IncompatibleUnits`] when `other` cannot be converted.
    pub fn subtract(&self, other: &Measurement<'_>) -> MeasureResult<Measurement<'c>> {
        let rhs = self.reconcile(other, Operation::Subtract)?;
        Ok(self.with_magnitude(self.magnitude - rhs))
    }

    /// Dimensionless quotient `self / other` after converting `other` into
    /// `self`'s unit.
    ///
    /// # Errors
    ///
    /// [`MeasureError::IncompatibleUnits`] when `other` cannot be converted,
    /// [`MeasureError::Core`] when the quotient is not finite.
    pub fn ratio(&self, other: &Measurement<'_>) -> MeasureResult<Real> {
        let rhs = self.reconcile(other, Operation::Divide)?;
        Ok(ensure_finite(self.magnitude / rhs, "measurement ratio")?)
    }

    /// Multiply the magnitude by a dimensionless factor.
    pub fn scale(&self, factor: Real) -> Measurement<'c> {
        self.with_magnitude(self.magnitude * factor)
    }

    /// Divide the magnitude by a dimensionless divisor.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Core`] when the quotient is not finite (e.g. `divisor == 0`).
    pub fn divide(&self, divisor: Real) -> MeasureResult<Measurement<'c>> {
        let quotient = ensure_finite(self.magnitude / divisor, "measurement quotient")?;
        Ok(self.with_magnitude(quotient))
    }

    /// Divide by `divisor` and round the quotient toward negative infinity.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Core`] when the quotient is not finite.
    pub fn floor_divide(&self, divisor: Real) -> MeasureResult<Measurement<'c>> {
        let quotient = ensure_finite(self.magnitude / divisor, "measurement quotient")?;
        Ok(self.with_magnitude(quotient.floor()))
    }

    /// Round to `digits` decimal places, capped at the bounds.
    pub fn round(&self, digits: i32) -> Measurement<'c> {
        self.recapped(round_to(self.magnitude, digits))
    }

    /// Largest integer not above the magnitude, capped at the bounds.
    pub fn floor(&self) -> Measurement<'c> {
        self.recapped(self.magnitude.floor())
    }

    /// Smallest integer not below the magnitude, capped at the bounds.
    pub fn ceil(&self) -> Measurement<'c> {
        self.recapped(self.magnitude.ceil())
    }

    fn recapped(&self, value: Real) -> Measurement<'c> {
        self.with_magnitude(self.bounds.clamp(value).value)
    }

    /// `other`'s magnitude in `self`'s unit, or an error naming `op`.
    fn reconcile(&self, other: &Measurement<'_>, op: Operation) -> MeasureResult<Real> {
        other
            .convert(&self.unit)
            .map_err(|_| MeasureError::IncompatibleUnits {
                op,
                left: self.unit.clone(),
                right: other.unit.clone(),
            })
    }
}

impl<'c> Add<&Measurement<'_>> for &Measurement<'c> {
    type Output = MeasureResult<Measurement<'c>>;

    fn add(self, rhs: &Measurement<'_>) -> Self::Output {
        Measurement::add(self, rhs)
    }
}

impl<'c> Sub<&Measurement<'_>> for &Measurement<'c> {
    type Output = MeasureResult<Measurement<'c>>;

    fn sub(self, rhs: &Measurement<'_>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'c> Mul<Real> for &Measurement<'c> {
    type Output = Measurement<'c>;

    fn mul(self, factor: Real) -> Self::Output {
        self.scale(factor)
    }
}

impl<'c> Mul<Real> for Measurement<'c> {
    type Output = Measurement<'c>;

    fn mul(self, factor: Real) -> Self::Output {
        self.scale(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::{Bounds, ConversionError, ConversionResult, CoreError, UnitConversion};

    /// Meters and centimeters only.
    struct Metric;

    impl UnitConversion for Metric {
        fn name(&self) -> &str {
            "metric"
        }

        fn convert(&self, value: Real, from: &str, to: &str) -> ConversionResult<Real> {
            match (from, to) {
                ("m", "cm") => Ok(value * 100.0),
                ("cm", "m") => Ok(value / 100.0),
                _ if from == to => Ok(value),
                _ => Err(ConversionError::unsupported(from, to)),
            }
        }
    }

    fn bounded(lower: Real, upper: Real) -> Bounds {
        Bounds::new(Some(lower), Some(upper)).unwrap()
    }

    #[test]
    fn add_same_unit() {
        let a = Measurement::new(10.0, "m");
        let b = Measurement::new(5.0, "m");
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.magnitude(), 15.0);
        assert_eq!(sum.unit(), "m");
    }

    #[test]
    fn add_converts_right_operand() {
        let a = Measurement::new(1.0, "m").with_converter(&Metric);
        let b = Measurement::new(50.0, "cm").with_converter(&Metric);
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.magnitude(), 1.5);
        assert_eq!(sum.unit(), "m");

        let diff = (&b - &a).unwrap();
        assert_eq!(diff.magnitude(), -50.0);
        assert_eq!(diff.unit(), "cm");
    }

    #[test]
    fn sum_keeps_left_bounds_without_capping() {
        let a = Measurement::new(8.0, "m")
            .with_bounds(bounded(0.0, 10.0))
            .with_converter(&Metric);
        let b = Measurement::new(5.0, "m");
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.magnitude(), 13.0);
        assert_eq!(sum.bounds(), a.bounds());
        assert_eq!(sum.converter().map(|c| c.name()), Some("metric"));
    }

    #[test]
    fn operands_are_not_mutated() {
        let a = Measurement::new(2.0, "m");
        let b = Measurement::new(3.0, "m");
        let _ = a.subtract(&b).unwrap();
        assert_eq!(a.magnitude(), 2.0);
        assert_eq!(b.magnitude(), 3.0);
    }

    #[test]
    fn subtract_unrelated_units_fails() {
        let a = Measurement::new(10.0, "m").with_converter(&Metric);
        let b = Measurement::new(5.0, "kg").with_converter(&Metric);
        let err = a.subtract(&b).unwrap_err();
        assert!(err.to_string().contains("can't be subtracted"));
    }

    #[test]
    fn ratio_is_dimensionless() {
        let a = Measurement::new(3.0, "m").with_converter(&Metric);
        let b = Measurement::new(150.0, "cm").with_converter(&Metric);
        assert_eq!(a.ratio(&b), Ok(2.0));

        let zero = Measurement::new(0.0, "m");
        assert!(matches!(
            a.ratio(&zero),
            Err(MeasureError::Core(CoreError::NonFinite { .. }))
        ));

        let kg = Measurement::new(1.0, "kg");
        assert!(matches!(
            a.ratio(&kg),
            Err(MeasureError::IncompatibleUnits {
                op: Operation::Divide,
                ..
            })
        ));
    }

    #[test]
    fn scaling() {
        let m = Measurement::new(4.0, "m").with_bounds(bounded(0.0, 10.0));
        assert_eq!(m.scale(3.0).magnitude(), 12.0);
        assert_eq!((&m * 0.5).magnitude(), 2.0);
        assert_eq!(m.divide(8.0).unwrap().magnitude(), 0.5);
        assert!(m.divide(0.0).is_err());
        assert_eq!(m.floor_divide(3.0).unwrap().magnitude(), 1.0);
        assert_eq!(
            m.clone() * 2.0,
            Measurement::new(8.0, "m").with_bounds(bounded(0.0, 10.0))
        );
    }

    #[test]
    fn floor_divide_negative_goes_down() {
        let m = Measurement::new(-7.0, "m");
        assert_eq!(m.floor_divide(2.0).unwrap().magnitude(), -4.0);
    }

    #[test]
    fn rounding_is_recapped() {
        let m = Measurement::new(99.7, "C").with_bounds(bounded(0.0, 99.5));
        assert_eq!(m.round(0).magnitude(), 99.5);
        assert_eq!(m.ceil().magnitude(), 99.5);
        assert_eq!(m.floor().magnitude(), 99.0);

        let m = Measurement::new(2.36, "C");
        assert_eq!(m.round(1).magnitude(), 2.4);
    }
}
