//! Equality and ordering across units.
//!
//! Both convert the right operand into the left operand's unit first. A
//! failed conversion never surfaces as an error here: the values are simply
//! unequal and unordered.
//!
//! Equality uses [`Measurement::convert`], which caps the right operand at
//! its converted bounds. Ordering compares both magnitudes uncapped, so it
//! stays antisymmetric even when a magnitude sits outside its bounds.

use std::cmp::Ordering;

use ms_core::{Tolerances, nearly_equal, same_strategy};

use crate::error::{MeasureError, MeasureResult, Operation};
use crate::measurement::Measurement;

impl Measurement<'_> {
    /// Equality with tolerance on the converted magnitude; bounds and
    /// strategies must still match exactly.
    pub fn approx_eq(&self, other: &Measurement<'_>, tol: Tolerances) -> bool {
        match other.convert(&self.unit) {
            Ok(rhs) => nearly_equal(self.magnitude, rhs, tol) && self.same_setup(other),
            Err(_) => false,
        }
    }

    /// Order by magnitude only, ignoring bounds and strategies.
    ///
    /// # Errors
    ///
    /// [`MeasureError::IncompatibleUnits`](crate::MeasureError::IncompatibleUnits)
    /// when `other` cannot be converted. `None` inside `Ok` means a `NaN`
    /// magnitude was involved.
    pub fn cmp_magnitude(&self, other: &Measurement<'_>) -> MeasureResult<Option<Ordering>> {
        let rhs = other
            .magnitude_in(&self.unit)
            .map_err(|_| MeasureError::IncompatibleUnits {
                op: Operation::Compare,
                left: self.unit.clone(),
                right: other.unit.clone(),
            })?;
        Ok(self.magnitude.partial_cmp(&rhs))
    }

    fn same_setup(&self, other: &Measurement<'_>) -> bool {
        self.bounds == other.bounds && same_strategy(self.converter, other.converter)
    }
}

/// `other` is converted with [`Measurement::convert`], so its magnitude is
/// capped at its converted bounds while `self`'s is taken as stored. With a
/// magnitude outside its own bounds the relation is not symmetric: `a == c`
/// can hold while `c == a` does not. A capped right operand also logs the
/// capping event at `WARN`.
impl PartialEq<Measurement<'_>> for Measurement<'_> {
    fn eq(&self, other: &Measurement<'_>) -> bool {
        match other.convert(&self.unit) {
            Ok(rhs) => self.magnitude == rhs && self.same_setup(other),
            Err(_) => false,
        }
    }
}

impl PartialOrd<Measurement<'_>> for Measurement<'_> {
    /// Compare magnitudes, neither capped at its bounds. Ties between values
    /// with different bounds or strategies are unordered.
    fn partial_cmp(&self, other: &Measurement<'_>) -> Option<Ordering> {
        let rhs = other.magnitude_in(&self.unit).ok()?;
        match self.magnitude.partial_cmp(&rhs)? {
            Ordering::Equal if !self.same_setup(other) => None,
            ord => Some(ord),
        }
    }
}
