use crate::CoreError;

/// Floating point type used for every magnitude and bound
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Round `v` to `digits` decimal places. Negative `digits` round to tens,
/// hundreds and so on; past the range of `f64` that is a signed zero.
pub fn round_to(v: Real, digits: i32) -> Real {
    if !v.is_finite() {
        return v;
    }
    if digits < 0 {
        // i32::MIN has no positive counterpart; 10^i32::MAX is inf anyway.
        let scale = 10_f64.powi(digits.checked_neg().unwrap_or(i32::MAX));
        if !scale.is_finite() {
            return 0.0_f64.copysign(v);
        }
        return (v / scale).round() * scale;
    }
    let scale = 10_f64.powi(digits);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round_to_digits() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1234.5, -2), 1200.0);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn round_to_huge_scale_is_identity() {
        assert_eq!(round_to(1e300, 20), 1e300);
        assert_eq!(round_to(5.0, i32::MAX), 5.0);
    }

    #[test]
    fn round_to_far_negative_digits_is_signed_zero() {
        assert_eq!(round_to(5.0, -400), 0.0);
        assert!(round_to(-5.0, -400).is_sign_negative());
        assert_eq!(round_to(5.0, i32::MIN), 0.0);
    }

    #[test]
    fn round_to_keeps_non_finite() {
        assert!(round_to(Real::NAN, 2).is_nan());
        assert_eq!(round_to(Real::INFINITY, -3), Real::INFINITY);
    }
}
