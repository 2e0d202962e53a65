//! Inclusive bounds and the capping policy applied to magnitudes.
//!
//! Two entry points mirror how bounds are used by a measurement:
//! - [`clamp`] / [`clamp_checked`] force a value into an optional
//!   `[lower, upper]` range, warning (never failing) when a value is capped
//! - [`validate_bounds`] / [`parse_bounds`] check a candidate bounds
//!   specification and fail hard when it is malformed
//!
//! A bounds specification is anything implementing [`BoundsSpec`]: typed
//! pairs and arrays, slices of optional values, or a loosely typed
//! `serde_json::Value` coming from a configuration file.

use std::fmt;

use serde_json::Value;
use tracing::warn;

use crate::error::BoundsError;
use crate::numeric::Real;

/// `(lower, upper)`, either side optional.
pub type BoundsPair = (Option<Real>, Option<Real>);

/// Which bound a value was capped at.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cap {
    Lower(Real),
    Upper(Real),
}

impl Cap {
    /// The bound the value was forced to.
    pub fn limit(&self) -> Real {
        match self {
            Self::Lower(v) | Self::Upper(v) => *v,
        }
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower(v) => write!(
                f,
                "set value is lower than preset lower limit, capping value at {v}"
            ),
            Self::Upper(v) => write!(
                f,
                "set value is higher than preset upper limit, capping value at {v}"
            ),
        }
    }
}

/// Outcome of a clamp: the stored value plus the cap applied, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clamped {
    pub value: Real,
    pub cap: Option<Cap>,
}

impl Clamped {
    pub fn was_capped(&self) -> bool {
        self.cap.is_some()
    }
}

/// Clamp `value` into `[lower, upper]`, reporting which bound was hit.
///
/// The lower bound is checked first, so malformed bounds (`lower > upper`)
/// resolve to `lower`. A warning is logged whenever the value is capped.
pub fn clamp_checked(value: Real, lower: Option<Real>, upper: Option<Real>) -> Clamped {
    let cap = match (lower, upper) {
        (Some(lo), _) if value < lo => Some(Cap::Lower(lo)),
        (_, Some(hi)) if value > hi => Some(Cap::Upper(hi)),
        _ => None,
    };

    match cap {
        Some(cap) => {
            warn!(value, limit = cap.limit(), "{cap}");
            Clamped {
                value: cap.limit(),
                cap: Some(cap),
            }
        }
        None => Clamped { value, cap: None },
    }
}

/// Clamp `value` into `[lower, upper]`. Absent bounds leave that side open.
pub fn clamp(value: Real, lower: Option<Real>, upper: Option<Real>) -> Real {
    clamp_checked(value, lower, upper).value
}

/// Validated inclusive bounds. When both sides are present `lower < upper`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoundsPair", into = "BoundsPair")
)]
pub struct Bounds {
    lower: Option<Real>,
    upper: Option<Real>,
}

impl Bounds {
    pub const UNBOUNDED: Self = Self {
        lower: None,
        upper: None,
    };

    /// Build bounds, rejecting `NaN` and `lower >= upper`.
    pub fn new(lower: Option<Real>, upper: Option<Real>) -> Result<Self, BoundsError> {
        if lower.is_some_and(Real::is_nan) || upper.is_some_and(Real::is_nan) {
            return Err(BoundsError::Type {
                what: "bound values must be numbers, got NaN",
            });
        }
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lower >= upper {
                return Err(BoundsError::Range { lower, upper });
            }
        }
        Ok(Self { lower, upper })
    }

    pub fn at_least(lower: Real) -> Result<Self, BoundsError> {
        Self::new(Some(lower), None)
    }

    pub fn at_most(upper: Real) -> Result<Self, BoundsError> {
        Self::new(None, Some(upper))
    }

    pub fn lower(&self) -> Option<Real> {
        self.lower
    }

    pub fn upper(&self) -> Option<Real> {
        self.upper
    }

    pub fn as_pair(&self) -> BoundsPair {
        (self.lower, self.upper)
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    pub fn contains(&self, value: Real) -> bool {
        self.lower.is_none_or(|lo| value >= lo) && self.upper.is_none_or(|hi| value <= hi)
    }

    pub fn clamp(&self, value: Real) -> Clamped {
        clamp_checked(value, self.lower, self.upper)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(lo) => write!(f, "[{lo}, ")?,
            None => write!(f, "[-inf, ")?,
        }
        match self.upper {
            Some(hi) => write!(f, "{hi}]"),
            None => write!(f, "inf]"),
        }
    }
}

impl TryFrom<BoundsPair> for Bounds {
    type Error = BoundsError;

    fn try_from((lower, upper): BoundsPair) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl From<Bounds> for BoundsPair {
    fn from(bounds: Bounds) -> Self {
        bounds.as_pair()
    }
}

/// Anything that can be checked and turned into [`Bounds`].
pub trait BoundsSpec {
    fn to_bounds(&self) -> Result<Bounds, BoundsError>;
}

impl BoundsSpec for Bounds {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        Ok(*self)
    }
}

impl BoundsSpec for BoundsPair {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        Bounds::new(self.0, self.1)
    }
}

impl BoundsSpec for (Real, Real) {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        Bounds::new(Some(self.0), Some(self.1))
    }
}

impl BoundsSpec for [Option<Real>; 2] {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        Bounds::new(self[0], self[1])
    }
}

impl BoundsSpec for [Real; 2] {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        Bounds::new(Some(self[0]), Some(self[1]))
    }
}

impl BoundsSpec for [Option<Real>] {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        match self {
            [lower, upper] => Bounds::new(*lower, *upper),
            _ => Err(BoundsError::Arity { len: self.len() }),
        }
    }
}

impl BoundsSpec for [Real] {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        match self {
            [lower, upper] => Bounds::new(Some(*lower), Some(*upper)),
            _ => Err(BoundsError::Arity { len: self.len() }),
        }
    }
}

impl BoundsSpec for Vec<Option<Real>> {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        self.as_slice().to_bounds()
    }
}

impl BoundsSpec for Vec<Real> {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        self.as_slice().to_bounds()
    }
}

/// Loosely typed bounds, e.g. `[0, 100]` or `[null, 5.5]` read from JSON.
impl BoundsSpec for Value {
    fn to_bounds(&self) -> Result<Bounds, BoundsError> {
        let items = self.as_array().ok_or(BoundsError::Type {
            what: "expected an array of two values",
        })?;
        let [lower, upper] = items.as_slice() else {
            return Err(BoundsError::Arity { len: items.len() });
        };
        Bounds::new(json_bound(lower)?, json_bound(upper)?)
    }
}

fn json_bound(value: &Value) -> Result<Option<Real>, BoundsError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or(BoundsError::Type {
            what: "bound value is not representable as a float",
        }),
        _ => Err(BoundsError::Type {
            what: "only integer, float or null bound values are supported",
        }),
    }
}

/// Check a bounds specification without keeping the result.
pub fn validate_bounds<S: BoundsSpec + ?Sized>(spec: &S) -> Result<(), BoundsError> {
    spec.to_bounds().map(|_| ())
}

/// Check a bounds specification and return the validated [`Bounds`].
pub fn parse_bounds<S: BoundsSpec + ?Sized>(spec: &S) -> Result<Bounds, BoundsError> {
    spec.to_bounds()
}
