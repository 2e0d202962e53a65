//! ms-measure: bounded, unit-aware measurements.
//!
//! A [`Measurement`] pairs a magnitude with a unit label, optional inclusive
//! [`Bounds`](ms_core::Bounds) and a borrowed
//! [`UnitConversion`](ms_core::UnitConversion) strategy.
//!
//! # Error channels
//!
//! - Recoverable conditions (a magnitude capped at a bound, a unit change
//!   rolled back) are returned as [`Warning`] values and logged at `WARN`.
//! - Malformed bounds and arithmetic across unrelated units fail with
//!   [`MeasureError`].
//! - Equality and ordering never fail; unconvertible values are unequal.
//!
//! # Example
//!
//! ```
//! use ms_core::Bounds;
//! use ms_measure::Measurement;
//! use ms_units::StandardUnits;
//!
//! let units = StandardUnits::new();
//! let mut t = Measurement::new(20.0, "C")
//!     .with_bounds(Bounds::new(Some(0.0), Some(100.0)).unwrap())
//!     .with_converter(&units);
//!
//! // Capped at the upper bound, with a warning.
//! assert!(t.set_magnitude(150.0).is_some());
//! assert_eq!(t.magnitude(), 100.0);
//!
//! // Bounds follow the unit.
//! assert!(t.set_unit("F").is_none());
//! assert!((t.magnitude() - 212.0).abs() < 1e-9);
//!
//! // Temperatures and lengths don't mix.
//! assert!(t.add(&Measurement::new(1.0, "m")).is_err());
//! ```

pub mod arithmetic;
pub mod compare;
pub mod error;
pub mod measurement;
pub mod warning;

pub use error::{MeasureError, MeasureResult, Operation};
pub use measurement::Measurement;
pub use warning::Warning;
