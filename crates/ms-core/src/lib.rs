//! ms-core: stable foundation for measurand.
//!
//! Contains:
//! - bounds (inclusive limits, capping policy, bounds validation)
//! - conversion (the unit conversion strategy trait)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod bounds;
pub mod conversion;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use bounds::*;
pub use conversion::*;
pub use error::{
    BoundsError, BoundsErrorKind, ConversionError, ConversionResult, CoreError, CoreResult,
};
pub use numeric::*;
