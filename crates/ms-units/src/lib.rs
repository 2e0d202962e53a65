//! ms-units: reference unit conversion strategy for measurand.
//!
//! Provides:
//! - `Dimension`: quantity families (length, mass, temperature, ...)
//! - a static catalog of unit labels backed by `uom` SI quantities
//! - `StandardUnits`: a `UnitConversion` implementation over that catalog
//!
//! Measurements only depend on the `UnitConversion` trait from `ms-core`;
//! this crate is one interchangeable implementation of it.

pub mod catalog;
pub mod dimension;
pub mod standard;

pub use catalog::{UnitDef, lookup};
pub use dimension::Dimension;
pub use standard::StandardUnits;
