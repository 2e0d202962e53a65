//! Static table of unit labels and their `uom` conversions.
//!
//! Every entry maps a label to a dimension plus a pair of functions moving a
//! value to and from the SI base unit of that dimension. The affine
//! temperature scales are handled by `uom` itself.

use ms_core::Real;
use uom::si::f64::{Length, Mass, Pressure, Ratio, ThermodynamicTemperature, Time};
use uom::si::thermodynamic_temperature as temperature;
use uom::si::{length, mass, pressure, ratio, time};

use crate::dimension::Dimension;

/// One known unit label.
#[derive(Clone, Copy)]
pub struct UnitDef {
    pub label: &'static str,
    pub dimension: Dimension,
    to_base: fn(Real) -> Real,
    from_base: fn(Real) -> Real,
}

impl UnitDef {
    /// Express `value` (in this unit) in the SI base unit.
    pub fn to_base(&self, value: Real) -> Real {
        (self.to_base)(value)
    }

    /// Express a base-unit `value` in this unit.
    pub fn from_base(&self, value: Real) -> Real {
        (self.from_base)(value)
    }
}

impl std::fmt::Debug for UnitDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitDef")
            .field("label", &self.label)
            .field("dimension", &self.dimension)
            .finish()
    }
}

// `$base` is the SI base unit of the quantity; `.value` of a uom quantity is
// always stored in it.
macro_rules! unit {
    ($label:literal, $dim:ident, $quantity:ident, $module:ident :: $unit:ident, $base:ident) => {
        UnitDef {
            label: $label,
            dimension: Dimension::$dim,
            to_base: |v| $quantity::new::<$module::$unit>(v).value,
            from_base: |v| $quantity::new::<$module::$base>(v).get::<$module::$unit>(),
        }
    };
}

pub static UNITS: &[UnitDef] = &[
    // Length
    unit!("m", Length, Length, length::meter, meter),
    unit!("km", Length, Length, length::kilometer, meter),
    unit!("cm", Length, Length, length::centimeter, meter),
    unit!("mm", Length, Length, length::millimeter, meter),
    unit!("in", Length, Length, length::inch, meter),
    unit!("ft", Length, Length, length::foot, meter),
    unit!("mi", Length, Length, length::mile, meter),
    // Mass
    unit!("kg", Mass, Mass, mass::kilogram, kilogram),
    unit!("g", Mass, Mass, mass::gram, kilogram),
    unit!("mg", Mass, Mass, mass::milligram, kilogram),
    unit!("lbm", Mass, Mass, mass::pound, kilogram),
    // Temperature
    unit!("K", Temperature, ThermodynamicTemperature, temperature::kelvin, kelvin),
    unit!("C", Temperature, ThermodynamicTemperature, temperature::degree_celsius, kelvin),
    unit!("degC", Temperature, ThermodynamicTemperature, temperature::degree_celsius, kelvin),
    unit!("F", Temperature, ThermodynamicTemperature, temperature::degree_fahrenheit, kelvin),
    unit!("degF", Temperature, ThermodynamicTemperature, temperature::degree_fahrenheit, kelvin),
    unit!("R", Temperature, ThermodynamicTemperature, temperature::degree_rankine, kelvin),
    // Pressure (absolute)
    unit!("Pa", Pressure, Pressure, pressure::pascal, pascal),
    unit!("kPa", Pressure, Pressure, pressure::kilopascal, pascal),
    unit!("MPa", Pressure, Pressure, pressure::megapascal, pascal),
    unit!("bar", Pressure, Pressure, pressure::bar, pascal),
    unit!("mbar", Pressure, Pressure, pressure::millibar, pascal),
    unit!("atm", Pressure, Pressure, pressure::atmosphere, pascal),
    unit!("psia", Pressure, Pressure, pressure::pound_force_per_square_inch, pascal),
    // Time
    unit!("s", Time, Time, time::second, second),
    unit!("ms", Time, Time, time::millisecond, second),
    unit!("min", Time, Time, time::minute, second),
    unit!("h", Time, Time, time::hour, second),
    // Dimensionless
    unit!("ratio", Ratio, Ratio, ratio::ratio, ratio),
    unit!("%", Ratio, Ratio, ratio::percent, ratio),
];

/// Find the definition of `label`. Labels are case-sensitive.
pub fn lookup(label: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|def| def.label == label)
}
