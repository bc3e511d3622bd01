//! Unitline Units - Unit Registry and Conversion Engine
//!
//! Converts plain `f64` values between units of the same category.
//!
//! Categories:
//! - Length (meter, feet, kilometer, mile, centimeter, inch, yard)
//! - Mass (kilogram, gram, pound, ounce, ton, stone)
//! - Temperature (celsius, fahrenheit, kelvin)
//!
//! Length and mass units scale linearly to a base unit (meter, kilogram).
//! Temperature units are affine and are routed through Celsius.

mod convert;
mod error;
mod unit;
mod units;

pub use convert::{convert, convert_length, convert_mass, convert_temperature};
pub use error::{ConversionError, ErrorKind};
pub use unit::{Category, Unit};
pub use units::{UnitRegistry, UNITS};

/// Category of a unit name, if it is known
pub fn category_of(unit: &str) -> Option<Category> {
    UNITS.category_of(unit)
}

/// Factor to meters for a length unit
pub fn length_factor(unit: &str) -> Option<f64> {
    UNITS.length_factor(unit)
}

/// Factor to kilograms for a mass unit
pub fn mass_factor(unit: &str) -> Option<f64> {
    UNITS.mass_factor(unit)
}
