//! Conversion engine
//!
//! Resolves both unit names to a category, rejects cross-category requests and
//! dispatches to the category routine. Every function here is pure.

use crate::{Category, ConversionError};
use crate::units::UNITS;

/// Convert `value` from one unit to another
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from_category = UNITS.category_of(from_unit)
        .ok_or_else(|| ConversionError::UnsupportedUnit(from_unit.to_string()))?;
    let to_category = UNITS.category_of(to_unit)
        .ok_or_else(|| ConversionError::UnsupportedUnit(to_unit.to_string()))?;

    if from_category != to_category {
        return Err(ConversionError::CategoryMismatch {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    }

    // x * f / f is not always x in binary floating point
    if from_unit == to_unit {
        return Ok(value);
    }

    tracing::trace!(value, from_unit, to_unit, category = %from_category, "converting");

    match from_category {
        Category::Length => convert_length(value, from_unit, to_unit),
        Category::Mass => convert_mass(value, from_unit, to_unit),
        Category::Temperature => convert_temperature(value, from_unit, to_unit),
    }
}

/// Convert between length units via meters
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    match (UNITS.length_factor(from_unit), UNITS.length_factor(to_unit)) {
        (Some(from), Some(to)) => Ok(scale(value, from, to)),
        _ => Err(ConversionError::UnsupportedLengthConversion {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        }),
    }
}

/// Convert between mass units via kilograms
pub fn convert_mass(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    match (UNITS.mass_factor(from_unit), UNITS.mass_factor(to_unit)) {
        (Some(from), Some(to)) => Ok(scale(value, from, to)),
        _ => Err(ConversionError::UnsupportedMassConversion {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        }),
    }
}

fn scale(value: f64, from_factor: f64, to_factor: f64) -> f64 {
    // to base unit, then to target
    let base = value * from_factor;
    base / to_factor
}

/// Convert between temperature units via Celsius
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    if from_unit == to_unit {
        return Ok(value);
    }

    let celsius = match from_unit {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        other => return Err(ConversionError::UnsupportedTemperatureUnit(other.to_string())),
    };

    match to_unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok((celsius * 9.0 / 5.0) + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        other => Err(ConversionError::UnsupportedTemperatureUnit(other.to_string())),
    }
}
