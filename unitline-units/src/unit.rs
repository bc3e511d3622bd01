//! Unit representation with its category and conversion factor

use std::fmt;
use serde::{Serialize, Deserialize};

/// The three families of convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Temperature,
}

impl Category {
    /// All categories in registry order
    pub const ALL: [Category; 3] = [Category::Length, Category::Mass, Category::Temperature];

    /// Lowercase category name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
        }
    }

    /// Reference unit of the category.
    ///
    /// For temperature this is the Celsius pivot rather than a scaling base.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Length => "meter",
            Category::Mass => "kilogram",
            Category::Temperature => "celsius",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A known unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Lowercase unit name as used on the wire (e.g. "meter", "pound")
    pub name: &'static str,
    /// Category the unit belongs to
    pub category: Category,
    /// Multiplier to the category base unit; `None` for temperature units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

impl Unit {
    /// Create a unit that scales linearly to its base unit
    pub fn linear(name: &'static str, category: Category, factor: f64) -> Self {
        Unit {
            name,
            category,
            factor: Some(factor),
        }
    }

    /// Create a temperature unit (affine, no factor)
    pub fn temperature(name: &'static str) -> Self {
        Unit {
            name,
            category: Category::Temperature,
            factor: None,
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
