//! Unit definitions - the fixed length, mass and temperature tables

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    units: Vec<Unit>,
    index: HashMap<&'static str, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            index: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by its exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.index.get(name).map(|&i| &self.units[i])
    }

    /// Category of a unit, or `None` if the name is unknown
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.get(name).map(|u| u.category)
    }

    /// Factor to meters, for length units only
    pub fn length_factor(&self, name: &str) -> Option<f64> {
        self.factor_in(name, Category::Length)
    }

    /// Factor to kilograms, for mass units only
    pub fn mass_factor(&self, name: &str) -> Option<f64> {
        self.factor_in(name, Category::Mass)
    }

    fn factor_in(&self, name: &str, category: Category) -> Option<f64> {
        self.get(name)
            .filter(|u| u.category == category)
            .and_then(|u| u.factor)
    }

    /// All units in registration order
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Get all units in a category
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Get all unit names
    pub fn names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name).collect()
    }

    /// Both units are known and share a category
    pub fn is_convertible(&self, from: &str, to: &str) -> bool {
        match (self.get(from), self.get(to)) {
            (Some(a), Some(b)) => a.is_compatible(b),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit) {
        let name = unit.name;
        self.units.push(unit);
        self.index.insert(name, self.units.len() - 1);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_temperature_units();
        tracing::trace!(units = self.units.len(), "unit registry initialized");
    }

    fn register_length_units(&mut self) {
        // Factors to meters
        self.register(Unit::linear("meter", Category::Length, 1.0));
        self.register(Unit::linear("feet", Category::Length, 0.3048));
        self.register(Unit::linear("kilometer", Category::Length, 1000.0));
        self.register(Unit::linear("mile", Category::Length, 1609.344));
        self.register(Unit::linear("centimeter", Category::Length, 0.01));
        self.register(Unit::linear("inch", Category::Length, 0.0254));
        self.register(Unit::linear("yard", Category::Length, 0.9144));
    }

    fn register_mass_units(&mut self) {
        // Factors to kilograms
        self.register(Unit::linear("kilogram", Category::Mass, 1.0));
        self.register(Unit::linear("gram", Category::Mass, 0.001));
        self.register(Unit::linear("pound", Category::Mass, 0.453592));
        self.register(Unit::linear("ounce", Category::Mass, 0.0283495));
        self.register(Unit::linear("ton", Category::Mass, 1000.0));
        self.register(Unit::linear("stone", Category::Mass, 6.35029));
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::temperature("celsius"));
        self.register(Unit::temperature("fahrenheit"));
        self.register(Unit::temperature("kelvin"));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size() {
        assert_eq!(UNITS.len(), 16);
        assert_eq!(UNITS.by_category(Category::Length).len(), 7);
        assert_eq!(UNITS.by_category(Category::Mass).len(), 6);
        assert_eq!(UNITS.by_category(Category::Temperature).len(), 3);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(UNITS.category_of("feet"), Some(Category::Length));
        assert_eq!(UNITS.category_of("stone"), Some(Category::Mass));
        assert_eq!(UNITS.category_of("kelvin"), Some(Category::Temperature));
        assert_eq!(UNITS.category_of("lightyear"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(UNITS.get("meter").is_some());
        assert!(UNITS.get("Meter").is_none());
        assert!(UNITS.get("METER").is_none());
        assert!(UNITS.get("").is_none());
    }

    #[test]
    fn test_length_factors() {
        assert_eq!(UNITS.length_factor("meter"), Some(1.0));
        assert_eq!(UNITS.length_factor("feet"), Some(0.3048));
        assert_eq!(UNITS.length_factor("kilometer"), Some(1000.0));
        assert_eq!(UNITS.length_factor("mile"), Some(1609.344));
        assert_eq!(UNITS.length_factor("centimeter"), Some(0.01));
        assert_eq!(UNITS.length_factor("inch"), Some(0.0254));
        assert_eq!(UNITS.length_factor("yard"), Some(0.9144));
    }

    #[test]
    fn test_mass_factors() {
        assert_eq!(UNITS.mass_factor("kilogram"), Some(1.0));
        assert_eq!(UNITS.mass_factor("gram"), Some(0.001));
        assert_eq!(UNITS.mass_factor("pound"), Some(0.453592));
        assert_eq!(UNITS.mass_factor("ounce"), Some(0.0283495));
        assert_eq!(UNITS.mass_factor("ton"), Some(1000.0));
        assert_eq!(UNITS.mass_factor("stone"), Some(6.35029));
    }

    #[test]
    fn test_factor_wrong_category() {
        assert_eq!(UNITS.length_factor("gram"), None);
        assert_eq!(UNITS.mass_factor("meter"), None);
        assert_eq!(UNITS.length_factor("celsius"), None);
        assert_eq!(UNITS.mass_factor("kelvin"), None);
    }

    #[test]
    fn test_names_in_registration_order() {
        let names = UNITS.names();
        assert_eq!(names.first(), Some(&"meter"));
        assert_eq!(names.last(), Some(&"kelvin"));
        assert_eq!(names[7], "kilogram");
    }

    #[test]
    fn test_is_convertible() {
        assert!(UNITS.is_convertible("mile", "inch"));
        assert!(UNITS.is_convertible("fahrenheit", "kelvin"));
        assert!(!UNITS.is_convertible("mile", "pound"));
        assert!(!UNITS.is_convertible("mile", "furlong"));
    }

    #[test]
    fn test_base_unit_is_registered() {
        for category in Category::ALL {
            let base = UNITS.get(category.base_unit()).unwrap();
            assert_eq!(base.category, category);
            if category != Category::Temperature {
                assert_eq!(base.factor, Some(1.0));
            }
        }
    }
}
