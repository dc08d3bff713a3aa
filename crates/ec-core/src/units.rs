//! Canonical unit table.
//!
//! One immutable table shared by every caller. Linear categories store
//! "base units per one of this unit"; temperature is affine and lives in
//! [`TemperatureUnit`] instead.

use std::fmt;
use std::str::FromStr;

use crate::ConvertError;

/// Dimension of measurement. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Base: meter
    Length,
    /// Base: kilogram
    Weight,
    /// Affine, no base factor
    Temperature,
    /// Base: liter
    Volume,
    /// Base: meter per second
    Speed,
    /// Base: square meter
    Area,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Speed,
        Category::Area,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Volume => "volume",
            Self::Speed => "speed",
            Self::Area => "area",
        }
    }

    /// Factor table for linear categories; `None` for temperature.
    pub fn factors(self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Self::Length => Some(LENGTH),
            Self::Weight => Some(WEIGHT),
            Self::Temperature => None,
            Self::Volume => Some(VOLUME),
            Self::Speed => Some(SPEED),
            Self::Area => Some(AREA),
        }
    }

    /// Units of this category in canonical declaration order.
    pub fn units(self) -> Vec<&'static str> {
        match self.factors() {
            Some(table) => table.iter().map(|(unit, _)| *unit).collect(),
            None => TemperatureUnit::ALL.iter().map(|t| t.symbol()).collect(),
        }
    }

    /// Reference unit. For temperature this is informational only.
    pub fn base_unit(self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Weight => "kg",
            Self::Temperature => "K",
            Self::Volume => "l",
            Self::Speed => "m/s",
            Self::Area => "m²",
        }
    }

    /// Factor for `unit`, treating a zero entry as missing.
    pub fn factor(self, unit: &str) -> Option<f64> {
        self.factors()?
            .iter()
            .find(|(u, _)| *u == unit)
            .map(|(_, f)| *f)
            .filter(|f| *f != 0.0)
    }

    pub fn contains(self, unit: &str) -> bool {
        match self.factors() {
            Some(_) => self.factor(unit).is_some(),
            None => TemperatureUnit::from_symbol(unit).is_some(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownCategory {
                category: s.to_string(),
            })
    }
}

/// Category owning `unit`. Unit tokens are unique across the table.
pub fn category_of_unit(unit: &str) -> Option<Category> {
    resolve_unit(unit).map(|(category, _)| category)
}

/// Category and the table's own `'static` token for `unit`.
pub fn resolve_unit(unit: &str) -> Option<(Category, &'static str)> {
    Category::ALL.into_iter().find_map(|category| {
        category
            .units()
            .into_iter()
            .find(|u| *u == unit)
            .map(|u| (category, u))
    })
}

// Base: meter
const LENGTH: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

// Base: kilogram
const WEIGHT: &[(&str, f64)] = &[
    ("g", 0.001),
    ("kg", 1.0),
    ("t", 1000.0),
    ("oz", 0.028_349_5),
    ("lb", 0.453_592),
    ("st", 6.350_29),
];

// Base: liter
const VOLUME: &[(&str, f64)] = &[
    ("ml", 0.001),
    ("l", 1.0),
    ("m³", 1000.0),
    ("tsp", 0.004_928_92),
    ("tbsp", 0.014_786_8),
    ("fl oz", 0.029_573_5),
    ("cup", 0.236_588),
    ("pt", 0.473_176),
    ("qt", 0.946_353),
    ("gal", 3.785_41),
    ("in³", 0.016_387_1),
];

// Base: meter per second
const SPEED: &[(&str, f64)] = &[
    ("m/s", 1.0),
    ("km/h", 0.277_778),
    ("mph", 0.447_04),
    ("ft/s", 0.3048),
    ("knots", 0.514_444),
];

// Base: square meter
const AREA: &[(&str, f64)] = &[
    ("mm²", 0.000_001),
    ("cm²", 0.0001),
    ("m²", 1.0),
    ("ha", 10_000.0),
    ("km²", 1_000_000.0),
    ("in²", 0.000_645_16),
    ("ft²", 0.092_903),
    ("yd²", 0.836_127),
    ("acres", 4046.86),
    ("mi²", 2_589_988.11),
];

/// Temperature scale. Conversions between scales are affine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    /// Convert `value` from `self` to `to`.
    pub fn convert_to(self, to: TemperatureUnit, value: f64) -> f64 {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

        match (self, to) {
            (Celsius, Fahrenheit) => (value * 9.0 / 5.0) + 32.0,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Celsius, Kelvin) => value + 273.15,
            (Kelvin, Celsius) => value - 273.15,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unit_counts_match_table() {
        assert_eq!(Category::Length.units().len(), 8);
        assert_eq!(Category::Weight.units().len(), 6);
        assert_eq!(Category::Temperature.units().len(), 3);
        assert_eq!(Category::Volume.units().len(), 11);
        assert_eq!(Category::Speed.units().len(), 5);
        assert_eq!(Category::Area.units().len(), 10);
    }

    #[test]
    fn base_units_have_unit_factor() {
        for category in Category::ALL {
            if category == Category::Temperature {
                continue;
            }
            assert_eq!(category.factor(category.base_unit()), Some(1.0));
        }
    }

    #[test]
    fn factors_are_positive_and_unique_per_category() {
        for category in Category::ALL {
            let Some(table) = category.factors() else {
                continue;
            };
            let mut seen = HashSet::new();
            for (unit, factor) in table {
                assert!(*factor > 0.0, "{unit} in {category}");
                assert!(seen.insert(*unit), "duplicate {unit} in {category}");
            }
        }
    }

    #[test]
    fn unit_tokens_belong_to_one_category() {
        let mut seen = HashSet::new();
        for category in Category::ALL {
            for unit in category.units() {
                assert!(seen.insert(unit), "{unit} appears twice");
                assert_eq!(category_of_unit(unit), Some(category));
            }
        }
    }

    #[test]
    fn grams_are_weight() {
        assert_eq!(category_of_unit("g"), Some(Category::Weight));
        assert!(!Category::Length.contains("g"));
    }

    #[test]
    fn category_from_str() {
        assert_eq!("area".parse::<Category>().unwrap(), Category::Area);
        assert!(matches!(
            "Length".parse::<Category>(),
            Err(ConvertError::UnknownCategory { category }) if category == "Length"
        ));
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn temperature_symbols() {
        assert_eq!(TemperatureUnit::from_symbol("°F"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::from_symbol("F"), None);
        assert_eq!(TemperatureUnit::Kelvin.to_string(), "K");
    }

    #[test]
    fn temperature_fixed_points() {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};
        assert_eq!(Celsius.convert_to(Fahrenheit, 0.0), 32.0);
        assert_eq!(Celsius.convert_to(Fahrenheit, 100.0), 212.0);
        assert_eq!(Kelvin.convert_to(Celsius, 273.15), 0.0);
        assert_eq!(Fahrenheit.convert_to(Celsius, -40.0), -40.0);
        assert!((Fahrenheit.convert_to(Kelvin, 32.0) - 273.15).abs() < 1e-9);
        assert!((Kelvin.convert_to(Fahrenheit, 373.15) - 212.0).abs() < 1e-9);
    }
}
