//! Conversion dispatch.

use crate::numeric::ensure_finite;
use crate::units::{Category, TemperatureUnit};
use crate::{ConvertError, ConvertResult};

/// A single conversion, created per user action and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConversionRequest {
    pub value: f64,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        value: f64,
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            value,
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    pub fn convert(&self) -> ConvertResult<f64> {
        convert(self.value, &self.category, &self.from_unit, &self.to_unit)
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Checks run in a fixed order: the value must be finite, temperature pairs
/// are resolved directly, then the category and both units must be known.
/// Linear categories go through the base unit: `value * from / to`.
/// A result that overflows to infinity is reported as `InvalidValue`.
pub fn convert(value: f64, category: &str, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
    let value = ensure_finite(value)?;

    if category == Category::Temperature.as_str() {
        return convert_temperature(value, from_unit, to_unit);
    }

    let category: Category = category.parse()?;
    convert_linear(value, category, from_unit, to_unit)
}

/// Same as [`convert`] for callers that already hold a typed category.
pub fn convert_in(
    value: f64,
    category: Category,
    from_unit: &str,
    to_unit: &str,
) -> ConvertResult<f64> {
    let value = ensure_finite(value)?;
    match category {
        Category::Temperature => convert_temperature(value, from_unit, to_unit),
        _ => convert_linear(value, category, from_unit, to_unit),
    }
}

fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
    let pair = TemperatureUnit::from_symbol(from_unit).zip(TemperatureUnit::from_symbol(to_unit));
    match pair {
        Some((from, to)) => ensure_finite(from.convert_to(to, value)),
        None => Err(ConvertError::UnsupportedTemperaturePair {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        }),
    }
}

fn convert_linear(
    value: f64,
    category: Category,
    from_unit: &str,
    to_unit: &str,
) -> ConvertResult<f64> {
    match (category.factor(from_unit), category.factor(to_unit)) {
        // (v * f) / f is not always v in floating point
        (Some(_), Some(_)) if from_unit == to_unit => Ok(value),
        // A finite input can still overflow, e.g. 1e308 km in meters.
        (Some(from_factor), Some(to_factor)) => ensure_finite(value * from_factor / to_factor),
        (from_factor, to_factor) => {
            let mut unknown = Vec::new();
            if from_factor.is_none() {
                unknown.push(from_unit.to_string());
            }
            if to_factor.is_none() && to_unit != from_unit {
                unknown.push(to_unit.to_string());
            }
            Err(ConvertError::UnsupportedUnitPair {
                category,
                from: from_unit.to_string(),
                to: to_unit.to_string(),
                unknown,
            })
        }
    }
}

/// Units for a category tag, empty when the tag is unknown.
pub fn get_units_for_category(category: &str) -> Vec<&'static str> {
    category
        .parse::<Category>()
        .map(Category::units)
        .unwrap_or_default()
}

/// True when both units resolve within `category`.
pub fn is_valid_conversion(category: &str, from_unit: &str, to_unit: &str) -> bool {
    match category.parse::<Category>() {
        Ok(category) => category.contains(from_unit) && category.contains(to_unit),
        Err(_) => false,
    }
}
