use thiserror::Error;

use crate::units::Category;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Invalid input value: {value}")]
    InvalidValue { value: f64 },

    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unsupported conversion in {category}: {from} to {to} (unknown unit: {})", .unknown.join(", "))]
    UnsupportedUnitPair {
        category: Category,
        from: String,
        to: String,
        unknown: Vec<String>,
    },

    #[error("Unsupported temperature conversion: {from} to {to}")]
    UnsupportedTemperaturePair { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_pair_lists_offending_units() {
        let err = ConvertError::UnsupportedUnitPair {
            category: Category::Length,
            from: "xx".into(),
            to: "yy".into(),
            unknown: vec!["xx".into(), "yy".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("length"));
        assert!(msg.contains("xx, yy"));
    }

    #[test]
    fn temperature_pair_names_both_units() {
        let err = ConvertError::UnsupportedTemperaturePair {
            from: "°C".into(),
            to: "°R".into(),
        };
        assert_eq!(err.to_string(), "Unsupported temperature conversion: °C to °R");
    }
}
