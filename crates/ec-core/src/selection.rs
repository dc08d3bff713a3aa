//! Parsing of highlighted text such as `12.5 km` or `-40°F`.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::units::{Category, resolve_unit};

static SELECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d*\.?\d+)\s*([a-zA-Z°³²]+)$").expect("selection pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Selection is not a value with a unit: '{text}'")]
    NoMatch { text: String },

    #[error("Unrecognized unit in selection: '{unit}'")]
    UnknownUnit { unit: String },
}

/// A value and unit lifted out of free text, tagged with the unit's category.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub value: f64,
    pub unit: &'static str,
    pub category: Category,
}

pub fn parse_selection(text: &str) -> Result<Selection, SelectionError> {
    let trimmed = text.trim();
    let no_match = || SelectionError::NoMatch {
        text: trimmed.to_string(),
    };

    let caps = SELECTION_RE.captures(trimmed).ok_or_else(no_match)?;
    let value: f64 = caps[1].parse().map_err(|_| no_match())?;
    let token = &caps[2];

    let (category, unit) = resolve_unit(token).ok_or_else(|| SelectionError::UnknownUnit {
        unit: token.to_string(),
    })?;

    Ok(Selection {
        value,
        unit,
        category,
    })
}
