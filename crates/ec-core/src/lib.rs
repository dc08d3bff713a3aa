//! ec-core: conversion engine for everything-converter.
//!
//! Contains:
//! - units (category/unit table, linear factors, temperature scales)
//! - convert (validation + base-unit dispatch)
//! - format (display policy for results)
//! - selection (value + unit extraction from free text)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)
//!
//! Everything here is pure and stateless.

pub mod convert;
pub mod error;
pub mod format;
pub mod numeric;
pub mod selection;
pub mod units;

pub use convert::{
    ConversionRequest, convert, convert_in, get_units_for_category, is_valid_conversion,
};
pub use error::{ConvertError, ConvertResult};
pub use format::format_result;
pub use numeric::*;
pub use selection::{Selection, SelectionError, parse_selection};
pub use units::{Category, TemperatureUnit, category_of_unit, resolve_unit};
