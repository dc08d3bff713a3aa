//! Shared application service layer for everything-converter.
//!
//! Front ends (CLI today) go through here so that conversion, formatting and
//! history recording behave the same everywhere.

pub mod error;
pub mod history_view;
pub mod service;

pub use error::{AppError, AppResult};
pub use history_view::{HistoryLine, conversion_line, format_relative_time, history_lines};
pub use service::{ConversionOutcome, ConverterService};
