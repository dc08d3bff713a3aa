//! ec-store: conversion history and user settings persistence.

pub mod history;
pub mod settings;

pub use history::{HISTORY_LIMIT, HistoryRecord, HistoryStore};
pub use settings::{SettingsStore, Settings, Shortcuts, Theme, UnitDefaults};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid history record: {field} = {value} (must be finite)")]
    InvalidRecord { field: &'static str, value: String },

    #[error("Invalid settings: {field} = {value} ({reason})")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    #[test]
    fn package_metadata_comes_from_workspace() {
        assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT OR Apache-2.0");
        assert_eq!(env!("CARGO_PKG_RUST_VERSION"), "1.85");
    }
}
