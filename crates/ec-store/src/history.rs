//! Bounded conversion history, newest first.

use std::fs;
use std::path::{Path, PathBuf};

use ec_core::Category;
use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

/// Records kept after each insert.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub value: f64,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

impl HistoryRecord {
    /// Stamp a finished conversion with the current wall-clock time.
    pub fn now(
        value: f64,
        category: Category,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        result: f64,
    ) -> Self {
        Self {
            value,
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            result,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// History backed by a single JSON file.
///
/// Mutation takes `&mut self`; the owner serializes read-modify-write.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Load the history at `path`. A missing file is an empty history.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), count = records.len(), "history loaded");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn find(&self, timestamp: i64) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.timestamp == timestamp)
    }

    /// Insert at the front, drop anything past [`HISTORY_LIMIT`], persist.
    ///
    /// Non-finite numbers are rejected: JSON has no encoding for them and
    /// the file would no longer load.
    pub fn record(&mut self, entry: HistoryRecord) -> StoreResult<()> {
        for (field, value) in [("value", entry.value), ("result", entry.result)] {
            if !value.is_finite() {
                return Err(StoreError::InvalidRecord {
                    field,
                    value: value.to_string(),
                });
            }
        }

        let mut records = Vec::with_capacity(HISTORY_LIMIT);
        records.push(entry);
        records.extend(self.records.iter().take(HISTORY_LIMIT - 1).cloned());

        self.write(&records)?;
        self.records = records;
        tracing::info!(count = self.records.len(), "history updated");
        Ok(())
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.write(&[])?;
        self.records.clear();
        tracing::info!("history cleared");
        Ok(())
    }

    fn write(&self, records: &[HistoryRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
