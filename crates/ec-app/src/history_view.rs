//! Read-side helpers for rendering history.

use ec_core::format_result;
use ec_store::HistoryRecord;

/// Coarse age label: `3d ago`, `2h ago`, `5m ago` or `just now`.
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - timestamp_ms).max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "just now".to_string()
    }
}

/// `"{value} {from} = {result} {to}"` with the result run through the formatter.
pub fn conversion_line(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{value} {from_unit} = {} {to_unit}", format_result(result))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLine {
    pub timestamp: i64,
    pub text: String,
    pub age: String,
}

pub fn history_lines(records: &[HistoryRecord], now_ms: i64) -> Vec<HistoryLine> {
    records
        .iter()
        .map(|r| HistoryLine {
            timestamp: r.timestamp,
            text: conversion_line(r.value, &r.from_unit, r.result, &r.to_unit),
            age: format_relative_time(r.timestamp, now_ms),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_core::Category;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn relative_time_bands() {
        assert_eq!(format_relative_time(NOW - 5_000, NOW), "just now");
        assert_eq!(format_relative_time(NOW - 61_000, NOW), "1m ago");
        assert_eq!(format_relative_time(NOW - 2 * 3_600_000, NOW), "2h ago");
        assert_eq!(format_relative_time(NOW - 3 * 86_400_000, NOW), "3d ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_relative_time(NOW + 90_000, NOW), "just now");
    }

    #[test]
    fn line_uses_formatter() {
        assert_eq!(conversion_line(1.0, "m", 3.280839895, "ft"), "1 m = 3.28084 ft");
        assert_eq!(conversion_line(0.5, "g", 0.0005, "kg"), "0.5 g = 5.0000e-4 kg");
    }

    #[test]
    fn lines_keep_record_order() {
        let records = vec![
            HistoryRecord {
                value: 2.0,
                category: Category::Weight,
                from_unit: "kg".into(),
                to_unit: "g".into(),
                result: 2000.0,
                timestamp: NOW - 120_000,
            },
            HistoryRecord {
                value: 1.0,
                category: Category::Length,
                from_unit: "km".into(),
                to_unit: "m".into(),
                result: 1000.0,
                timestamp: NOW - 7_200_000,
            },
        ];
        let lines = history_lines(&records, NOW);
        assert_eq!(lines[0].text, "2 kg = 2000 g");
        assert_eq!(lines[0].age, "2m ago");
        assert_eq!(lines[1].age, "2h ago");
    }
}
