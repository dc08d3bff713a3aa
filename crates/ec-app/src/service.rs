//! Conversion service shared by the CLI and any other front end.

use ec_core::{Category, ConversionRequest, convert, format_result, parse_selection};
use ec_store::{HistoryRecord, HistoryStore, Settings};

use crate::error::{AppError, AppResult};
use crate::history_view::conversion_line;

/// Everything a front end needs to show one finished conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub formatted: String,
    pub line: String,
    pub recorded: bool,
}

/// Holds settings and history explicitly; nothing global.
#[derive(Debug)]
pub struct ConverterService {
    settings: Settings,
    history: Option<HistoryStore>,
}

impl ConverterService {
    pub fn new(settings: Settings, history: Option<HistoryStore>) -> Self {
        Self { settings, history }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> Option<&HistoryStore> {
        self.history.as_ref()
    }

    pub fn history_mut(&mut self) -> Option<&mut HistoryStore> {
        self.history.as_mut()
    }

    /// Convert, format, and record in history when enabled.
    pub fn run(&mut self, request: &ConversionRequest) -> AppResult<ConversionOutcome> {
        let result = convert(
            request.value,
            &request.category,
            &request.from_unit,
            &request.to_unit,
        )?;
        // convert() has already accepted the category tag
        let category: Category = request.category.parse()?;

        tracing::debug!(
            value = request.value,
            %category,
            from = %request.from_unit,
            to = %request.to_unit,
            result,
            "converted"
        );

        let recorded = match (&mut self.history, self.settings.enable_history) {
            (Some(history), true) => {
                history.record(HistoryRecord::now(
                    request.value,
                    category,
                    request.from_unit.clone(),
                    request.to_unit.clone(),
                    result,
                ))?;
                true
            }
            _ => false,
        };

        Ok(ConversionOutcome {
            category,
            value: request.value,
            from_unit: request.from_unit.clone(),
            to_unit: request.to_unit.clone(),
            result,
            formatted: format_result(result),
            line: conversion_line(request.value, &request.from_unit, result, &request.to_unit),
            recorded,
        })
    }

    /// Like [`run`](Self::run) but takes the value as typed by the user.
    pub fn run_text(
        &mut self,
        value_text: &str,
        category: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> AppResult<ConversionOutcome> {
        let trimmed = value_text.trim();
        if trimmed.is_empty() || category.is_empty() || from_unit.is_empty() || to_unit.is_empty()
        {
            return Err(AppError::InvalidInput("Please fill in all fields".to_string()));
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("'{trimmed}' is not a number")))?;
        self.run(&ConversionRequest::new(value, category, from_unit, to_unit))
    }

    /// Source and target unit to preselect for `category`.
    ///
    /// Per-category overrides win, then the global defaults when they belong
    /// to `category`, then the first two units of the category.
    pub fn default_units(&self, category: Category) -> (String, String) {
        if let Some(defaults) = self.settings.category_defaults.get(&category) {
            return (defaults.from.clone(), defaults.to.clone());
        }
        if self.settings.default_category == category {
            return (
                self.settings.default_from_unit.clone(),
                self.settings.default_to_unit.clone(),
            );
        }
        let units = category.units();
        (units[0].to_string(), units[1].to_string())
    }

    /// Convert highlighted text such as `12 km` to `to_unit`, or to the
    /// category's default target when none is given.
    pub fn convert_selection(
        &mut self,
        text: &str,
        to_unit: Option<&str>,
    ) -> AppResult<ConversionOutcome> {
        let selection = parse_selection(text)?;
        let target = match to_unit {
            Some(unit) => unit.to_string(),
            None => self.default_target(selection.category, selection.unit),
        };
        tracing::debug!(text, unit = selection.unit, %target, "selection parsed");

        self.run(&ConversionRequest::new(
            selection.value,
            selection.category.as_str(),
            selection.unit,
            target,
        ))
    }

    fn default_target(&self, category: Category, source: &str) -> String {
        let (from, to) = self.default_units(category);
        if to != source {
            return to;
        }
        if from != source {
            return from;
        }
        category
            .units()
            .into_iter()
            .find(|u| *u != source)
            .unwrap_or(source)
            .to_string()
    }

    pub fn clear_history(&mut self) -> AppResult<()> {
        if let Some(history) = &mut self.history {
            history.clear()?;
        }
        Ok(())
    }
}
