//! User settings document.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ec_core::Category;
use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcuts {
    pub popup: String,
    pub inline: String,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            popup: "Ctrl+Shift+C".to_string(),
            inline: "Alt+C".to_string(),
        }
    }
}

/// Preferred source/target unit for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDefaults {
    pub from: String,
    pub to: String,
}

/// Missing keys fall back to [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_category: Category,
    pub default_from_unit: String,
    pub default_to_unit: String,
    pub enable_history: bool,
    pub theme: Theme,
    pub shortcuts: Shortcuts,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub category_defaults: BTreeMap<Category, UnitDefaults>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            default_from_unit: "m".to_string(),
            default_to_unit: "ft".to_string(),
            enable_history: true,
            theme: Theme::Light,
            shortcuts: Shortcuts::default(),
            category_defaults: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Every configured unit must belong to the category it is configured for.
    pub fn validate(&self) -> StoreResult<()> {
        check_unit(self.default_category, "default_from_unit", &self.default_from_unit)?;
        check_unit(self.default_category, "default_to_unit", &self.default_to_unit)?;

        for (category, defaults) in &self.category_defaults {
            check_unit(*category, &format!("category_defaults.{category}.from"), &defaults.from)?;
            check_unit(*category, &format!("category_defaults.{category}.to"), &defaults.to)?;
        }

        for (field, shortcut) in [
            ("shortcuts.popup", &self.shortcuts.popup),
            ("shortcuts.inline", &self.shortcuts.inline),
        ] {
            if shortcut.trim().is_empty() {
                return Err(StoreError::InvalidSettings {
                    field: field.to_string(),
                    value: shortcut.clone(),
                    reason: "shortcut cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Point the top-level defaults at a new category and unit pair.
    pub fn set_default_units(
        &mut self,
        category: Category,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> StoreResult<()> {
        let from = from.into();
        let to = to.into();
        check_unit(category, "default_from_unit", &from)?;
        check_unit(category, "default_to_unit", &to)?;
        self.default_category = category;
        self.default_from_unit = from;
        self.default_to_unit = to;
        Ok(())
    }
}

fn check_unit(category: Category, field: &str, unit: &str) -> StoreResult<()> {
    if category.contains(unit) {
        Ok(())
    } else {
        Err(StoreError::InvalidSettings {
            field: field.to_string(),
            value: unit.to_string(),
            reason: format!("not a {category} unit"),
        })
    }
}

/// Settings persisted as YAML.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file yields defaults.
    pub fn load(&self) -> StoreResult<Settings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let settings: Settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> StoreResult<()> {
        settings.validate()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_yaml::to_string(settings)?;
        fs::write(&self.path, content)?;
        tracing::info!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Overwrite the stored document with defaults.
    pub fn reset(&self) -> StoreResult<Settings> {
        let settings = Settings::default();
        self.save(&settings)?;
        Ok(settings)
    }
}
