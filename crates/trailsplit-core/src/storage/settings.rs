//! TOML-backed persistence for [`EffortSettings`].
//!
//! Settings live under a single fixed key (the file
//! `~/.config/trailsplit/settings.toml`) so every frontend sees the same
//! values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::effort::EffortSettings;
use crate::error::SettingsError;

const SETTINGS_FILE: &str = "settings.toml";

/// Wrapper giving the TOML file its `[effort]` section.
#[derive(Serialize, Deserialize, Default)]
struct SettingsFile {
    #[serde(default)]
    effort: EffortSettings,
}

/// Store for the process-wide effort settings.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Open the store in the data directory.
    pub fn open() -> Result<Self, SettingsError> {
        Ok(Self {
            path: data_dir()?.join(SETTINGS_FILE),
        })
    }

    /// Store backed by a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load from disk, or defaults when no file exists yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(&self) -> Result<EffortSettings, SettingsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let file: SettingsFile = toml::from_str(&content)?;
                Ok(file.effort)
            }
            Err(_) => Ok(EffortSettings::default()),
        }
    }

    /// Load from disk, falling back to defaults on any error.
    pub fn load_or_default(&self) -> EffortSettings {
        self.load().unwrap_or_default()
    }

    /// Validate and persist.
    ///
    /// # Errors
    /// Returns an error when a value is out of range or the file cannot
    /// be written.
    pub fn save(&self, settings: &EffortSettings) -> Result<(), SettingsError> {
        validate(settings)?;
        let content = toml::to_string_pretty(&SettingsFile { effort: *settings })?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

fn validate(settings: &EffortSettings) -> Result<(), SettingsError> {
    if !(1..=5).contains(&settings.fitness_level) {
        return Err(SettingsError::InvalidValue {
            field: "fitness_level".into(),
            message: format!("{} is not between 1 and 5", settings.fitness_level),
        });
    }
    if !settings.backpack_weight_kg.is_finite() || settings.backpack_weight_kg < 0.0 {
        return Err(SettingsError::InvalidValue {
            field: "backpack_weight_kg".into(),
            message: format!("{} is not a non-negative weight", settings.backpack_weight_kg),
        });
    }
    Ok(())
}
