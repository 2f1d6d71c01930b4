//! Persisted application settings.
//!
//! Settings live in `config.toml` under the application root. Every section
//! and key is optional so older or hand-written files keep loading.

mod io;

pub use io::{
    config_path, load_from, load_or_create, load_or_create_at, load_or_default, save, save_to_path,
};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::score::{DAILY_STEPS, MOOD_RATING, SLEEP_HOURS, WellnessInput};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Where to find the predictive model.
///
/// Config keys: `path`, `sha256`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Explicit artifact path; the bundled model is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Expected SHA-256 of the artifact, hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Scoring behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Reject inputs outside their slider ranges before predicting.
    #[serde(default = "default_true")]
    pub validate_inputs: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            validate_inputs: true,
        }
    }
}

/// Initial slider positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_sleep_hours")]
    pub initial_sleep_hours: f32,
    #[serde(default = "default_steps")]
    pub initial_steps: u32,
    #[serde(default = "default_mood_rating")]
    pub initial_mood_rating: u8,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            initial_sleep_hours: default_sleep_hours(),
            initial_steps: default_steps(),
            initial_mood_rating: default_mood_rating(),
        }
    }
}

impl UiSettings {
    /// Slider values snapped into their ranges.
    pub fn initial_input(&self) -> WellnessInput {
        WellnessInput::new(
            SLEEP_HOURS.snap(self.initial_sleep_hours),
            DAILY_STEPS.snap(self.initial_steps),
            MOOD_RATING.clamp(self.initial_mood_rating),
        )
    }
}

impl AppSettings {
    pub(crate) fn normalized(mut self) -> Self {
        let input = self.ui.initial_input();
        self.ui.initial_sleep_hours = input.sleep_hours;
        self.ui.initial_steps = input.steps;
        self.ui.initial_mood_rating = input.mood_rating;
        if self
            .model
            .sha256
            .as_deref()
            .is_some_and(|sha| sha.trim().is_empty())
        {
            self.model.sha256 = None;
        }
        self
    }
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}

fn default_true() -> bool {
    true
}

fn default_sleep_hours() -> f32 {
    SLEEP_HOURS.default
}

fn default_steps() -> u32 {
    DAILY_STEPS.default
}

fn default_mood_rating() -> u8 {
    MOOD_RATING.default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: AppSettings = toml::from_str("").unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(settings.scoring.validate_inputs);
        assert_eq!(settings.ui.initial_input(), WellnessInput::default());
    }

    #[test]
    fn partial_sections_fill_missing_keys() {
        let settings: AppSettings = toml::from_str(
            r#"
            [model]
            path = "/opt/models/custom.json"

            [ui]
            initial_steps = 12000
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.model.path.as_deref(),
            Some(std::path::Path::new("/opt/models/custom.json"))
        );
        assert_eq!(settings.ui.initial_steps, 12_000);
        assert_eq!(settings.ui.initial_mood_rating, 7);
        assert!(settings.scoring.validate_inputs);
    }

    #[test]
    fn normalization_snaps_sliders_and_drops_blank_digest() {
        let mut settings = AppSettings::default();
        settings.ui.initial_sleep_hours = 30.0;
        settings.ui.initial_steps = 8_123;
        settings.ui.initial_mood_rating = 0;
        settings.model.sha256 = Some("  ".into());
        let settings = settings.normalized();
        assert_eq!(settings.ui.initial_sleep_hours, 12.0);
        assert_eq!(settings.ui.initial_steps, 8_000);
        assert_eq!(settings.ui.initial_mood_rating, 1);
        assert_eq!(settings.model.sha256, None);
    }
}
