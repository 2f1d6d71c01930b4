//! Startup sequence shared by the desktop app and the command-line scorer.

use thiserror::Error;

use crate::config::{self, AppSettings, ConfigError};
use crate::ml::{ModelLoadError, setup};
use crate::score::Scorer;

/// Fatal errors raised before the first score can be computed.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to load wellness model: {0}")]
    Model(#[from] ModelLoadError),
}

/// Load settings from the application root, creating `config.toml` on first run.
pub fn load_settings() -> Result<AppSettings, StartupError> {
    Ok(config::load_or_create()?)
}

/// Build a scorer backed by the process-wide cached model.
pub fn shared_scorer(settings: &AppSettings) -> Result<Scorer, StartupError> {
    let model = setup::load_shared(&settings.model)?;
    Ok(Scorer::new(model, settings.scoring.validate_inputs))
}
