//! Locating the model artifact and loading it into the shared cache.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{app_dirs, config::ModelSettings};

use super::{ModelLoadError, PredictiveModel, artifact, cache};

/// Filename of the default artifact installed into the models directory.
pub const BUNDLED_MODEL_FILE_NAME: &str = "wellness_forest_v1.json";

const BUNDLED_MODEL_JSON: &[u8] = include_bytes!("../../assets/models/wellness_forest_v1.json");

/// Raw bytes of the artifact compiled into the binary.
pub fn bundled_artifact() -> &'static [u8] {
    BUNDLED_MODEL_JSON
}

/// Load the configured model through the process-wide cache.
///
/// Only the first call touches the filesystem.
pub fn load_shared(settings: &ModelSettings) -> Result<Arc<dyn PredictiveModel>, ModelLoadError> {
    cache::global().get_or_load(|| load_from_settings(settings))
}

/// Resolve and load the configured artifact without caching.
pub fn load_from_settings(
    settings: &ModelSettings,
) -> Result<Arc<dyn PredictiveModel>, ModelLoadError> {
    let path = resolve_model_path(settings.path.as_deref())?;
    artifact::load_artifact(&path, settings.sha256.as_deref())
}

/// Return the artifact path to load.
///
/// An explicit path is used as-is, so a missing file fails at load time.
/// Without one, the default artifact in the models directory is used and
/// installed from the bundled copy first if absent.
pub fn resolve_model_path(configured: Option<&Path>) -> Result<PathBuf, ModelLoadError> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    let models_dir =
        app_dirs::models_dir().map_err(|err| ModelLoadError::ModelsDir(err.to_string()))?;
    if sync_bundled_model(&models_dir)? {
        tracing::info!("Installed bundled model into {}", models_dir.display());
    }
    Ok(models_dir.join(BUNDLED_MODEL_FILE_NAME))
}

/// Write the bundled artifact into `models_dir` if it is missing.
///
/// Returns `true` when a file was written.
pub fn sync_bundled_model(models_dir: &Path) -> Result<bool, ModelLoadError> {
    let target = models_dir.join(BUNDLED_MODEL_FILE_NAME);
    if target.exists() {
        return Ok(false);
    }
    fs::write(&target, BUNDLED_MODEL_JSON).map_err(|source| ModelLoadError::BundledCopy {
        path: target.clone(),
        source,
    })?;
    Ok(true)
}
