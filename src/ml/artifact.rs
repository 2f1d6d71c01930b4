//! Versioned JSON model artifacts.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{
    ForestRegressorModel, LinearRegressorModel, ModelLoadError, PredictiveModel, verify_schema,
};

/// Serialized model, tagged by its `kind` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    RandomForestRegressorV1(ForestRegressorModel),
    LinearRegressorV1(LinearRegressorModel),
}

impl ModelArtifact {
    fn feature_names(&self) -> &[String] {
        match self {
            Self::RandomForestRegressorV1(model) => &model.feature_names,
            Self::LinearRegressorV1(model) => &model.feature_names,
        }
    }

    /// Validate structure first, then the feature schema.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        let structure = match self {
            Self::RandomForestRegressorV1(model) => model.validate(),
            Self::LinearRegressorV1(model) => model.validate(),
        };
        structure.map_err(ModelLoadError::Invalid)?;
        verify_schema(self.feature_names())
    }

    /// Convert into a shareable predictor.
    pub fn into_model(self) -> Arc<dyn PredictiveModel> {
        match self {
            Self::RandomForestRegressorV1(model) => Arc::new(model),
            Self::LinearRegressorV1(model) => Arc::new(model),
        }
    }
}

/// Parse and validate an artifact from raw JSON bytes.
pub fn parse_artifact(bytes: &[u8]) -> Result<ModelArtifact, ModelLoadError> {
    let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
    artifact.validate()?;
    Ok(artifact)
}

/// Load an artifact from disk, optionally pinning its SHA-256 digest.
pub fn load_artifact(
    path: &Path,
    expected_sha256: Option<&str>,
) -> Result<Arc<dyn PredictiveModel>, ModelLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(expected) = expected_sha256 {
        let expected = normalize_sha256(expected)?;
        let actual = sha256_hex(&bytes);
        if actual != expected {
            return Err(ModelLoadError::ChecksumMismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }
    }
    let model = parse_artifact(&bytes)?.into_model();
    tracing::info!("Loaded {} from {}", model.describe(), path.display());
    Ok(model)
}

/// Lowercase hex SHA-256 of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn normalize_sha256(value: &str) -> Result<String, ModelLoadError> {
    let trimmed = value.trim();
    if trimmed.len() != 64 || !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ModelLoadError::InvalidChecksum(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}
