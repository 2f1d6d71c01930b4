use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, reading or validating a model artifact.
///
/// All of these are fatal at startup; the application has no way to score
/// without a model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// The artifact file could not be read.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not valid JSON or has an unknown `kind`.
    #[error("Malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    /// The artifact parsed but violates a structural invariant.
    #[error("Invalid model artifact: {0}")]
    Invalid(String),
    /// The model was trained on a different feature schema.
    #[error("Model expects features {found:?} but the calculator supplies {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// The artifact digest differs from the pinned SHA-256.
    #[error("Model artifact {path} SHA-256 mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
    /// The pinned SHA-256 is not a 64 character hex string.
    #[error("Invalid SHA-256 value; expected 64 hex characters, got '{0}'")]
    InvalidChecksum(String),
    /// The models directory could not be resolved or created.
    #[error("Failed to prepare models directory: {0}")]
    ModelsDir(String),
    /// The bundled default artifact could not be written.
    #[error("Failed to install bundled model at {path}: {source}")]
    BundledCopy {
        path: PathBuf,
        source: std::io::Error,
    },
}
