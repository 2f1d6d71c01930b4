//! Predictive model artifacts and the shared model handle.
//!
//! Models are loaded from versioned JSON artifacts, validated against the
//! feature schema the scoring pipeline supplies, and then treated as
//! immutable, thread-safe predictors.

pub mod artifact;
pub mod cache;
pub mod error;
pub mod forest;
pub mod linear;
pub mod setup;

pub use artifact::{ModelArtifact, load_artifact, parse_artifact};
pub use cache::ModelCache;
pub use error::ModelLoadError;
pub use forest::{ForestRegressorModel, RegressionTree};
pub use linear::LinearRegressorModel;

use std::fmt::Debug;

/// Number of input features every wellness model consumes.
pub const FEATURE_COUNT: usize = 3;

/// Ordered feature names the scoring pipeline supplies.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["Sleep", "Steps", "Mood"];

/// One row of model input, ordered as [`FEATURE_NAMES`].
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Opaque predictor mapping one feature row to a single score.
pub trait PredictiveModel: Debug + Send + Sync {
    /// Feature names the model was trained on, in column order.
    fn feature_names(&self) -> &[String];

    /// Predict the raw score for a feature row.
    fn predict(&self, row: &FeatureRow) -> f64;

    /// Short human-readable description used in logs and the status bar.
    fn describe(&self) -> String;
}

/// Check that a model's training-time schema matches [`FEATURE_NAMES`] exactly.
pub fn verify_schema(found: &[String]) -> Result<(), ModelLoadError> {
    let matches = found.len() == FEATURE_COUNT
        && found
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(found, expected)| found == expected);
    if matches {
        Ok(())
    } else {
        Err(ModelLoadError::SchemaMismatch {
            expected: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
            found: found.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn schema_accepts_exact_order() {
        verify_schema(&names(&["Sleep", "Steps", "Mood"])).unwrap();
    }

    #[test]
    fn schema_rejects_reordered_columns() {
        let err = verify_schema(&names(&["Steps", "Sleep", "Mood"])).unwrap_err();
        assert!(matches!(err, ModelLoadError::SchemaMismatch { .. }));
    }

    #[test]
    fn schema_rejects_case_and_arity_differences() {
        assert!(verify_schema(&names(&["sleep", "steps", "mood"])).is_err());
        assert!(verify_schema(&names(&["Sleep", "Steps"])).is_err());
        assert!(verify_schema(&names(&["Sleep", "Steps", "Mood", "Age"])).is_err());
    }
}
