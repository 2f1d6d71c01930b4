//! Linear regressor over the wellness features.

use serde::{Deserialize, Serialize};

use super::{FEATURE_COUNT, FeatureRow, PredictiveModel};

/// `intercept + sum(coefficients[i] * row[i])`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressorModel {
    pub model_version: i64,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressorModel {
    /// Validate coefficient count and finiteness.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {FEATURE_COUNT} coefficients, got {}",
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }
        Ok(())
    }
}

impl PredictiveModel for LinearRegressorModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &FeatureRow) -> f64 {
        self.coefficients
            .iter()
            .zip(row.iter())
            .fold(self.intercept, |acc, (coef, value)| acc + coef * value)
    }

    fn describe(&self) -> String {
        format!("linear regressor v{}", self.model_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(coefficients: Vec<f64>, intercept: f64) -> LinearRegressorModel {
        LinearRegressorModel {
            model_version: 1,
            feature_names: vec!["Sleep".into(), "Steps".into(), "Mood".into()],
            coefficients,
            intercept,
        }
    }

    #[test]
    fn predicts_weighted_sum() {
        let model = model(vec![2.0, 0.001, 3.0], 5.0);
        model.validate().unwrap();
        assert!((model.predict(&[7.5, 8000.0, 7.0]) - 49.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_wrong_arity_and_nan() {
        assert!(model(vec![1.0, 2.0], 0.0).validate().is_err());
        assert!(model(vec![1.0, f64::NAN, 0.0], 0.0).validate().is_err());
        assert!(model(vec![1.0, 1.0, 0.0], f64::INFINITY).validate().is_err());
    }
}
