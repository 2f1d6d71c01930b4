//! Wellness inputs and the score function.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::ml::{FeatureRow, PredictiveModel};

/// Bounds, step and default for one slider-controlled input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange<T> {
    pub min: T,
    pub max: T,
    pub step: T,
    pub default: T,
}

impl<T: PartialOrd + Copy> InputRange<T> {
    /// Whether `value` lies within the closed range. NaN never does.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamp `value` into the range.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl InputRange<f32> {
    /// Clamp and round to the nearest step; NaN falls back to the default.
    pub fn snap(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

impl InputRange<u32> {
    /// Clamp and round to the nearest step.
    pub fn snap(&self, value: u32) -> u32 {
        let offset = self.clamp(value) - self.min;
        let steps = (offset + self.step / 2) / self.step;
        self.clamp(self.min + steps * self.step)
    }
}

/// Hours slept, 0.0 to 12.0 in half-hour steps.
pub const SLEEP_HOURS: InputRange<f32> = InputRange {
    min: 0.0,
    max: 12.0,
    step: 0.5,
    default: 7.5,
};

/// Daily step count, 0 to 25 000 in steps of 500.
pub const DAILY_STEPS: InputRange<u32> = InputRange {
    min: 0,
    max: 25_000,
    step: 500,
    default: 8_000,
};

/// Self-reported mood, 1 (very low) to 10 (excellent).
pub const MOOD_RATING: InputRange<u8> = InputRange {
    min: 1,
    max: 10,
    step: 1,
    default: 7,
};

/// One snapshot of the three user inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WellnessInput {
    pub sleep_hours: f32,
    pub steps: u32,
    pub mood_rating: u8,
}

impl Default for WellnessInput {
    fn default() -> Self {
        Self {
            sleep_hours: SLEEP_HOURS.default,
            steps: DAILY_STEPS.default,
            mood_rating: MOOD_RATING.default,
        }
    }
}

impl WellnessInput {
    pub fn new(sleep_hours: f32, steps: u32, mood_rating: u8) -> Self {
        Self {
            sleep_hours,
            steps,
            mood_rating,
        }
    }

    /// Model input in `Sleep`, `Steps`, `Mood` order.
    pub fn feature_row(&self) -> FeatureRow {
        [
            f64::from(self.sleep_hours),
            f64::from(self.steps),
            f64::from(self.mood_rating),
        ]
    }

    /// Check every field against its slider range.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if !SLEEP_HOURS.contains(self.sleep_hours) {
            return Err(ScoreError::out_of_range(
                "sleep_hours",
                f64::from(self.sleep_hours),
                f64::from(SLEEP_HOURS.min),
                f64::from(SLEEP_HOURS.max),
            ));
        }
        if !DAILY_STEPS.contains(self.steps) {
            return Err(ScoreError::out_of_range(
                "steps",
                f64::from(self.steps),
                f64::from(DAILY_STEPS.min),
                f64::from(DAILY_STEPS.max),
            ));
        }
        if !MOOD_RATING.contains(self.mood_rating) {
            return Err(ScoreError::out_of_range(
                "mood_rating",
                f64::from(self.mood_rating),
                f64::from(MOOD_RATING.min),
                f64::from(MOOD_RATING.max),
            ));
        }
        Ok(())
    }
}

/// Errors produced while scoring an input.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// An input lies outside its slider range.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The model returned NaN or an infinity.
    #[error("Model returned a non-finite score ({0})")]
    NonFiniteOutput(f64),
}

impl ScoreError {
    fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidInput {
            field,
            value,
            min,
            max,
        }
    }
}

/// Model output rounded to one decimal place. Not clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct WellnessScore(f64);

impl WellnessScore {
    /// Round a raw model output half away from zero at one decimal.
    pub fn from_raw(raw: f64) -> Self {
        Self(round_to_tenth(raw))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the score falls within the nominal 0 to 100 scale.
    pub fn is_nominal(self) -> bool {
        (0.0..=100.0).contains(&self.0)
    }
}

impl fmt::Display for WellnessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// `(value * 10).round() / 10`, where `round` breaks ties away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score an input with no range validation.
pub fn compute_score(
    model: &dyn PredictiveModel,
    input: &WellnessInput,
) -> Result<WellnessScore, ScoreError> {
    let raw = model.predict(&input.feature_row());
    let score = WellnessScore::from_raw(raw);
    // Scaling by ten can overflow a finite raw value near f64::MAX.
    if !raw.is_finite() || !score.value().is_finite() {
        return Err(ScoreError::NonFiniteOutput(raw));
    }
    if !score.is_nominal() {
        tracing::warn!(
            "Model produced out-of-scale score {score} for {:?}; leaving unclamped",
            input
        );
    }
    Ok(score)
}

/// Shared model plus the validation policy applied before each prediction.
#[derive(Debug, Clone)]
pub struct Scorer {
    model: Arc<dyn PredictiveModel>,
    validate_inputs: bool,
}

impl Scorer {
    pub fn new(model: Arc<dyn PredictiveModel>, validate_inputs: bool) -> Self {
        Self {
            model,
            validate_inputs,
        }
    }

    /// Validate (when enabled) and score one input snapshot.
    pub fn score(&self, input: &WellnessInput) -> Result<WellnessScore, ScoreError> {
        if self.validate_inputs {
            input.validate()?;
        }
        compute_score(self.model.as_ref(), input)
    }

    pub fn model(&self) -> &Arc<dyn PredictiveModel> {
        &self.model
    }
}
