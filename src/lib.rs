//! Wellness calculator: score three daily metrics with a pre-trained model
//! and present the result as a banded gauge.

/// Application directory helpers.
pub mod app_dirs;
/// Score bands and their presentation attributes.
pub mod band;
/// Persisted settings.
pub mod config;
/// Desktop UI.
pub mod egui_app;
/// Gauge geometry for a score.
pub mod gauge;
/// Logging setup.
pub mod logging;
/// Predictive model artifacts and the shared model cache.
pub mod ml;
/// Inputs and the score function.
pub mod score;
/// Startup sequence shared by the binaries.
pub mod startup;
