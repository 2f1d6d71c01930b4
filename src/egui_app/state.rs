//! UI state consumed by the egui renderer.

use egui::Color32;

use crate::band::FeedbackTone;
use crate::egui_app::ui::style;
use crate::gauge::GaugeModel;
use crate::score::WellnessInput;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current slider values.
    pub inputs: WellnessInput,
    pub result: ScoreState,
    pub status: StatusBarState,
}

/// Outcome of the most recent evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ScoreState {
    Ready(ScoreView),
    /// Scoring failed; the message is shown in place of the gauge.
    Failed(String),
}

impl ScoreState {
    pub fn view(&self) -> Option<&ScoreView> {
        match self {
            Self::Ready(view) => Some(view),
            Self::Failed(_) => None,
        }
    }
}

/// Gauge and feedback for one computed score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreView {
    pub gauge: GaugeModel,
    pub feedback: FeedbackView,
}

/// Banner shown under the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackView {
    pub tone: FeedbackTone,
    pub icon: &'static str,
    pub message: &'static str,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status naming the model in use.
    pub fn ready(model_description: &str) -> Self {
        Self {
            text: format!("Model: {model_description}"),
            badge_label: "Ready".into(),
            badge_color: style::status_badge_color(style::StatusTone::Ready),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            badge_label: "Error".into(),
            badge_color: style::status_badge_color(style::StatusTone::Error),
        }
    }
}
