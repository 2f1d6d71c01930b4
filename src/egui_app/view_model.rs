//! Helpers to convert scores into egui-facing view structs.

use crate::band::ScoreBand;
use crate::egui_app::state::{FeedbackView, ScoreView};
use crate::gauge::GaugeModel;
use crate::score::WellnessScore;

/// Build the gauge and feedback for a score from a single classification.
pub fn score_view(score: WellnessScore) -> ScoreView {
    let gauge = GaugeModel::for_score(score);
    let feedback = feedback_view(gauge.band);
    ScoreView { gauge, feedback }
}

/// Feedback banner for a band.
pub fn feedback_view(band: ScoreBand) -> FeedbackView {
    let icon = match band {
        ScoreBand::NeedsAttention => "🚨",
        ScoreBand::GoodProgress => "📈",
        ScoreBand::Excellent => "🎉",
    };
    FeedbackView {
        tone: band.tone(),
        icon,
        message: band.feedback_message(),
    }
}
