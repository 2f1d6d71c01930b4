use eframe::egui::{CornerRadius, Frame, Margin, RichText, Ui};

use super::style;
use crate::egui_app::state::{FeedbackView, ScoreState};

const TIP: &str = "Small daily improvements lead to significant wellness gains over time.";
const DISCLAIMER: &str = "This calculator provides general wellness insights and should not replace professional medical advice.";

pub(super) fn render_feedback(ui: &mut Ui, result: &ScoreState) {
    if let Some(view) = result.view() {
        banner(ui, &view.feedback);
    }
}

fn banner(ui: &mut Ui, feedback: &FeedbackView) {
    let (fill, text) = style::feedback_colors(feedback.tone);
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("{} {}", feedback.icon, feedback.message))
                    .color(text)
                    .size(16.0),
            );
        });
}

pub(super) fn render_footer(ui: &mut Ui) {
    let palette = style::palette();
    ui.add_space(8.0);
    Frame::new()
        .fill(palette.info_fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("💡 Tip:").strong().color(palette.info_text));
                ui.label(RichText::new(TIP).color(palette.info_text));
            });
        });
    ui.add_space(6.0);
    ui.label(RichText::new(DISCLAIMER).small().color(palette.text_muted));
}
