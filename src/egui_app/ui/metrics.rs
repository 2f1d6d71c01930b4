use eframe::egui::{RichText, Slider, Ui};

use super::style;
use crate::egui_app::controller::WellnessController;
use crate::score::{DAILY_STEPS, MOOD_RATING, SLEEP_HOURS};

const SLEEP_HELP: &str = "Recommended: 7-9 hours";
const STEPS_HELP: &str = "Recommended: 10 000+ steps";
const MOOD_HELP: &str = "1 = Very low, 10 = Excellent";

/// Three sliders; any change is pushed to the controller as one snapshot.
pub(super) fn render_metrics_panel(ui: &mut Ui, controller: &mut WellnessController) {
    let muted = style::palette().text_muted;
    ui.label(RichText::new("Your Metrics").strong().size(18.0));
    ui.add_space(12.0);

    let mut input = controller.inputs();
    let mut changed = false;

    metric_label(ui, "Sleep Hours", SLEEP_HELP, muted);
    changed |= ui
        .add(
            Slider::new(&mut input.sleep_hours, SLEEP_HOURS.min..=SLEEP_HOURS.max)
                .step_by(f64::from(SLEEP_HOURS.step))
                .fixed_decimals(1),
        )
        .on_hover_text(SLEEP_HELP)
        .changed();
    ui.add_space(16.0);

    metric_label(ui, "Daily Steps", STEPS_HELP, muted);
    changed |= ui
        .add(
            Slider::new(&mut input.steps, DAILY_STEPS.min..=DAILY_STEPS.max)
                .step_by(f64::from(DAILY_STEPS.step)),
        )
        .on_hover_text(STEPS_HELP)
        .changed();
    ui.add_space(16.0);

    metric_label(ui, "Mood Rating", MOOD_HELP, muted);
    changed |= ui
        .add(
            Slider::new(&mut input.mood_rating, MOOD_RATING.min..=MOOD_RATING.max)
                .step_by(f64::from(MOOD_RATING.step)),
        )
        .on_hover_text(MOOD_HELP)
        .changed();

    if changed {
        controller.update_inputs(input);
    }
}

fn metric_label(ui: &mut Ui, title: &str, help: &str, muted: eframe::egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(help).small().color(muted));
    });
}
