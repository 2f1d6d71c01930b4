//! Bridges slider input to the scoring pipeline.

use crate::egui_app::state::{ScoreState, StatusBarState, UiState};
use crate::egui_app::view_model;
use crate::score::{DAILY_STEPS, MOOD_RATING, SLEEP_HOURS, Scorer, WellnessInput, WellnessScore};

/// Maintains app state and re-scores on every input change.
pub struct WellnessController {
    pub ui: UiState,
    scorer: Scorer,
    ready_status: StatusBarState,
}

impl WellnessController {
    /// Create a controller and score the initial input immediately.
    pub fn new(scorer: Scorer, initial: WellnessInput) -> Self {
        let ready_status = StatusBarState::ready(&scorer.model().describe());
        let inputs = clamp_input(initial);
        let (result, status) = evaluate(&scorer, &inputs, &ready_status);
        Self {
            ui: UiState {
                inputs,
                result,
                status,
            },
            scorer,
            ready_status,
        }
    }

    pub fn inputs(&self) -> WellnessInput {
        self.ui.inputs
    }

    /// Latest successfully computed score.
    pub fn score(&self) -> Option<WellnessScore> {
        self.ui.result.view().map(|view| view.gauge.score)
    }

    pub fn set_sleep_hours(&mut self, hours: f32) {
        self.update_inputs(WellnessInput {
            sleep_hours: hours,
            ..self.ui.inputs
        });
    }

    pub fn set_steps(&mut self, steps: u32) {
        self.update_inputs(WellnessInput {
            steps,
            ..self.ui.inputs
        });
    }

    pub fn set_mood_rating(&mut self, rating: u8) {
        self.update_inputs(WellnessInput {
            mood_rating: rating,
            ..self.ui.inputs
        });
    }

    /// Apply a full input snapshot, re-scoring only when something changed.
    pub fn update_inputs(&mut self, input: WellnessInput) {
        let input = clamp_input(input);
        if input == self.ui.inputs {
            return;
        }
        self.ui.inputs = input;
        self.recompute();
    }

    /// Score the current inputs and refresh the gauge and feedback.
    pub fn recompute(&mut self) {
        let (result, status) = evaluate(&self.scorer, &self.ui.inputs, &self.ready_status);
        self.ui.result = result;
        self.ui.status = status;
    }
}

fn evaluate(
    scorer: &Scorer,
    inputs: &WellnessInput,
    ready_status: &StatusBarState,
) -> (ScoreState, StatusBarState) {
    match scorer.score(inputs) {
        Ok(score) => {
            tracing::debug!("Scored {inputs:?} -> {score}");
            (
                ScoreState::Ready(view_model::score_view(score)),
                ready_status.clone(),
            )
        }
        Err(err) => {
            tracing::warn!("Scoring failed for {inputs:?}: {err}");
            (
                ScoreState::Failed(err.to_string()),
                StatusBarState::error(format!("Scoring failed: {err}")),
            )
        }
    }
}

fn clamp_input(input: WellnessInput) -> WellnessInput {
    WellnessInput::new(
        SLEEP_HOURS.snap(input.sleep_hours),
        DAILY_STEPS.snap(input.steps),
        MOOD_RATING.clamp(input.mood_rating),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::ScoreBand;
    use crate::ml::{FeatureRow, PredictiveModel};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns `sleep * 10`, or NaN when mood is 10, and counts calls.
    #[derive(Debug, Default)]
    struct SleepModel {
        names: Vec<String>,
        calls: AtomicUsize,
    }

    impl PredictiveModel for SleepModel {
        fn feature_names(&self) -> &[String] {
            &self.names
        }

        fn predict(&self, row: &FeatureRow) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if row[2] == 10.0 { f64::NAN } else { row[0] * 10.0 }
        }

        fn describe(&self) -> String {
            "sleep model".into()
        }
    }

    fn controller() -> (WellnessController, Arc<SleepModel>) {
        let model = Arc::new(SleepModel::default());
        let scorer = Scorer::new(model.clone(), true);
        (WellnessController::new(scorer, WellnessInput::default()), model)
    }

    #[test]
    fn scores_initial_input_on_creation() {
        let (controller, model) = controller();
        assert_eq!(controller.score().map(|s| s.value()), Some(75.0));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.ui.status.text, "Model: sleep model");
        let view = controller.ui.result.view().unwrap();
        assert_eq!(view.gauge.band, ScoreBand::Excellent);
        assert_eq!(view.feedback.message, "Outstanding wellness habits!");
    }

    #[test]
    fn initial_failure_is_visible_immediately() {
        let scorer = Scorer::new(Arc::new(SleepModel::default()), true);
        let controller = WellnessController::new(scorer, WellnessInput::new(7.5, 8000, 10));
        assert!(matches!(controller.ui.result, ScoreState::Failed(_)));
        assert_eq!(controller.ui.status.badge_label, "Error");
        assert!(controller.ui.status.text.starts_with("Scoring failed"));
    }

    #[test]
    fn slider_changes_rescore_once() {
        let (mut controller, model) = controller();
        controller.set_sleep_hours(4.0);
        assert_eq!(controller.score().map(|s| s.value()), Some(40.0));
        assert_eq!(
            controller.ui.result.view().unwrap().gauge.band,
            ScoreBand::NeedsAttention
        );
        controller.set_sleep_hours(4.0);
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn out_of_range_values_are_clamped_to_sliders() {
        let (mut controller, _) = controller();
        controller.set_sleep_hours(30.0);
        controller.set_steps(40_000);
        controller.set_mood_rating(0);
        assert_eq!(controller.inputs(), WellnessInput::new(12.0, 25_000, 1));
        assert_eq!(controller.score().map(|s| s.value()), Some(120.0));
    }

    #[test]
    fn scoring_failure_is_reported_and_recovers() {
        let (mut controller, _) = controller();
        controller.set_mood_rating(10);
        assert!(matches!(controller.ui.result, ScoreState::Failed(_)));
        assert_eq!(controller.score(), None);
        assert_eq!(controller.ui.status.badge_label, "Error");

        controller.set_mood_rating(9);
        assert_eq!(controller.score().map(|s| s.value()), Some(75.0));
        assert_eq!(controller.ui.status.badge_label, "Ready");
    }
}
