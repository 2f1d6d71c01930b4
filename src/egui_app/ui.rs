//! egui renderer for the calculator window.

mod feedback;
mod gauge;
mod metrics;
pub mod style;

use crate::egui_app::controller::WellnessController;
use crate::startup::{self, StartupError};
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Vec2};

/// Smallest window size that keeps both columns readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = egui::vec2(760.0, 600.0);
/// Initial window size.
pub const DEFAULT_VIEWPORT_SIZE: Vec2 = egui::vec2(1040.0, 720.0);

const CARD_MIN_HEIGHT: f32 = 400.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: WellnessController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: WellnessController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    /// Load settings and the shared model, then build the app.
    pub fn launch() -> Result<Self, StartupError> {
        let settings = startup::load_settings()?;
        let scorer = startup::shared_scorer(&settings)?;
        let controller = WellnessController::new(scorer, settings.ui.initial_input());
        Ok(Self::new(controller))
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.card_fill)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 5.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    fn render_header(ui: &mut egui::Ui) {
        ui.heading(RichText::new("🌿 Wellness Calculator").size(28.0).strong());
        ui.label(RichText::new("Track your daily wellness metrics").color(style::palette().text_muted));
        ui.add_space(12.0);
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.card_fill)
            .stroke(style::card_border())
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(18))
            .show(ui, |ui| {
                ui.set_min_height(CARD_MIN_HEIGHT);
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(Frame::new().inner_margin(Margin::same(20)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    Self::render_header(ui);
                    let controller = &mut self.controller;
                    ui.columns(2, |columns| {
                        Self::card(&mut columns[0], |ui| {
                            metrics::render_metrics_panel(ui, controller);
                        });
                        Self::card(&mut columns[1], |ui| {
                            gauge::render_score_panel(ui, &controller.ui.result);
                        });
                    });
                    ui.add_space(12.0);
                    ui.separator();
                    feedback::render_feedback(ui, &self.controller.ui.result);
                    feedback::render_footer(ui);
                });
            });
    }
}
