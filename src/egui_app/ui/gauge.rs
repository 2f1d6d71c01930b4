use eframe::egui::{self, Align2, FontId, Pos2, RichText, Sense, Stroke, Ui, pos2, vec2};

use super::style;
use crate::egui_app::state::ScoreState;
use crate::gauge::{self, GaugeModel, NUMBER_SUFFIX};

/// Polyline points per full half circle.
const ARC_RESOLUTION: f32 = 64.0;
const MAX_GAUGE_WIDTH: f32 = 460.0;
const TICK_STEP: usize = 20;

pub(super) fn render_score_panel(ui: &mut Ui, result: &ScoreState) {
    match result {
        ScoreState::Ready(view) => render_gauge(ui, &view.gauge),
        ScoreState::Failed(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    RichText::new("Unable to compute a score")
                        .strong()
                        .size(20.0)
                        .color(style::status_badge_color(style::StatusTone::Error)),
                );
                ui.label(RichText::new(message).color(style::palette().text_muted));
            });
        }
    }
}

fn render_gauge(ui: &mut Ui, gauge: &GaugeModel) {
    let palette = style::palette();
    let bar_color = style::band_color(gauge.color);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(gauge.title)
                .strong()
                .size(22.0)
                .color(palette.text_primary),
        );
    });

    let width = ui.available_width().min(MAX_GAUGE_WIDTH);
    let radius = (width * 0.5 - 28.0).max(40.0);
    let band_width = radius * 0.3;
    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), radius + 64.0), Sense::hover());
    let rect = response.rect;
    let center = pos2(rect.center().x, rect.top() + radius + 20.0);
    let mid_radius = radius - band_width * 0.5;

    for segment in &gauge.segments {
        let (start, end) = segment.fractions();
        painter.add(egui::Shape::line(
            arc_points(center, mid_radius, start, end),
            Stroke::new(band_width, style::band_color(segment.tint)),
        ));
    }

    let fraction = gauge.fraction();
    if fraction > 0.0 {
        painter.add(egui::Shape::line(
            arc_points(center, mid_radius, 0.0, fraction),
            Stroke::new(band_width * 0.25, bar_color),
        ));
    }
    painter.line_segment(
        [
            point_on_arc(center, radius - band_width * 0.9, fraction),
            point_on_arc(center, radius + 2.0, fraction),
        ],
        Stroke::new(6.0, bar_color),
    );

    for tick in (0..=100).step_by(TICK_STEP) {
        let tick_fraction = gauge::axis_fraction(tick as f64);
        painter.line_segment(
            [
                point_on_arc(center, radius + 2.0, tick_fraction),
                point_on_arc(center, radius + 8.0, tick_fraction),
            ],
            Stroke::new(2.0, palette.tick),
        );
        painter.text(
            point_on_arc(center, radius + 18.0, tick_fraction),
            Align2::CENTER_CENTER,
            tick.to_string(),
            FontId::proportional(12.0),
            palette.text_muted,
        );
    }

    let number_rect = painter.text(
        center - vec2(12.0, radius * 0.2),
        Align2::CENTER_CENTER,
        gauge.number_text(),
        FontId::proportional(radius * 0.36),
        bar_color,
    );
    painter.text(
        pos2(number_rect.right() + 2.0, number_rect.bottom() - 6.0),
        Align2::LEFT_BOTTOM,
        NUMBER_SUFFIX,
        FontId::proportional(18.0),
        palette.text_muted,
    );
}

/// Screen position at `fraction` along a half circle opening downward.
fn point_on_arc(center: Pos2, radius: f32, fraction: f32) -> Pos2 {
    let angle = gauge::angle_for(fraction);
    center + vec2(angle.cos(), -angle.sin()) * radius
}

/// Polyline approximating the arc between two axis fractions.
fn arc_points(center: Pos2, radius: f32, from: f32, to: f32) -> Vec<Pos2> {
    let span = (to - from).max(0.0);
    let steps = ((span * ARC_RESOLUTION).ceil() as usize).max(1);
    (0..=steps)
        .map(|step| point_on_arc(center, radius, from + span * step as f32 / steps as f32))
        .collect()
}
