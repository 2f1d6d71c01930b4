use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::band::{BandColor, FeedbackTone};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_page: Color32,
    pub card_fill: Color32,
    pub card_outline: Color32,
    pub widget_fill: Color32,
    pub gauge_face: Color32,
    pub tick: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub info_fill: Color32,
    pub info_text: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_page: Color32::from_rgb(250, 250, 251),
        card_fill: Color32::from_rgb(0xf8, 0xf9, 0xfa),
        card_outline: Color32::from_rgb(0xe9, 0xec, 0xef),
        widget_fill: Color32::from_rgb(0xe5, 0xe7, 0xeb),
        gauge_face: Color32::WHITE,
        tick: Color32::from_rgb(0xe5, 0xe7, 0xeb),
        text_primary: Color32::from_rgb(0x1f, 0x29, 0x37),
        text_muted: Color32::from_rgb(0x6b, 0x72, 0x80),
        accent: Color32::from_rgb(0x10, 0xb9, 0x81),
        info_fill: Color32::from_rgb(0xe7, 0xf1, 0xfd),
        info_text: Color32::from_rgb(0x1e, 0x4f, 0x8a),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_page;
    visuals.panel_fill = palette.bg_page;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.gauge_face;
    visuals.faint_bg_color = palette.card_fill;
    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.slider_trailing_fill = true;
    visuals.widgets.noninteractive.bg_fill = palette.card_fill;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.widget_fill;
    vis.weak_bg_fill = palette.card_outline;
    vis.bg_stroke = Stroke::new(1.0, palette.card_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Border drawn around the metrics and gauge cards.
pub fn card_border() -> Stroke {
    Stroke::new(1.0, palette().card_outline)
}

pub fn band_color(color: BandColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Background and text color for the feedback banner.
pub fn feedback_colors(tone: FeedbackTone) -> (Color32, Color32) {
    match tone {
        FeedbackTone::Error => (
            Color32::from_rgb(0xfd, 0xec, 0xea),
            Color32::from_rgb(0x8a, 0x1c, 0x1c),
        ),
        FeedbackTone::Warning => (
            Color32::from_rgb(0xff, 0xf8, 0xe1),
            Color32::from_rgb(0x7a, 0x4f, 0x01),
        ),
        FeedbackTone::Success => (
            Color32::from_rgb(0xe6, 0xf6, 0xec),
            Color32::from_rgb(0x14, 0x6c, 0x43),
        ),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Ready,
    Error,
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Ready => Color32::from_rgb(0x10, 0xb9, 0x81),
        StatusTone::Error => Color32::from_rgb(0xef, 0x44, 0x44),
    }
}
