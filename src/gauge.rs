//! Half-circle gauge description for a wellness score.
//!
//! This is the chart configuration in data form: the renderer only turns
//! fractions and colors into shapes.

use std::f32::consts::PI;

use crate::band::{BandColor, ScoreBand, classify};
use crate::score::WellnessScore;

/// Lower end of the gauge axis.
pub const AXIS_MIN: f64 = 0.0;
/// Upper end of the gauge axis.
pub const AXIS_MAX: f64 = 100.0;
/// Suffix drawn after the score number.
pub const NUMBER_SUFFIX: &str = "/100";

/// Background region of the gauge arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSegment {
    pub band: ScoreBand,
    pub start: f64,
    pub end: f64,
    pub tint: BandColor,
}

impl GaugeSegment {
    /// Axis fractions covered by the segment.
    pub fn fractions(&self) -> (f32, f32) {
        (axis_fraction(self.start), axis_fraction(self.end))
    }
}

/// Everything needed to draw the gauge for one score.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeModel {
    pub score: WellnessScore,
    pub band: ScoreBand,
    /// Bar, threshold marker and number color.
    pub color: BandColor,
    /// Band label shown above the dial.
    pub title: &'static str,
    pub segments: [GaugeSegment; 3],
}

impl GaugeModel {
    pub fn for_score(score: WellnessScore) -> Self {
        let presentation = classify(score);
        Self {
            score,
            band: presentation.band,
            color: presentation.color,
            title: presentation.label,
            segments: segments(),
        }
    }

    /// Needle position along the axis, clamped to `[0, 1]` for drawing.
    pub fn fraction(&self) -> f32 {
        axis_fraction(self.score.value())
    }

    /// Score text, never clamped.
    pub fn number_text(&self) -> String {
        self.score.to_string()
    }
}

/// Banded background regions at the classification breakpoints.
pub fn segments() -> [GaugeSegment; 3] {
    ScoreBand::ALL.map(|band| {
        let (start, end) = band.axis_range();
        GaugeSegment {
            band,
            start,
            end,
            tint: band.tint(),
        }
    })
}

/// Map an axis value to `[0, 1]`, clamping values outside the axis.
pub fn axis_fraction(value: f64) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    ((value - AXIS_MIN) / (AXIS_MAX - AXIS_MIN)).clamp(0.0, 1.0) as f32
}

/// Angle in radians for an axis fraction: `PI` at the left end, `0` at the right.
///
/// Screen y grows downward, so callers draw at `(cos, -sin)`.
pub fn angle_for(fraction: f32) -> f32 {
    PI * (1.0 - fraction.clamp(0.0, 1.0))
}
