//! Mapping from a numeric score to its qualitative band.
//!
//! The gauge and the feedback banner both read from [`ScoreBand`], so the
//! 40/70 thresholds live in exactly one place.

use serde::Serialize;

use crate::score::WellnessScore;

/// Highest score (inclusive) classified as [`ScoreBand::NeedsAttention`].
pub const NEEDS_ATTENTION_MAX: f64 = 40.0;
/// Highest score (inclusive) classified as [`ScoreBand::GoodProgress`].
pub const GOOD_PROGRESS_MAX: f64 = 70.0;

/// sRGB color used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BandColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How the feedback banner should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    Error,
    Warning,
    Success,
}

/// Qualitative classification of a wellness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NeedsAttention,
    GoodProgress,
    Excellent,
}

impl ScoreBand {
    /// Bands in ascending score order.
    pub const ALL: [ScoreBand; 3] = [
        ScoreBand::NeedsAttention,
        ScoreBand::GoodProgress,
        ScoreBand::Excellent,
    ];

    /// Classify a raw score. Total over all `f64`; NaN falls into the lowest band.
    pub fn for_value(score: f64) -> Self {
        if score > GOOD_PROGRESS_MAX {
            Self::Excellent
        } else if score > NEEDS_ATTENTION_MAX {
            Self::GoodProgress
        } else {
            Self::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NeedsAttention => "Needs Attention",
            Self::GoodProgress => "Good Progress",
            Self::Excellent => "Excellent",
        }
    }

    /// Needle, bar and number color.
    pub fn color(self) -> BandColor {
        match self {
            Self::NeedsAttention => BandColor::rgb(0xef, 0x44, 0x44),
            Self::GoodProgress => BandColor::rgb(0xf5, 0x9e, 0x0b),
            Self::Excellent => BandColor::rgb(0x10, 0xb9, 0x81),
        }
    }

    /// Background tint for the band's gauge segment.
    pub fn tint(self) -> BandColor {
        match self {
            Self::NeedsAttention => BandColor::rgb(0xfe, 0xf2, 0xf2),
            Self::GoodProgress => BandColor::rgb(0xff, 0xfb, 0xeb),
            Self::Excellent => BandColor::rgb(0xec, 0xfd, 0xf5),
        }
    }

    /// Score interval covered by the band on the 0 to 100 gauge axis.
    pub fn axis_range(self) -> (f64, f64) {
        match self {
            Self::NeedsAttention => (0.0, NEEDS_ATTENTION_MAX),
            Self::GoodProgress => (NEEDS_ATTENTION_MAX, GOOD_PROGRESS_MAX),
            Self::Excellent => (GOOD_PROGRESS_MAX, 100.0),
        }
    }

    pub fn tone(self) -> FeedbackTone {
        match self {
            Self::NeedsAttention => FeedbackTone::Error,
            Self::GoodProgress => FeedbackTone::Warning,
            Self::Excellent => FeedbackTone::Success,
        }
    }

    pub fn feedback_message(self) -> &'static str {
        match self {
            Self::NeedsAttention => "Focus on improving your wellness habits",
            Self::GoodProgress => "You're making good progress!",
            Self::Excellent => "Outstanding wellness habits!",
        }
    }
}

/// Band plus the display attributes derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandPresentation {
    pub band: ScoreBand,
    pub color: BandColor,
    pub label: &'static str,
}

/// Classify a score into its band, color and status label.
pub fn classify(score: WellnessScore) -> BandPresentation {
    let band = ScoreBand::for_value(score.value());
    BandPresentation {
        band,
        color: band.color(),
        label: band.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_of(value: f64) -> ScoreBand {
        classify(WellnessScore::from_raw(value)).band
    }

    #[test]
    fn thresholds_are_closed_at_40_and_70() {
        assert_eq!(band_of(40.0), ScoreBand::NeedsAttention);
        assert_eq!(band_of(40.1), ScoreBand::GoodProgress);
        assert_eq!(band_of(70.0), ScoreBand::GoodProgress);
        assert_eq!(band_of(70.1), ScoreBand::Excellent);
    }

    #[test]
    fn classification_is_total_outside_nominal_scale() {
        assert_eq!(band_of(-15.0), ScoreBand::NeedsAttention);
        assert_eq!(band_of(0.0), ScoreBand::NeedsAttention);
        assert_eq!(band_of(100.0), ScoreBand::Excellent);
        assert_eq!(band_of(250.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_value(f64::NAN), ScoreBand::NeedsAttention);
        assert_eq!(ScoreBand::for_value(f64::NEG_INFINITY), ScoreBand::NeedsAttention);
        assert_eq!(ScoreBand::for_value(f64::INFINITY), ScoreBand::Excellent);
    }

    #[test]
    fn band_matches_interval_definition() {
        for tenth in -200..=1200 {
            let value = f64::from(tenth) / 10.0;
            let expected = if value <= 40.0 {
                ScoreBand::NeedsAttention
            } else if value <= 70.0 {
                ScoreBand::GoodProgress
            } else {
                ScoreBand::Excellent
            };
            assert_eq!(ScoreBand::for_value(value), expected, "score {value}");
        }
    }

    #[test]
    fn presentation_attributes() {
        let presentation = classify(WellnessScore::from_raw(55.0));
        assert_eq!(presentation.label, "Good Progress");
        assert_eq!(presentation.color.hex(), "#f59e0b");
        assert_eq!(ScoreBand::NeedsAttention.color().hex(), "#ef4444");
        assert_eq!(ScoreBand::Excellent.color().hex(), "#10b981");
        assert_eq!(ScoreBand::GoodProgress.tint().hex(), "#fffbeb");
    }

    #[test]
    fn classify_is_idempotent() {
        let score = WellnessScore::from_raw(70.04);
        let first = classify(score);
        for _ in 0..5 {
            assert_eq!(classify(score), first);
        }
    }

    #[test]
    fn feedback_follows_band() {
        assert_eq!(
            ScoreBand::for_value(12.0).feedback_message(),
            "Focus on improving your wellness habits"
        );
        assert_eq!(ScoreBand::for_value(41.0).tone(), FeedbackTone::Warning);
        assert_eq!(
            ScoreBand::for_value(99.0).feedback_message(),
            "Outstanding wellness habits!"
        );
    }
}
