//! Bar color policies.
//!
//! Two policies coexist: a score-linear hue ramp (red for low scores, green
//! for high ones) and a fixed named palette rotated by rank position.

use serde::{Deserialize, Serialize};

use crate::render::Color;

pub const SCORE_HUE_RANGE_DEG: f64 = 120.0;
pub const SCORE_SATURATION_PCT: f64 = 70.0;
pub const SCORE_LIGHTNESS_PCT: f64 = 50.0;

/// Color policy applied to single-series bars of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorPolicy {
    /// `hue = score * 120`, fixed saturation/lightness.
    #[default]
    ScoreLinear,
    /// `MODEL_PALETTE[rank % MODEL_PALETTE.len()]`, independent of score.
    PaletteRotation,
}

impl ColorPolicy {
    /// Resolves the fill color for the bar at `rank` (0-based, after sorting).
    #[must_use]
    pub fn bar_color(self, score: f64, rank: usize, opacity: f64) -> Color {
        match self {
            Self::ScoreLinear => score_linear_color(score, opacity).to_color(),
            Self::PaletteRotation => palette_color(rank).color(opacity),
        }
    }
}

/// HSL color with alpha; hue in degrees, saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslaColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl HslaColor {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        Color::rgba(
            (r + m).clamp(0.0, 1.0),
            (g + m).clamp(0.0, 1.0),
            (b + m).clamp(0.0, 1.0),
            self.alpha.clamp(0.0, 1.0),
        )
    }
}

/// Maps a [0, 1] score onto the red→green hue ramp.
#[must_use]
pub fn score_linear_color(score: f64, opacity: f64) -> HslaColor {
    HslaColor::new(
        score.clamp(0.0, 1.0) * SCORE_HUE_RANGE_DEG,
        SCORE_SATURATION_PCT,
        SCORE_LIGHTNESS_PCT,
        opacity,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl NamedColor {
    const fn new(name: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            name,
            red,
            green,
            blue,
        }
    }

    #[must_use]
    pub fn color(self, opacity: f64) -> Color {
        Color::from_rgb8(self.red, self.green, self.blue, opacity.clamp(0.0, 1.0))
    }
}

pub const MODEL_PALETTE: [NamedColor; 20] = [
    NamedColor::new("royal blue", 65, 105, 225),
    NamedColor::new("crimson", 220, 20, 60),
    NamedColor::new("forest green", 34, 139, 34),
    NamedColor::new("dark orange", 255, 140, 0),
    NamedColor::new("medium purple", 147, 112, 219),
    NamedColor::new("teal", 0, 128, 128),
    NamedColor::new("goldenrod", 218, 165, 32),
    NamedColor::new("deep pink", 255, 20, 147),
    NamedColor::new("sienna", 160, 82, 45),
    NamedColor::new("steel blue", 70, 130, 180),
    NamedColor::new("olive drab", 107, 142, 35),
    NamedColor::new("tomato", 255, 99, 71),
    NamedColor::new("slate gray", 112, 128, 144),
    NamedColor::new("dark cyan", 0, 139, 139),
    NamedColor::new("orchid", 218, 112, 214),
    NamedColor::new("chocolate", 210, 105, 30),
    NamedColor::new("cadet blue", 95, 158, 160),
    NamedColor::new("indian red", 205, 92, 92),
    NamedColor::new("dark khaki", 189, 183, 107),
    NamedColor::new("midnight blue", 25, 25, 112),
];

#[must_use]
pub fn palette_color(rank: usize) -> NamedColor {
    MODEL_PALETTE[rank % MODEL_PALETTE.len()]
}
