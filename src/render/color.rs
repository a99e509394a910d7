use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Visual prominence of one slice relative to the global hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTier {
    /// The hovered owner itself, or no hover anywhere: mid-dimmed base tone.
    Focused,
    /// A different owner in the hovered owner's process: lightened and
    /// desaturated, still tinted.
    SameGroup,
    /// Unrelated to the hovered owner: near-white, fully desaturated.
    Unrelated,
}

/// HSL color with hue in degrees and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColor {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Applies the per-tier dimming used by the slice pass.
    #[must_use]
    pub fn dimmed(self, tier: HoverTier) -> Self {
        match tier {
            HoverTier::Unrelated => Self {
                hue: self.hue,
                saturation: 0.0,
                lightness: 90.0,
            },
            HoverTier::SameGroup => Self {
                hue: self.hue,
                saturation: (self.saturation - 20.0).max(0.0),
                lightness: (self.lightness + 30.0).min(80.0),
            },
            HoverTier::Focused => Self {
                hue: self.hue,
                saturation: (self.saturation - 20.0).max(0.0),
                lightness: (self.lightness + 10.0).min(60.0),
            },
        }
    }

    /// Converts to normalized RGBA.
    #[must_use]
    pub fn to_color(self) -> Color {
        let hue = self.hue.rem_euclid(360.0);
        let saturation = (self.saturation / 100.0).clamp(0.0, 1.0);
        let lightness = (self.lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let hue_sector = hue / 60.0;
        let secondary = chroma * (1.0 - (hue_sector % 2.0 - 1.0).abs());
        let offset = lightness - chroma / 2.0;

        let (red, green, blue) = match hue_sector {
            h if h < 1.0 => (chroma, secondary, 0.0),
            h if h < 2.0 => (secondary, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, secondary),
            h if h < 4.0 => (0.0, secondary, chroma),
            h if h < 5.0 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        Color::rgb(red + offset, green + offset, blue + offset)
    }
}
