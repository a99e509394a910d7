use serde::{Deserialize, Serialize};

/// Text measurement seam so the core stays independent of any font backend.
///
/// Hosts with a real text stack can measure properly; the default estimates
/// from a fixed width-to-size ratio, which is enough for truncation and
/// tooltip sizing decisions.
pub trait TextMeasurer {
    /// Average glyph advance for the given font size.
    fn average_char_width(&self, font_size_px: f64) -> f64;

    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * self.average_char_width(font_size_px)
    }
}

/// Estimates glyph width as a fixed fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedRatioTextMeasurer {
    pub width_per_font_px: f64,
}

impl Default for FixedRatioTextMeasurer {
    fn default() -> Self {
        Self {
            width_per_font_px: 0.6,
        }
    }
}

impl TextMeasurer for FixedRatioTextMeasurer {
    fn average_char_width(&self, font_size_px: f64) -> f64 {
        font_size_px * self.width_per_font_px
    }
}

/// Keeps as many leading characters as fit in `rect_width`, reserving room
/// for a three-character ellipsis. Returns the input unchanged when it fits,
/// and an empty string when not even the ellipsis would.
#[must_use]
pub fn crop_text(text: &str, char_width: f64, rect_width: f64) -> String {
    let max_text_width = rect_width - 4.0;
    let full_width = text.chars().count() as f64 * char_width;
    if full_width < max_text_width {
        return text.to_owned();
    }

    // -3 for the 3 ellipsis characters.
    let displayed_chars = (max_text_width / char_width).floor() as i64 - 3;
    if displayed_chars > 3 {
        let mut cropped: String = text.chars().take(displayed_chars as usize).collect();
        cropped.push_str("...");
        cropped
    } else {
        String::new()
    }
}
