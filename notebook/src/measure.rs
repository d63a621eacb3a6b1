//! Approximate handwriting font metrics.
//!
//! The pen follows the end of the text as it grows, so every revealed prefix
//! is re-measured. Real glyph shaping belongs to the rendering layer; this
//! module gives a deterministic estimate (per-glyph-class advances scaled by
//! the font size plus letter spacing) that is close enough for the pen to
//! land plausibly at the end of the word.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VIEWPORT_HEIGHT_PX, DEFAULT_VIEWPORT_WIDTH_PX, FONT_SIZE_VH, LETTER_SPACING_PX};

/// Width of rendered text, in pixels.
pub trait TextMeasure {
    fn width_px(&self, text: &str) -> f64;
}

/// Overlay size in pixels, used to convert measured widths to percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width_px: DEFAULT_VIEWPORT_WIDTH_PX, height_px: DEFAULT_VIEWPORT_HEIGHT_PX }
    }
}

impl Viewport {
    /// Horizontal pixels as a percentage of the overlay width.
    #[must_use]
    pub fn x_pct(&self, px: f64) -> f64 {
        if self.width_px <= 0.0 {
            return 0.0;
        }
        px / self.width_px * 100.0
    }
}

/// Advance widths for the handwriting face, as fractions of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub font_size_px: f64,
    pub letter_spacing_px: f64,
}

impl FontMetrics {
    /// Metrics for the notebook face at `viewport`'s height (`4vh`).
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self { font_size_px: viewport.height_px * FONT_SIZE_VH, letter_spacing_px: LETTER_SPACING_PX }
    }

    fn advance_em(ch: char) -> f64 {
        match ch {
            ' ' => 0.25,
            'i' | 'l' | 'j' | '!' | '|' | '.' | ',' | ':' | ';' | '\'' => 0.22,
            'f' | 't' | 'r' | 'I' | 'J' | '(' | ')' | '-' => 0.32,
            'm' | 'w' => 0.58,
            'M' | 'W' | '@' => 0.66,
            c if c.is_ascii_digit() => 0.42,
            c if c.is_ascii_uppercase() => 0.5,
            c if c.is_ascii_lowercase() => 0.4,
            // Wide scripts and symbols: assume a full em.
            c if c.is_alphabetic() && !c.is_ascii() => 0.9,
            _ => 0.45,
        }
    }
}

impl TextMeasure for FontMetrics {
    fn width_px(&self, text: &str) -> f64 {
        text.chars()
            .map(|ch| Self::advance_em(ch) * self.font_size_px + self.letter_spacing_px)
            .sum()
    }
}

#[cfg(test)]
#[path = "measure_test.rs"]
mod tests;
