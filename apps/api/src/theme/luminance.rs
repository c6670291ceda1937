//! Luminance classification.
//!
//! The weights are the BT.601 perceptual approximation, NOT linear-light
//! luminance. Existing palettes were tuned against these exact coefficients,
//! so they must not change.

use crate::theme::color::Color;

const R_WEIGHT: f64 = 0.299;
const G_WEIGHT: f64 = 0.587;
const B_WEIGHT: f64 = 0.114;

/// Above this a color is light (strict).
pub const LIGHT_THRESHOLD: f64 = 0.5;
/// Below this a color is legible as body text on a light page (strict).
pub const MAIN_TEXT_THRESHOLD: f64 = 0.3;

/// `(0.299 R + 0.587 G + 0.114 B) / 255`, always within `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    (R_WEIGHT * color.r as f64 + G_WEIGHT * color.g as f64 + B_WEIGHT * color.b as f64) / 255.0
}

/// Classifies a raw luminance value. Exactly 0.5 is dark.
pub fn is_light_luminance(luminance: f64) -> bool {
    luminance > LIGHT_THRESHOLD
}

pub fn is_light(color: Color) -> bool {
    is_light_luminance(relative_luminance(color))
}

/// Whether a brand color can itself serve as main text, or a neutral dark
/// must be substituted.
pub fn is_dark_enough_for_main_text(color: Color) -> bool {
    relative_luminance(color) < MAIN_TEXT_THRESHOLD
}
