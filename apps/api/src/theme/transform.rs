use crate::theme::color::Color;
use crate::theme::luminance::is_light;
use crate::theme::tokens::TextRole;

pub const DEFAULT_DARKEN_FACTOR: f64 = 0.3;

/// Scales every channel by `(1 - factor)`, rounding half away from zero.
///
/// `factor` must lie in `[0, 1]`; anything else is a caller error. It is
/// asserted in debug builds and NOT clamped: release builds saturate at the
/// `u8` bounds through the float cast.
pub fn darken(color: Color, factor: f64) -> Color {
    debug_assert!(
        (0.0..=1.0).contains(&factor),
        "darken factor {factor} outside [0, 1]"
    );

    let scale = |channel: u8| (channel as f64 * (1.0 - factor)).round() as u8;
    Color::rgb(scale(color.r), scale(color.g), scale(color.b))
}

/// Legible text for a colored badge or button: dark on light, light on dark.
pub fn optimal_badge_text_color(background: Color) -> TextRole {
    if is_light(background) {
        TextRole::DarkText
    } else {
        TextRole::LightText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_zero_factor_is_identity() {
        for c in ["#000000", "#FFFFFF", "#232F3E", "#00d647", "#7f7f81"] {
            assert_eq!(darken(hex(c), 0.0), hex(c), "darken({c}, 0) must be identity");
        }
    }

    #[test]
    fn test_half_rounds_up() {
        // 255 * 0.5 = 127.5 → 128
        assert_eq!(darken(hex("#FFFFFF"), 0.5).to_hex(), "#808080");
    }

    #[test]
    fn test_full_factor_is_black() {
        assert_eq!(darken(hex("#EA4335"), 1.0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_per_channel_rounding() {
        // 214 * 0.9 = 192.6 → 193, 71 * 0.9 = 63.9 → 64
        assert_eq!(darken(hex("#00d647"), 0.1).to_hex(), "#00c140");
        // 66 * 0.9 = 59.4 → 59, 133 * 0.9 = 119.7 → 120, 244 * 0.9 = 219.6 → 220
        assert_eq!(darken(hex("#4285F4"), 0.1).to_hex(), "#3b78dc");
    }

    #[test]
    fn test_default_factor() {
        // 255 * 0.7 = 178.5 → 179
        assert_eq!(darken(hex("#FFFFFF"), DEFAULT_DARKEN_FACTOR).to_hex(), "#b3b3b3");
    }

    #[test]
    fn test_badge_text_for_amazon_colors() {
        assert_eq!(optimal_badge_text_color(hex("#FF9900")), TextRole::DarkText);
        assert_eq!(optimal_badge_text_color(hex("#232F3E")), TextRole::LightText);
    }
}
