//! Theme derivation — builds a full token set from one or two brand colors.
//!
//! Pure and total: the same inputs always yield the same theme, and every
//! well-formed input yields a complete one.
//!
//! # Rules
//! - Banner text follows the banner's light/dark class.
//! - Body headings use the brand color only when it is dark enough to read;
//!   otherwise a fixed neutral dark is substituted.
//! - Muted and subtle text never depend on the brand.
//! - Without a secondary color, every secondary-accent role collapses onto
//!   the primary.

use tracing::debug;

use crate::theme::color::{Color, ThemeError, GRAY_200, GRAY_500, GRAY_600, NEUTRAL_DARK};
use crate::theme::luminance::{is_dark_enough_for_main_text, is_light};
use crate::theme::tokens::{TextRole, ThemeTokenSet};
use crate::theme::transform::{darken, optimal_badge_text_color};

/// Darkening applied to a light banner's color for its secondary text.
const BANNER_SECONDARY_DARKEN: f64 = 0.2;
/// Darkening applied to the primary for de-emphasized body headings.
const BODY_SECONDARY_DARKEN: f64 = 0.1;

pub fn derive_theme(primary: Color, secondary: Option<Color>) -> ThemeTokenSet {
    let banner_is_light = is_light(primary);

    let (banner_heading_text, banner_secondary_text) = if banner_is_light {
        (TextRole::DarkText, darken(primary, BANNER_SECONDARY_DARKEN))
    } else {
        (TextRole::LightText, GRAY_200)
    };

    let body_heading_text = if is_dark_enough_for_main_text(primary) {
        primary
    } else {
        NEUTRAL_DARK
    };

    let accent = secondary.unwrap_or(primary);

    debug!(
        %primary,
        secondary = ?secondary.map(|c| c.to_hex()),
        banner_is_light,
        "Derived theme"
    );

    ThemeTokenSet {
        banner_background: primary,
        banner_heading_text,
        banner_secondary_text,
        body_heading_text,
        body_secondary_text: darken(primary, BODY_SECONDARY_DARKEN),
        muted_text: GRAY_600,
        subtle_text: GRAY_500,
        badge_background: accent,
        badge_text: optimal_badge_text_color(accent),
        section_border: primary,
        brand_primary_text: primary,
        brand_secondary_text: accent,
    }
}

/// Parses both inputs before deriving; a malformed color fails the whole call.
pub fn derive_theme_from_hex(
    primary: &str,
    secondary: Option<&str>,
) -> Result<ThemeTokenSet, ThemeError> {
    let primary = Color::from_hex(primary)?;
    let secondary = secondary.map(Color::from_hex).transpose()?;
    Ok(derive_theme(primary, secondary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_derive_is_pure() {
        let a = derive_theme(hex("#232F3E"), Some(hex("#FF9900")));
        let b = derive_theme(hex("#232F3E"), Some(hex("#FF9900")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_secondary_present_no_fallback() {
        let t = derive_theme(hex("#4285F4"), Some(hex("#EA4335")));
        assert_eq!(t.badge_background, hex("#EA4335"));
        assert_eq!(t.brand_secondary_text, hex("#EA4335"));
        assert_eq!(t.brand_primary_text, hex("#4285F4"));
    }

    #[test]
    fn test_secondary_absent_collapses_onto_primary() {
        let t = derive_theme(hex("#00d647"), None);
        assert_eq!(t.badge_background, hex("#00d647"));
        assert_eq!(t.brand_secondary_text, hex("#00d647"));
    }

    #[test]
    fn test_dark_banner_gets_white_heading() {
        let t = derive_theme(hex("#232F3E"), Some(hex("#FF9900")));
        assert_eq!(t.banner_background, hex("#232F3E"));
        assert_eq!(t.banner_heading_text, TextRole::LightText);
        assert_eq!(t.banner_secondary_text, GRAY_200);
        // Amazon navy is dark enough to carry body headings itself.
        assert_eq!(t.body_heading_text, hex("#232F3E"));
        assert_eq!(t.badge_text, TextRole::DarkText);
    }

    #[test]
    fn test_light_banner_gets_dark_heading_and_darkened_secondary() {
        let t = derive_theme(hex("#00d647"), Some(hex("#2d3748")));
        assert_eq!(t.banner_heading_text, TextRole::DarkText);
        assert_eq!(t.banner_secondary_text.to_hex(), "#00ab39");
        assert_eq!(t.badge_text, TextRole::LightText);
    }

    #[test]
    fn test_light_brand_falls_back_to_neutral_body_text() {
        let t = derive_theme(hex("#00d647"), None);
        assert_eq!(t.body_heading_text, NEUTRAL_DARK);
        assert_eq!(t.body_secondary_text.to_hex(), "#00c140");
    }

    #[test]
    fn test_neutrals_ignore_brand() {
        let a = derive_theme(hex("#141414"), Some(hex("#E50914")));
        let b = derive_theme(hex("#00AEEF"), None);
        assert_eq!(a.muted_text, GRAY_600);
        assert_eq!(a.subtle_text, GRAY_500);
        assert_eq!(a.muted_text, b.muted_text);
        assert_eq!(a.subtle_text, b.subtle_text);
    }

    #[test]
    fn test_border_tracks_primary() {
        let t = derive_theme(hex("#003c71"), Some(hex("#00AEEF")));
        assert_eq!(t.section_border, hex("#003c71"));
    }

    #[test]
    fn test_from_hex_rejects_bad_primary() {
        let err = derive_theme_from_hex("232F3E", None).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_from_hex_rejects_bad_secondary() {
        assert!(derive_theme_from_hex("#232F3E", Some("#232F3")).is_err());
    }

    #[test]
    fn test_from_hex_matches_typed_derivation() {
        let from_hex = derive_theme_from_hex("#232F3E", Some("#FF9900")).unwrap();
        let typed = derive_theme(hex("#232F3E"), Some(hex("#FF9900")));
        assert_eq!(from_hex, typed);
    }
}
