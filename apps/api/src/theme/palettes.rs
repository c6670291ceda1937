//! Hand-authored company palettes.
//!
//! These predate the deriver and are kept verbatim as reference fixtures. They
//! do not all follow the derivation rules (e.g. Google uses a darker blue for
//! body headings than for its banner) and some fail the contrast validation;
//! that is reported, not corrected.

use crate::theme::color::{Color, GRAY_100, GRAY_200, GRAY_500, GRAY_600};
use crate::theme::tokens::{TextRole, ThemeTokenSet};

pub const AMAZON: ThemeTokenSet = ThemeTokenSet {
    banner_background: Color::rgb(0x23, 0x2f, 0x3e),
    banner_heading_text: TextRole::LightText,
    banner_secondary_text: GRAY_200,
    body_heading_text: Color::rgb(0x23, 0x2f, 0x3e),
    body_secondary_text: Color::rgb(0x37, 0x47, 0x5a),
    muted_text: GRAY_600,
    subtle_text: GRAY_500,
    badge_background: Color::rgb(0xff, 0x99, 0x00),
    badge_text: TextRole::DarkText,
    section_border: Color::rgb(0x23, 0x2f, 0x3e),
    brand_primary_text: Color::rgb(0x23, 0x2f, 0x3e),
    brand_secondary_text: Color::rgb(0xff, 0x99, 0x00),
};

pub const COHESITY: ThemeTokenSet = ThemeTokenSet {
    banner_background: Color::rgb(0x00, 0xd6, 0x47),
    banner_heading_text: TextRole::LightText,
    banner_secondary_text: GRAY_100,
    body_heading_text: Color::rgb(0x2d, 0x37, 0x48),
    body_secondary_text: Color::rgb(0x4a, 0x55, 0x68),
    muted_text: GRAY_600,
    subtle_text: GRAY_500,
    badge_background: Color::rgb(0x2d, 0x37, 0x48),
    badge_text: TextRole::LightText,
    section_border: Color::rgb(0x2d, 0x37, 0x48),
    brand_primary_text: Color::rgb(0x2d, 0x37, 0x48),
    brand_secondary_text: Color::rgb(0x2d, 0x37, 0x48),
};

pub const NETFLIX: ThemeTokenSet = ThemeTokenSet {
    banner_background: Color::rgb(0x14, 0x14, 0x14),
    banner_heading_text: TextRole::LightText,
    banner_secondary_text: GRAY_200,
    body_heading_text: Color::rgb(0x22, 0x1f, 0x1f),
    body_secondary_text: Color::rgb(0x56, 0x4d, 0x4d),
    muted_text: GRAY_600,
    subtle_text: GRAY_500,
    badge_background: Color::rgb(0xe5, 0x09, 0x14),
    badge_text: TextRole::LightText,
    section_border: Color::rgb(0x22, 0x1f, 0x1f),
    brand_primary_text: Color::rgb(0x22, 0x1f, 0x1f),
    brand_secondary_text: Color::rgb(0xe5, 0x09, 0x14),
};

pub const GOOGLE: ThemeTokenSet = ThemeTokenSet {
    banner_background: Color::rgb(0x42, 0x85, 0xf4),
    banner_heading_text: TextRole::LightText,
    banner_secondary_text: GRAY_100,
    body_heading_text: Color::rgb(0x1a, 0x73, 0xe8),
    body_secondary_text: Color::rgb(0x5f, 0x63, 0x68),
    muted_text: GRAY_600,
    subtle_text: GRAY_500,
    badge_background: Color::rgb(0xea, 0x43, 0x35),
    badge_text: TextRole::LightText,
    section_border: Color::rgb(0x1a, 0x73, 0xe8),
    brand_primary_text: Color::rgb(0x1a, 0x73, 0xe8),
    brand_secondary_text: Color::rgb(0x34, 0xa8, 0x53),
};

pub const BARCLAYS: ThemeTokenSet = ThemeTokenSet {
    banner_background: Color::rgb(0x00, 0xae, 0xef),
    banner_heading_text: TextRole::LightText,
    banner_secondary_text: GRAY_100,
    body_heading_text: Color::rgb(0x00, 0x3c, 0x71),
    body_secondary_text: Color::rgb(0x00, 0x57, 0xa0),
    muted_text: GRAY_600,
    subtle_text: GRAY_500,
    badge_background: Color::rgb(0x00, 0x3c, 0x71),
    badge_text: TextRole::LightText,
    section_border: Color::rgb(0x00, 0x3c, 0x71),
    brand_primary_text: Color::rgb(0x00, 0xae, 0xef),
    brand_secondary_text: Color::rgb(0x00, 0x3c, 0x71),
};

/// The theme selected when configuration names none.
pub const DEFAULT_PALETTE: &str = "barclays";

/// All reference palettes keyed by lowercase company name.
pub fn reference_palettes() -> [(&'static str, ThemeTokenSet); 5] {
    [
        ("amazon", AMAZON),
        ("cohesity", COHESITY),
        ("netflix", NETFLIX),
        ("google", GOOGLE),
        ("barclays", BARCLAYS),
    ]
}
