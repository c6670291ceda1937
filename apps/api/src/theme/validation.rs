use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::theme::color::Color;
use crate::theme::luminance::{is_light, relative_luminance};
use crate::theme::tokens::{Role, ThemeTokenSet};

/// Two colors count as visibly distinct at or above this luminance gap.
pub const MIN_LUMINANCE_DELTA: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub banner_luminance: f64,
    pub badge_luminance: f64,
    pub luminance_delta: f64,
    /// One color is light and the other dark.
    pub different_classes: bool,
    pub contrasting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastIssue {
    pub roles: (Role, Role),
    pub report: ContrastReport,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeValidation {
    pub passed: bool,
    pub issues: Vec<ContrastIssue>,
}

/// Checks that a banner and a badge background are visibly distinguishable:
/// a luminance gap of at least `MIN_LUMINANCE_DELTA`, or opposite light/dark
/// classes.
pub fn check_contrast(banner: Color, badge: Color) -> ContrastReport {
    let banner_luminance = relative_luminance(banner);
    let badge_luminance = relative_luminance(badge);
    let luminance_delta = (banner_luminance - badge_luminance).abs();
    let different_classes = is_light(banner) != is_light(badge);

    ContrastReport {
        banner_luminance,
        badge_luminance,
        luminance_delta,
        different_classes,
        contrasting: luminance_delta >= MIN_LUMINANCE_DELTA || different_classes,
    }
}

/// Runs every banner contrast rule against a token set.
///
/// Checked pairs:
/// - banner background vs badge background
/// - banner background vs brand secondary text (contact icons sit on the banner)
///
/// Reports violations; never rewrites the theme.
pub fn validate_theme(theme: &ThemeTokenSet) -> ThemeValidation {
    let pairs = [
        (
            Role::BadgeBackground,
            theme.badge_background,
            "Pick a badge color in the opposite light/dark class from the banner",
        ),
        (
            Role::BrandSecondaryText,
            theme.brand_secondary_text,
            "Contact icons render on the banner; pick a secondary brand color that stands out from it",
        ),
    ];

    let mut issues = Vec::new();
    for (role, color, hint) in pairs {
        let report = check_contrast(theme.banner_background, color);
        if report.contrasting {
            continue;
        }

        warn!(
            banner = %theme.banner_background,
            other = %color,
            role = role.as_str(),
            delta = report.luminance_delta,
            "Theme contrast rule violated"
        );
        issues.push(ContrastIssue {
            roles: (Role::BannerBackground, role),
            suggestion: format!(
                "{hint} (luminance gap {:.2}, need {MIN_LUMINANCE_DELTA:.2})",
                report.luminance_delta
            ),
            report,
        });
    }

    ThemeValidation {
        passed: issues.is_empty(),
        issues,
    }
}
