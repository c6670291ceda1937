//! Presentation mapping — turns a token set into something a page can apply.

use std::fmt::Write;

use crate::theme::tokens::{Role, TextRole, ThemeTokenSet, TokenValue};

/// `bannerBackground` → `banner-background`
pub fn css_property_name(role: Role) -> String {
    let mut out = String::new();
    for ch in role.as_str().chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// A `:root` block declaring one custom property per role. Text roles are
/// resolved to concrete colors.
pub fn css_variables(theme: &ThemeTokenSet) -> String {
    let mut css = String::from(":root {\n");
    for (role, value) in theme.entries() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            css,
            "  --{}: {};",
            css_property_name(role),
            value.resolve()
        );
    }
    css.push_str("}\n");
    css
}

/// The Tailwind utility class that applies `value` for `role`.
pub fn tailwind_class(role: Role, value: TokenValue) -> String {
    match value {
        TokenValue::Text(TextRole::LightText) => "text-white".to_string(),
        TokenValue::Text(TextRole::DarkText) => "text-black".to_string(),
        TokenValue::Color(color) => {
            let prefix = match role {
                Role::BannerBackground | Role::BadgeBackground => "bg",
                Role::SectionBorder => "border",
                _ => "text",
            };
            format!("{prefix}-[{color}]")
        }
    }
}

pub fn tailwind_classes(theme: &ThemeTokenSet) -> Vec<(Role, String)> {
    theme
        .entries()
        .map(|(role, value)| (role, tailwind_class(role, value)))
        .collect()
}
