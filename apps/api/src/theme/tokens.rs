//! The closed set of theme roles and the token set that fills them.
//!
//! A `ThemeTokenSet` is a plain value: the presentation layer receives one at
//! construction time and maps each role to a visual style. There is no
//! "currently active" theme at this level.

use serde::{Deserialize, Serialize};

use crate::theme::color::{Color, BLACK, WHITE};

/// Symbolic text color chosen for contrast against a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    LightText,
    DarkText,
}

impl TextRole {
    pub fn resolve(self) -> Color {
        match self {
            TextRole::LightText => WHITE,
            TextRole::DarkText => BLACK,
        }
    }
}

/// Named semantic slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    BannerBackground,
    BannerHeadingText,
    BannerSecondaryText,
    BodyHeadingText,
    BodySecondaryText,
    MutedText,
    SubtleText,
    BadgeBackground,
    BadgeText,
    SectionBorder,
    BrandPrimaryText,
    BrandSecondaryText,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::BannerBackground,
        Role::BannerHeadingText,
        Role::BannerSecondaryText,
        Role::BodyHeadingText,
        Role::BodySecondaryText,
        Role::MutedText,
        Role::SubtleText,
        Role::BadgeBackground,
        Role::BadgeText,
        Role::SectionBorder,
        Role::BrandPrimaryText,
        Role::BrandSecondaryText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::BannerBackground => "bannerBackground",
            Role::BannerHeadingText => "bannerHeadingText",
            Role::BannerSecondaryText => "bannerSecondaryText",
            Role::BodyHeadingText => "bodyHeadingText",
            Role::BodySecondaryText => "bodySecondaryText",
            Role::MutedText => "mutedText",
            Role::SubtleText => "subtleText",
            Role::BadgeBackground => "badgeBackground",
            Role::BadgeText => "badgeText",
            Role::SectionBorder => "sectionBorder",
            Role::BrandPrimaryText => "brandPrimaryText",
            Role::BrandSecondaryText => "brandSecondaryText",
        }
    }
}

/// The concrete value a role resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    Color(Color),
    Text(TextRole),
}

impl TokenValue {
    pub fn resolve(self) -> Color {
        match self {
            TokenValue::Color(c) => c,
            TokenValue::Text(t) => t.resolve(),
        }
    }
}

/// Complete theme. Every role is a required field, so a missing or misspelled
/// role fails at compile time (in code) or at deserialization (in JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeTokenSet {
    pub banner_background: Color,
    pub banner_heading_text: TextRole,
    pub banner_secondary_text: Color,
    pub body_heading_text: Color,
    pub body_secondary_text: Color,
    pub muted_text: Color,
    pub subtle_text: Color,
    pub badge_background: Color,
    pub badge_text: TextRole,
    pub section_border: Color,
    pub brand_primary_text: Color,
    pub brand_secondary_text: Color,
}

impl ThemeTokenSet {
    pub fn get(&self, role: Role) -> TokenValue {
        match role {
            Role::BannerBackground => TokenValue::Color(self.banner_background),
            Role::BannerHeadingText => TokenValue::Text(self.banner_heading_text),
            Role::BannerSecondaryText => TokenValue::Color(self.banner_secondary_text),
            Role::BodyHeadingText => TokenValue::Color(self.body_heading_text),
            Role::BodySecondaryText => TokenValue::Color(self.body_secondary_text),
            Role::MutedText => TokenValue::Color(self.muted_text),
            Role::SubtleText => TokenValue::Color(self.subtle_text),
            Role::BadgeBackground => TokenValue::Color(self.badge_background),
            Role::BadgeText => TokenValue::Text(self.badge_text),
            Role::SectionBorder => TokenValue::Color(self.section_border),
            Role::BrandPrimaryText => TokenValue::Color(self.brand_primary_text),
            Role::BrandSecondaryText => TokenValue::Color(self.brand_secondary_text),
        }
    }

    /// Every role paired with its value, in `Role::ALL` order.
    pub fn entries(&self) -> impl Iterator<Item = (Role, TokenValue)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
