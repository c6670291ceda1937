use anyhow::{Context, Result};

use crate::theme::palettes::DEFAULT_PALETTE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Name of the theme served as active. `None` means "pick a default".
    pub active_theme: Option<String>,
    /// Brand colors for a theme derived at startup and registered as `custom`.
    pub custom_primary: Option<String>,
    pub custom_secondary: Option<String>,
}

/// Registry name of the theme derived from `THEME_PRIMARY` / `THEME_SECONDARY`.
pub const CUSTOM_THEME_NAME: &str = "custom";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            active_theme: optional_env("ACTIVE_THEME"),
            custom_primary: optional_env("THEME_PRIMARY"),
            custom_secondary: optional_env("THEME_SECONDARY"),
        })
    }

    /// The theme name to serve: explicit `ACTIVE_THEME`, else the custom
    /// theme when one is configured, else the default palette.
    pub fn active_theme_name(&self) -> &str {
        match (&self.active_theme, &self.custom_primary) {
            (Some(name), _) => name.as_str(),
            (None, Some(_)) => CUSTOM_THEME_NAME,
            (None, None) => DEFAULT_PALETTE,
        }
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
