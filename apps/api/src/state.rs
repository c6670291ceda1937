use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::{Config, CUSTOM_THEME_NAME};
use crate::theme::{derive_theme_from_hex, validate_theme, ThemeRegistry, ThemeTokenSet};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; the active theme is a value
/// chosen from configuration, not a switchable global.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ThemeRegistry>,
    pub active_name: String,
    pub active: ThemeTokenSet,
}

impl AppState {
    /// Builds the registry (reference palettes plus the optional custom theme)
    /// and resolves the active theme. Fails on malformed custom colors or an
    /// unknown active theme name.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = ThemeRegistry::with_reference_palettes();

        if let Some(primary) = &config.custom_primary {
            let custom = derive_theme_from_hex(primary, config.custom_secondary.as_deref())
                .context("THEME_PRIMARY / THEME_SECONDARY must be #RRGGBB colors")?;

            let validation = validate_theme(&custom);
            info!(
                primary = %custom.banner_background,
                contrast_ok = validation.passed,
                "Registered custom theme '{CUSTOM_THEME_NAME}'"
            );
            registry.insert(CUSTOM_THEME_NAME, custom);
        }

        let active_name = config.active_theme_name().trim().to_lowercase();
        let Some(active) = registry.get(&active_name).copied() else {
            bail!(
                "ACTIVE_THEME '{active_name}' is not a known theme (available: {})",
                registry.names().join(", ")
            );
        };

        Ok(AppState {
            registry: Arc::new(registry),
            active_name,
            active,
        })
    }
}
