//! Axum route handlers for the Theme API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::theme::luminance::{is_dark_enough_for_main_text, is_light, relative_luminance};
use crate::theme::render::{css_variables, tailwind_classes};
use crate::theme::transform::{darken, optimal_badge_text_color, DEFAULT_DARKEN_FACTOR};
use crate::theme::{
    check_contrast, derive_theme_from_hex, validate_theme, Color, ContrastReport, Role,
    TextRole, ThemeTokenSet, ThemeValidation,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    pub themes: Vec<String>,
    pub active: String,
}

#[derive(Debug, Serialize)]
pub struct ActiveThemeResponse {
    pub name: String,
    pub tokens: ThemeTokenSet,
}

#[derive(Debug, Serialize)]
pub struct ThemeDetailResponse {
    pub name: String,
    pub tokens: ThemeTokenSet,
    pub validation: ThemeValidation,
}

#[derive(Debug, Deserialize)]
pub struct DeriveRequest {
    pub primary: String,
    pub secondary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeriveResponse {
    pub tokens: ThemeTokenSet,
    pub validation: ThemeValidation,
    pub tailwind: Vec<(Role, String)>,
}

#[derive(Debug, Deserialize)]
pub struct ContrastRequest {
    pub banner: String,
    pub badge: String,
}

#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub color: Color,
    pub luminance: f64,
    pub is_light: bool,
    pub dark_enough_for_main_text: bool,
    pub badge_text: TextRole,
    /// Preview of the color at the default darkening factor.
    pub darkened: Color,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/themes
pub async fn handle_list_themes(State(state): State<AppState>) -> Json<ThemeListResponse> {
    Json(ThemeListResponse {
        themes: state.registry.names().into_iter().map(String::from).collect(),
        active: state.active_name.clone(),
    })
}

/// GET /api/v1/active-theme
///
/// The theme chosen at startup. Presentation code renders with this value.
pub async fn handle_active_theme(State(state): State<AppState>) -> Json<ActiveThemeResponse> {
    Json(ActiveThemeResponse {
        name: state.active_name.clone(),
        tokens: state.active,
    })
}

/// GET /api/v1/themes/:name
pub async fn handle_get_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ThemeDetailResponse>, AppError> {
    let tokens = lookup(&state, &name)?;
    Ok(Json(ThemeDetailResponse {
        name: name.to_lowercase(),
        validation: validate_theme(&tokens),
        tokens,
    }))
}

/// GET /api/v1/themes/:name/css
pub async fn handle_theme_css(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = lookup(&state, &name)?;
    Ok((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css_variables(&tokens),
    ))
}

/// POST /api/v1/themes/derive
///
/// Derives a full token set from brand colors. Either every role is filled or
/// the request fails; a malformed color is a 400.
pub async fn handle_derive(
    Json(request): Json<DeriveRequest>,
) -> Result<Json<DeriveResponse>, AppError> {
    let tokens = derive_theme_from_hex(&request.primary, request.secondary.as_deref())?;
    Ok(Json(DeriveResponse {
        validation: validate_theme(&tokens),
        tailwind: tailwind_classes(&tokens),
        tokens,
    }))
}

/// POST /api/v1/themes/contrast
pub async fn handle_contrast(
    Json(request): Json<ContrastRequest>,
) -> Result<Json<ContrastReport>, AppError> {
    let banner = Color::from_hex(&request.banner)?;
    let badge = Color::from_hex(&request.badge)?;
    Ok(Json(check_contrast(banner, badge)))
}

/// POST /api/v1/colors/inspect
pub async fn handle_inspect_color(
    Json(request): Json<InspectRequest>,
) -> Result<Json<InspectResponse>, AppError> {
    let color = Color::from_hex(&request.color)?;
    Ok(Json(InspectResponse {
        color,
        luminance: relative_luminance(color),
        is_light: is_light(color),
        dark_enough_for_main_text: is_dark_enough_for_main_text(color),
        badge_text: optimal_badge_text_color(color),
        darkened: darken(color, DEFAULT_DARKEN_FACTOR),
    }))
}

fn lookup(state: &AppState, name: &str) -> Result<ThemeTokenSet, AppError> {
    state
        .registry
        .get(name)
        .copied()
        .ok_or_else(|| AppError::NotFound(format!("Theme '{name}' not found")))
}
