pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::theme::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Theme registry
        .route("/api/v1/themes", get(handlers::handle_list_themes))
        .route("/api/v1/active-theme", get(handlers::handle_active_theme))
        .route("/api/v1/themes/:name", get(handlers::handle_get_theme))
        .route("/api/v1/themes/:name/css", get(handlers::handle_theme_css))
        // Derivation & validation
        .route("/api/v1/themes/derive", post(handlers::handle_derive))
        .route("/api/v1/themes/contrast", post(handlers::handle_contrast))
        .route("/api/v1/colors/inspect", post(handlers::handle_inspect_color))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            active_theme: Some("amazon".to_string()),
            custom_primary: None,
            custom_secondary: None,
        };
        build_router(AppState::from_config(&config).unwrap())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, body) = send(app(), request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_themes_reports_active() {
        let (status, body) = get_json("/api/v1/themes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], "amazon");
        assert_eq!(body["themes"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_active_theme_is_injected_value() {
        let (status, body) = get_json("/api/v1/active-theme").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "amazon");
        assert_eq!(body["tokens"]["bannerBackground"], "#232f3e");
        assert_eq!(body["tokens"]["badgeText"], "dark-text");
    }

    #[tokio::test]
    async fn test_get_theme_includes_validation() {
        let (status, body) = get_json("/api/v1/themes/Netflix").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "netflix");
        assert_eq!(body["validation"]["passed"], false);
    }

    #[tokio::test]
    async fn test_unknown_theme_is_404() {
        let (status, body) = get_json("/api/v1/themes/initech").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_theme_css() {
        let request = Request::get("/api/v1/themes/amazon/css")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let css = String::from_utf8(body.to_vec()).unwrap();
        assert!(css.contains("--badge-background: #ff9900;"));
    }

    #[tokio::test]
    async fn test_derive_with_secondary() {
        let (status, body) = post_json(
            "/api/v1/themes/derive",
            json!({ "primary": "#4285F4", "secondary": "#EA4335" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tokens"]["badgeBackground"], "#ea4335");
        assert_eq!(body["tokens"]["brandSecondaryText"], "#ea4335");
        assert_eq!(body["tailwind"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_derive_without_secondary_collapses() {
        let (status, body) =
            post_json("/api/v1/themes/derive", json!({ "primary": "#00d647" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tokens"]["badgeBackground"], "#00d647");
        assert_eq!(body["tokens"]["brandSecondaryText"], "#00d647");
    }

    #[tokio::test]
    async fn test_derive_rejects_malformed_color() {
        let (status, body) =
            post_json("/api/v1/themes/derive", json!({ "primary": "232F3E" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_COLOR_FORMAT");
    }

    #[tokio::test]
    async fn test_contrast_endpoint() {
        let (status, body) = post_json(
            "/api/v1/themes/contrast",
            json!({ "banner": "#232F3E", "badge": "#FF9900" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contrasting"], true);
        assert_eq!(body["different_classes"], true);
    }

    #[tokio::test]
    async fn test_inspect_color() {
        let (status, body) =
            post_json("/api/v1/colors/inspect", json!({ "color": "#FF9900" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["color"], "#ff9900");
        assert_eq!(body["is_light"], true);
        assert_eq!(body["badge_text"], "dark-text");
        // 255*0.7 = 178.5 → 179, 153*0.7 = 107.1 → 107
        assert_eq!(body["darkened"], "#b36b00");
    }
}
