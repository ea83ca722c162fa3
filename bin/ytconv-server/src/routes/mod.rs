//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `YTCONV_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - `/api/download`

mod api;
pub mod doc;
mod health;

use std::sync::Arc;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .nest("/api", api::router());

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(&state.config)))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::middleware::trace::X_TRACE_ID;
    use crate::test_support::{test_state, test_state_with, StubBackend};
    use std::sync::atomic::Ordering;

    const WATCH_URL: &str = "https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ";

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, headers, body)
    }

    fn app(stub: StubBackend) -> Router {
        build(test_state(Arc::new(stub)))
    }

    #[tokio::test]
    async fn missing_url_is_400_mentioning_required() {
        let (status, _, body) = get(app(StubBackend::default()), "/api/download").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn invalid_url_is_400() {
        let (status, _, body) =
            get(app(StubBackend::default()), "/api/download?url=https%3A%2F%2Fvimeo.com%2F1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid YouTube URL");
    }

    #[tokio::test]
    async fn wav_type_is_400_invalid_type() {
        let uri = format!("/api/download?url={WATCH_URL}&type=wav");
        let (status, _, body) = get(app(StubBackend::default()), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid type"));
    }

    #[tokio::test]
    async fn mp3_quality_500_is_400_invalid_audio_quality() {
        let uri = format!("/api/download?url={WATCH_URL}&type=mp3&quality=500");
        let (status, _, body) = get(app(StubBackend::default()), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid audio quality"));
    }

    #[tokio::test]
    async fn repeated_parameter_is_400_json() {
        let stub = Arc::new(StubBackend::default());
        let uri = format!("/api/download?url={WATCH_URL}&url={WATCH_URL}");
        let resp = build(test_state(stub.clone()))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()["content-type"], "application/json");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("duplicate field"));
        assert_eq!(stub.cache_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn throttled_conversion_is_429_with_retry_after() {
        let uri = format!("/api/download?url={WATCH_URL}");
        let (status, headers, body) = get(app(StubBackend::throttled()), &uri).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["retryAfter"], 60);
        assert_eq!(body["error"], "Rate limited, please try again later");
        assert_eq!(headers["retry-after"], "60");
    }

    #[tokio::test]
    async fn upstream_failure_is_500_with_message() {
        let uri = format!("/api/download?url={WATCH_URL}");
        let (status, _, body) = get(app(StubBackend::metadata_rejected("Video unavailable")), &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Video unavailable");
    }

    #[tokio::test]
    async fn successful_video_download_shape() {
        let uri = format!("/api/download?url={WATCH_URL}&type=mp4&quality=1080");
        let stub = StubBackend::fresh("https://dl.example/v.mp4", Some("Song"));
        let (status, _, body) = get(app(stub), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "mp4");
        assert_eq!(body["quality"], "1080");
        assert_eq!(body["title"], "Song");
        assert_eq!(body["downloadUrl"], "https://dl.example/v.mp4");
        assert_eq!(body["info"], "Use this URL immediately as it may expire");
    }

    #[tokio::test]
    async fn cached_download_omits_title() {
        let uri = format!("/api/download?url={WATCH_URL}");
        let (status, _, body) = get(app(StubBackend::cached("https://dl.example/c.mp3")), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "mp3");
        assert_eq!(body["quality"], "128");
        assert!(body.get("title").is_none());
    }

    #[tokio::test]
    async fn every_response_carries_a_trace_id() {
        let (status, headers, _) = get(app(StubBackend::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let id = headers[X_TRACE_ID].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn inbound_trace_id_is_echoed() {
        let id = "6f1c1f0e-2f6a-4d8e-9a43-0b6f0c7e6a11";
        let resp = app(StubBackend::default())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(X_TRACE_ID, id)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.headers()[X_TRACE_ID], id);
    }

    #[tokio::test]
    async fn swagger_is_served_by_default() {
        let (status, _, body) = get(app(StubBackend::default()), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/api/download").is_some());
    }

    #[tokio::test]
    async fn swagger_can_be_disabled() {
        let config = Config {
            enable_swagger: false,
            ..Config::default()
        };
        let app = build(test_state_with(Arc::new(StubBackend::default()), config));
        let (status, _, _) = get(app, "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
