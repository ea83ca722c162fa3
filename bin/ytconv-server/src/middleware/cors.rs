use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

/// Build the CORS layer from `YTCONV_CORS_ORIGINS`.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins = allowed_origins(config);

    // Wildcard when nothing usable is configured; set YTCONV_CORS_ORIGINS in production.
    let layer = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        CorsLayer::new().allow_origin(origins)
    };
    layer.allow_headers(Any).allow_methods(Any)
}

/// Comma-separated origins, trimmed; blank and unparsable entries are skipped.
fn allowed_origins(config: &Config) -> Vec<HeaderValue> {
    config
        .cors_allowed_origins
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}
