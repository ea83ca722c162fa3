//! `GET /api/download` – resolve a YouTube URL to an expiring download link.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;
use utoipa::OpenApi;
use ytconv_types::ConversionRequest;

use crate::error::ServerError;
use crate::schemas::api::download::{
    DownloadQuery, DownloadResponse, ErrorBody, FailureBody, RateLimitedBody,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(download),
    components(schemas(DownloadResponse, ErrorBody, RateLimitedBody, FailureBody)),
)]
pub struct DownloadApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/download", get(download))
}

/// Convert a YouTube video and return a short-lived download URL.
///
/// Parameters are validated in order (url, type, quality) and the first
/// problem is reported. The link in a successful response expires quickly
/// and should be fetched right away.
#[utoipa::path(
    get,
    path = "/api/download",
    tag = "download",
    params(DownloadQuery),
    responses(
        (status = 200, description = "Download link ready", body = DownloadResponse),
        (status = 400, description = "Missing or invalid url, type or quality, or an undecodable query string", body = ErrorBody),
        (status = 429, description = "Conversion service is throttling", body = RateLimitedBody),
        (status = 500, description = "Conversion service failed", body = FailureBody),
    )
)]
pub async fn download(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<Json<DownloadResponse>, ServerError> {
    let Query(query) = query?;
    let req = ConversionRequest::parse(
        query.url.as_deref(),
        query.kind.as_deref(),
        query.quality.as_deref(),
    )?;
    debug!(
        video_id = %req.video_id,
        kind = %req.kind,
        quality = %req.quality,
        "download request validated"
    );

    let result = state
        .converter
        .convert(&req)
        .await
        .map_err(|e| ServerError::from_upstream(e, state.config.retry_after_secs))?;

    Ok(Json(DownloadResponse::new(&req, result)))
}
