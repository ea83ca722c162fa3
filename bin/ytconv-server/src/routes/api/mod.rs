pub mod download;

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use crate::state::AppState;

/// Routes nested under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(download::router())
}

pub fn api_docs() -> utoipa::openapi::OpenApi {
    download::DownloadApi::openapi()
}
