//! Unified server error type.
//!
//! Handlers return `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`]. The body shape depends on the class:
//!
//! | variant      | status | body                                   |
//! |--------------|--------|----------------------------------------|
//! | `Validation` | 400    | `{"error": ...}`                       |
//! | `Query`      | 400    | `{"error": ...}`                       |
//! | `RateLimited`| 429    | `{"error": ..., "retryAfter": secs}`   |
//! | `Upstream`   | 500    | `{"success": false, "error": ...}`     |
//! | `Internal`   | 500    | `{"success": false, "error": generic}` |
//!
//! Upstream messages are passed through; internal details are only logged.

use axum::extract::rejection::QueryRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};
use ytconv_types::ValidationError;
use ytconv_upstream::UpstreamError;

use crate::schemas::api::download::{ErrorBody, FailureBody, RateLimitedBody, RATE_LIMITED_MESSAGE};

/// All errors that can occur in the ytconv-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent missing or invalid parameters.
    #[error("bad request: {0}")]
    Validation(#[from] ValidationError),

    /// The query string itself could not be decoded (e.g. a repeated key).
    #[error("bad query string: {0}")]
    Query(String),

    /// The conversion service asked us to slow down.
    #[error("rate limited; retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    /// The conversion service failed or could not be reached.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Classify an upstream failure; throttling becomes a 429 with `retry_after`.
    pub fn from_upstream(e: UpstreamError, retry_after: u64) -> Self {
        match e {
            UpstreamError::RateLimited => ServerError::RateLimited { retry_after },
            UpstreamError::InvalidConfig { message } => ServerError::Internal(message),
            other => ServerError::Upstream(other.to_string()),
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::Query(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: e.to_string() }),
            )
                .into_response(),
            ServerError::Query(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            ServerError::RateLimited { retry_after } => {
                warn!(retry_after, "upstream rate limit surfaced to client");
                let mut resp = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(RateLimitedBody {
                        error: RATE_LIMITED_MESSAGE.to_owned(),
                        retry_after,
                    }),
                )
                    .into_response();
                resp.headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
                resp
            }
            ServerError::Upstream(m) => {
                error!(message = %m, "upstream failure");
                failure(m)
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                failure("Internal server error".to_owned())
            }
        }
    }
}

fn failure(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureBody {
            success: false,
            error,
        }),
    )
        .into_response()
}
