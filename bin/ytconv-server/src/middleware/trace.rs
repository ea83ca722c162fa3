use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

/// JSON bodies below this size are logged at debug level.
const MAX_LOGGED_BODY: usize = 1024;

/// Attach a trace id to every request/response and log method, path, status
/// and latency inside an `http_request` span.
///
/// A valid UUID in the inbound `x-trace-id` header is reused; anything else
/// is replaced with a fresh v4.
pub async fn trace_middleware(mut req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);
    let trace_header = HeaderValue::from_str(&trace_id.to_string()).ok();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        info!("→ request started");
        if let Some(v) = &trace_header {
            req.headers_mut().insert(X_TRACE_ID, v.clone());
        }

        let response = next.run(req).await;

        let (mut parts, body) = response.into_parts();
        let bytes = buffer_and_log(&parts.headers, body).await;
        if let Some(v) = trace_header {
            parts.headers.insert(X_TRACE_ID, v);
        }
        let response = Response::from_parts(parts, Body::from(bytes));

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "← response finished"
        );
        response
    }
    .instrument(span)
    .await
}

/// Collect the response body, logging it when it is small JSON.
async fn buffer_and_log(headers: &header::HeaderMap, body: Body) -> Bytes {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Bytes::new(),
    };

    if content_type.contains("application/json") && bytes.len() < MAX_LOGGED_BODY {
        if let Ok(text) = std::str::from_utf8(&bytes) {
            debug!(body = %text, "response body");
        }
    } else if !bytes.is_empty() {
        debug!(content_type, size = bytes.len(), "response body skipped");
    }

    bytes
}
