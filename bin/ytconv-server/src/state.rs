//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use ytconv_upstream::Converter;

use crate::config::Config;

/// Immutable state shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Runs the upstream call sequence for each download request.
    pub converter: Converter,
}
