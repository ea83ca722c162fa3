//! Server configuration, loaded from environment variables at startup.

use ytconv_upstream::config::{DEFAULT_BASE_URL, DEFAULT_TOKEN};
use ytconv_upstream::UpstreamConfig;

/// Runtime configuration for ytconv-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; `None` allows any.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    /// Root URL of the conversion service.
    pub upstream_base_url: String,

    /// Token sent to the service's metadata endpoint.
    pub upstream_token: String,

    /// Skip TLS certificate verification for the conversion service.
    pub upstream_accept_invalid_certs: bool,

    /// Seconds reported in `retryAfter` when the service throttles us.
    pub retry_after_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            cors_allowed_origins: None,
            enable_swagger: true,
            upstream_base_url: DEFAULT_BASE_URL.to_owned(),
            upstream_token: DEFAULT_TOKEN.to_owned(),
            upstream_accept_invalid_certs: true,
            retry_after_secs: 60,
        }
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from any `key -> value` source.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            bind_address: var("YTCONV_BIND").unwrap_or(d.bind_address),
            log_level: var("YTCONV_LOG").unwrap_or(d.log_level),
            log_json: parse_bool_var(var("YTCONV_LOG_JSON"), d.log_json),
            cors_allowed_origins: var("YTCONV_CORS_ORIGINS").filter(|v| !v.trim().is_empty()),
            enable_swagger: parse_bool_var(var("YTCONV_ENABLE_SWAGGER"), d.enable_swagger),
            upstream_base_url: var("YTCONV_UPSTREAM_BASE_URL").unwrap_or(d.upstream_base_url),
            upstream_token: var("YTCONV_UPSTREAM_TOKEN").unwrap_or(d.upstream_token),
            upstream_accept_invalid_certs: parse_bool_var(
                var("YTCONV_UPSTREAM_ACCEPT_INVALID_CERTS"),
                d.upstream_accept_invalid_certs,
            ),
            retry_after_secs: parse_var(var("YTCONV_RETRY_AFTER_SECS"), d.retry_after_secs),
        }
    }

    /// Settings for the upstream client.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(self.upstream_base_url.as_str())
            .set_token(self.upstream_token.as_str())
            .set_accept_invalid_certs(self.upstream_accept_invalid_certs)
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn parse_var<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_bool_var(value: Option<String>, default: bool) -> bool {
    value.and_then(|v| parse_bool(&v)).unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        v if v == "1" || v.eq_ignore_ascii_case("true") => Some(true),
        v if v == "0" || v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}
