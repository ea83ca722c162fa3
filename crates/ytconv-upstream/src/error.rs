use thiserror::Error;

/// Errors that can be returned by the conversion service or while reaching it.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure or non-2xx status.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx reply whose body is not the expected JSON object.
    #[error("malformed reply from {endpoint}: {source}")]
    Malformed {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered but reported `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    /// The service classified the failure as throttling.
    #[error("rate limited by upstream")]
    RateLimited,

    /// Headers or base URL could not be turned into a client.
    #[error("invalid upstream configuration: {message}")]
    InvalidConfig { message: String },
}

impl UpstreamError {
    /// Build a [`UpstreamError::Rejected`] from the service's own message,
    /// using `fallback` when it sent none (or an empty one).
    pub fn rejected(message: Option<String>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        UpstreamError::Rejected { message }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, UpstreamError::RateLimited)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, UpstreamError::Malformed { .. })
    }
}
