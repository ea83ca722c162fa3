/// Default root of the conversion service.
pub const DEFAULT_BASE_URL: &str = "https://cnvmp3.com";

/// Token the metadata endpoint currently accepts.
pub const DEFAULT_TOKEN: &str = "1234";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Immutable settings for [`crate::UpstreamClient`], built once at start-up.
///
/// # Example
/// ```rust
/// use ytconv_upstream::UpstreamConfig;
///
/// let cfg = UpstreamConfig::new("https://mirror.example")
///     .set_token("s3cret")
///     .set_accept_invalid_certs(false);
/// assert_eq!(cfg.referer(), "https://mirror.example/v25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub(crate) base_url: String,
    pub(crate) token: String,
    pub(crate) user_agent: String,
    pub(crate) accept_invalid_certs: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UpstreamConfig {
    /// Create a config for the service rooted at `base_url`.
    ///
    /// A trailing slash is ignored. Certificate verification is off by
    /// default because the service has been seen with invalid certificates.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            token: DEFAULT_TOKEN.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_invalid_certs: true,
        }
    }

    /// Set the token sent to the metadata endpoint.
    pub fn set_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Override the browser user agent.
    pub fn set_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whether TLS certificate errors from the service are ignored.
    pub fn set_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Value of the `Origin` header.
    pub fn origin(&self) -> &str {
        &self.base_url
    }

    /// Value of the `Referer` header.
    pub fn referer(&self) -> String {
        format!("{}/v25", self.base_url)
    }

    /// Absolute URL of an endpoint such as `check_database.php`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
