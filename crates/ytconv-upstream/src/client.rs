use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::backend::ConversionBackend;
use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::wire::{
    CacheLookup, CacheReply, ConvertJob, ConvertReply, MetadataReply, MetadataRequest,
    RecordEntry,
};

pub const CHECK_PATH: &str = "check_database.php";
pub const METADATA_PATH: &str = "get_video_data.php";
pub const CONVERT_PATH: &str = "download_video_ucep.php";
pub const RECORD_PATH: &str = "insert_to_database.php";

/// Headers a Chrome tab on the service's own page would send.
/// `Accept-Encoding` is left to reqwest so it can decode what it advertises.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "*/*"),
    ("accept-language", "en-US,en;q=0.9"),
    ("content-type", "application/json"),
    (
        "sec-ch-ua",
        r#""Chromium";v="122", "Not(A:Brand";v="24", "Google Chrome";v="122""#,
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""Windows""#),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
];

/// `reqwest`-backed [`ConversionBackend`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    config: UpstreamConfig,
    http: Client,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .default_headers(browser_headers(&config)?)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    async fn post<B, R>(&self, path: &'static str, body: &B) -> Result<R, UpstreamError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "upstream POST");
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| UpstreamError::Malformed {
            endpoint: path,
            source,
        })
    }
}

fn browser_headers(config: &UpstreamConfig) -> Result<HeaderMap, UpstreamError> {
    let mut headers = HeaderMap::new();
    for &(name, value) in BROWSER_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    let invalid = |what: &str, e: reqwest::header::InvalidHeaderValue| UpstreamError::InvalidConfig {
        message: format!("{what} header: {e}"),
    };
    headers.insert(
        reqwest::header::ORIGIN,
        HeaderValue::from_str(config.origin()).map_err(|e| invalid("origin", e))?,
    );
    headers.insert(
        reqwest::header::REFERER,
        HeaderValue::from_str(&config.referer()).map_err(|e| invalid("referer", e))?,
    );
    Ok(headers)
}

#[async_trait]
impl ConversionBackend for UpstreamClient {
    async fn check_cache(&self, lookup: &CacheLookup) -> Result<CacheReply, UpstreamError> {
        self.post(CHECK_PATH, lookup).await
    }

    async fn fetch_metadata(&self, url: &str) -> Result<MetadataReply, UpstreamError> {
        let body = MetadataRequest {
            url: url.to_owned(),
            token: self.config.token.clone(),
        };
        self.post(METADATA_PATH, &body).await
    }

    async fn convert(&self, job: &ConvertJob) -> Result<ConvertReply, UpstreamError> {
        self.post(CONVERT_PATH, job).await
    }

    async fn record(&self, entry: &RecordEntry) -> Result<(), UpstreamError> {
        let url = self.config.endpoint(RECORD_PATH);
        self.http
            .post(&url)
            .json(entry)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_origin_and_referer() {
        let headers = browser_headers(&UpstreamConfig::default()).unwrap();
        assert_eq!(headers["origin"], "https://cnvmp3.com");
        assert_eq!(headers["referer"], "https://cnvmp3.com/v25");
        assert_eq!(headers["sec-fetch-site"], "same-origin");
    }

    #[test]
    fn control_characters_in_base_url_are_rejected() {
        let err = browser_headers(&UpstreamConfig::new("https://bad\nhost")).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidConfig { .. }));
    }

    #[tokio::test]
    async fn client_builds_from_default_config() {
        let client = UpstreamClient::new(UpstreamConfig::default()).unwrap();
        assert_eq!(client.config().token(), "1234");
    }
}
