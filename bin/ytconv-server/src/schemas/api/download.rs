use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use ytconv_types::ConversionRequest;
use ytconv_upstream::ConversionResult;

pub const EXPIRY_NOTICE: &str = "Use this URL immediately as it may expire";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limited, please try again later";

/// Query string of `GET /api/download`. All fields are validated by hand so
/// that each problem gets its own message.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DownloadQuery {
    /// YouTube video URL (watch, youtu.be, embed, shorts).
    pub url: Option<String>,
    /// `mp3` (default) or `mp4`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Audio kbps (96, 128, 256, 320) or video height (144, 360, 480, 720, 1080).
    pub quality: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub quality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub download_url: String,
    pub info: String,
}

impl DownloadResponse {
    pub fn new(req: &ConversionRequest, result: ConversionResult) -> Self {
        Self {
            success: true,
            kind: req.kind.to_string(),
            quality: req.quality.clone(),
            title: result.title,
            download_url: result.download_url,
            info: EXPIRY_NOTICE.to_owned(),
        }
    }
}

/// 400 body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// 429 body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitedBody {
    pub error: String,
    pub retry_after: u64,
}

/// 500 body.
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}
