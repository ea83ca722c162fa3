//! JSON shapes exchanged with the conversion service.
//!
//! Field names follow the service, not Rust conventions. Reply fields are all
//! optional on the wire and decoded loosely: `success` by JSON truthiness (a
//! missing flag counts as failure), text fields from strings or numbers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Value of `errorType` that marks a throttled conversion.
pub const RATE_LIMIT_ERROR_TYPE: i64 = 4;

/// Body of `check_database.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheLookup {
    pub youtube_id: String,
    pub quality: u8,
}

/// Body of `get_video_data.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRequest {
    pub url: String,
    pub token: String,
}

/// Body of `download_video_ucep.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertJob {
    pub url: String,
    pub quality: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "formatValue")]
    pub format: u8,
}

/// Body of `insert_to_database.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordEntry {
    pub youtube_id: String,
    pub server_path: String,
    pub quality: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "formatValue")]
    pub format: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CacheReply {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "loose_text")]
    pub download_link: Option<String>,
}

impl CacheReply {
    /// The cached link, if the lookup was a hit.
    pub fn hit(self) -> Option<String> {
        if !self.success {
            return None;
        }
        self.download_link.filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetadataReply {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "loose_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConvertReply {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "loose_text")]
    pub download_link: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub error: Option<String>,
    /// Kept loosely typed: the service is not consistent about it.
    #[serde(default, rename = "errorType")]
    pub error_type: Option<serde_json::Value>,
}

impl ConvertReply {
    /// Only the numeric classification counts as throttling.
    pub fn is_rate_limited(&self) -> bool {
        self.error_type
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .is_some_and(|t| t == RATE_LIMIT_ERROR_TYPE)
    }
}

/// `false`, `null`, `0`, and `""` are false; anything else is true.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Strings pass through, numbers and booleans are rendered, anything else is absent.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        v @ (Value::Number(_) | Value::Bool(_)) => Some(v.to_string()),
        _ => None,
    })
}
