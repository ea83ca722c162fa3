//! YouTube video identifier extraction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Matches watch (`?v=` anywhere in the query), `youtu.be`, `embed`, `v`,
/// `shorts` and `/<segment>/.../<id>` shapes. The id must be followed by a
/// query separator or the end of the string.
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube\.com/(?:[^/]+/.+/|(?:v|embed|watch|shorts)/|.*[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})(?:[&?]|$)",
    )
    .expect("YouTube id pattern is a valid regex")
});

/// The 11-character token YouTube uses to address a single video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the video id from any recognised YouTube URL shape.
    ///
    /// Returns `None` when the string does not look like a YouTube video URL.
    pub fn from_url(url: &str) -> Option<Self> {
        YOUTUBE_ID
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
