//! Sequencing of the upstream calls for one conversion request.
//!
//! cache lookup → metadata → convert, strictly in order and without retries.
//! A cache hit short-circuits everything after it. After a successful
//! conversion the result is recorded on a detached task; that task's outcome
//! only ever reaches the log.

use std::sync::Arc;

use tracing::{debug, info, warn};
use ytconv_types::ConversionRequest;

use crate::backend::ConversionBackend;
use crate::error::UpstreamError;
use crate::wire::{CacheLookup, ConvertJob, RecordEntry};

const METADATA_FALLBACK: &str = "Failed to get video data";
const CONVERT_FALLBACK: &str = "Failed to generate download link";

/// Outcome of a successful conversion. The link expires shortly after issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub download_url: String,
    /// Absent when the link came from the cache lookup.
    pub title: Option<String>,
    pub from_cache: bool,
}

/// Runs conversion requests against a [`ConversionBackend`].
#[derive(Clone)]
pub struct Converter {
    backend: Arc<dyn ConversionBackend>,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Converter")
    }
}

impl Converter {
    pub fn new(backend: Arc<dyn ConversionBackend>) -> Self {
        Self { backend }
    }

    /// Obtain a download link for `req`.
    ///
    /// Must be called from within a tokio runtime: a successful fresh
    /// conversion spawns the record task.
    pub async fn convert(&self, req: &ConversionRequest) -> Result<ConversionResult, UpstreamError> {
        let quality = req.quality_code.value();
        let format = req.format_code();

        let lookup = CacheLookup {
            youtube_id: req.video_id.to_string(),
            quality,
        };
        let cached = match self.backend.check_cache(&lookup).await {
            Ok(reply) => reply.hit(),
            Err(e) if e.is_malformed() => {
                warn!(video_id = %req.video_id, error = %e, "unreadable cache reply, treating as miss");
                None
            }
            Err(e) => return Err(e),
        };
        if let Some(link) = cached {
            info!(video_id = %req.video_id, quality, "cache hit");
            return Ok(ConversionResult {
                download_url: link,
                title: None,
                from_cache: true,
            });
        }
        debug!(video_id = %req.video_id, quality, "cache miss");

        let metadata = self
            .backend
            .fetch_metadata(&req.url)
            .await
            .map_err(|e| unreadable_as(e, METADATA_FALLBACK))?;
        if !metadata.success {
            warn!(video_id = %req.video_id, error = ?metadata.error, "metadata lookup rejected");
            return Err(UpstreamError::rejected(metadata.error, METADATA_FALLBACK));
        }
        let title = metadata.title;

        let job = ConvertJob {
            url: req.url.clone(),
            quality,
            title: title.clone(),
            format,
        };
        let reply = self
            .backend
            .convert(&job)
            .await
            .map_err(|e| unreadable_as(e, CONVERT_FALLBACK))?;
        if !reply.success {
            if reply.is_rate_limited() {
                warn!(video_id = %req.video_id, "conversion throttled by upstream");
                return Err(UpstreamError::RateLimited);
            }
            warn!(video_id = %req.video_id, error = ?reply.error, "conversion rejected");
            return Err(UpstreamError::rejected(reply.error, CONVERT_FALLBACK));
        }
        let Some(link) = reply.download_link.filter(|l| !l.is_empty()) else {
            return Err(UpstreamError::rejected(reply.error, CONVERT_FALLBACK));
        };

        info!(video_id = %req.video_id, quality, format, "conversion ready");
        self.spawn_record(RecordEntry {
            youtube_id: req.video_id.to_string(),
            server_path: link.clone(),
            quality,
            title: title.clone(),
            format,
        });

        Ok(ConversionResult {
            download_url: link,
            title,
            from_cache: false,
        })
    }

    fn spawn_record(&self, entry: RecordEntry) {
        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            match backend.record(&entry).await {
                Ok(()) => debug!(youtube_id = %entry.youtube_id, "conversion recorded"),
                Err(e) => warn!(
                    youtube_id = %entry.youtube_id,
                    error = %e,
                    "failed to record conversion result"
                ),
            }
        });
    }
}

/// An unreadable reply is reported like a rejection without a message.
fn unreadable_as(e: UpstreamError, fallback: &str) -> UpstreamError {
    if e.is_malformed() {
        warn!(error = %e, "unreadable upstream reply");
        return UpstreamError::rejected(None, fallback);
    }
    e
}
