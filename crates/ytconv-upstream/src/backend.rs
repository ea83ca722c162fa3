use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::wire::{CacheLookup, CacheReply, ConvertJob, ConvertReply, MetadataReply, RecordEntry};

/// The four calls the conversion service offers.
///
/// Implementations return the service's replies as-is; interpreting
/// `success` / `errorType` is left to [`crate::Converter`].
#[async_trait]
pub trait ConversionBackend: Send + Sync {
    /// Ask whether a link for this id and quality is already available.
    async fn check_cache(&self, lookup: &CacheLookup) -> Result<CacheReply, UpstreamError>;

    /// Resolve the video's metadata (title) from its URL.
    async fn fetch_metadata(&self, url: &str) -> Result<MetadataReply, UpstreamError>;

    /// Start a conversion and obtain a download link.
    async fn convert(&self, job: &ConvertJob) -> Result<ConvertReply, UpstreamError>;

    /// Store a finished conversion so later cache lookups hit.
    async fn record(&self, entry: &RecordEntry) -> Result<(), UpstreamError>;
}
