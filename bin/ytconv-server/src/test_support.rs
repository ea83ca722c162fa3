//! In-memory conversion service for handler and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytconv_upstream::wire::{
    CacheLookup, CacheReply, ConvertJob, ConvertReply, MetadataReply, RecordEntry,
};
use ytconv_upstream::{ConversionBackend, Converter, UpstreamError};

use crate::config::Config;
use crate::state::AppState;

#[derive(Default)]
pub struct StubBackend {
    cache: CacheReply,
    metadata: MetadataReply,
    convert: ConvertReply,
    pub cache_calls: AtomicUsize,
    pub metadata_calls: AtomicUsize,
    jobs: Mutex<Vec<ConvertJob>>,
}

impl StubBackend {
    /// Cache miss, then a successful conversion.
    pub fn fresh(link: &str, title: Option<&str>) -> Self {
        Self {
            metadata: MetadataReply {
                success: true,
                title: title.map(str::to_owned),
                error: None,
            },
            convert: ConvertReply {
                success: true,
                download_link: Some(link.to_owned()),
                ..ConvertReply::default()
            },
            ..Self::default()
        }
    }

    pub fn cached(link: &str) -> Self {
        Self {
            cache: CacheReply {
                success: true,
                download_link: Some(link.to_owned()),
            },
            ..Self::default()
        }
    }

    pub fn throttled() -> Self {
        Self {
            convert: ConvertReply {
                success: false,
                error_type: Some(serde_json::json!(4)),
                ..ConvertReply::default()
            },
            ..Self::fresh("", None)
        }
    }

    pub fn metadata_rejected(message: &str) -> Self {
        Self {
            metadata: MetadataReply {
                success: false,
                title: None,
                error: Some(message.to_owned()),
            },
            ..Self::default()
        }
    }

    pub fn last_job(&self) -> Option<ConvertJob> {
        self.jobs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ConversionBackend for StubBackend {
    async fn check_cache(&self, _lookup: &CacheLookup) -> Result<CacheReply, UpstreamError> {
        self.cache_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.cache.clone())
    }

    async fn fetch_metadata(&self, _url: &str) -> Result<MetadataReply, UpstreamError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.metadata.clone())
    }

    async fn convert(&self, job: &ConvertJob) -> Result<ConvertReply, UpstreamError> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(self.convert.clone())
    }

    async fn record(&self, _entry: &RecordEntry) -> Result<(), UpstreamError> {
        Ok(())
    }
}

pub fn test_state(backend: Arc<StubBackend>) -> Arc<AppState> {
    test_state_with(backend, Config::default())
}

pub fn test_state_with(backend: Arc<StubBackend>, config: Config) -> Arc<AppState> {
    Arc::new(AppState {
        config: Arc::new(config),
        converter: Converter::new(backend),
    })
}
