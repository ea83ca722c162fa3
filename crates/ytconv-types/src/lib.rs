//! Request-scoped domain values shared by the upstream client and the server.
//!
//! Nothing in this crate performs I/O. It turns the raw `url` / `type` /
//! `quality` strings of an incoming request into a validated
//! [`ConversionRequest`] carrying the codes the conversion service expects.

pub mod error;
pub mod media;
pub mod quality;
pub mod request;
pub mod video_id;

pub use error::ValidationError;
pub use media::MediaKind;
pub use quality::{audio_quality_code, video_quality_code, QualityCode};
pub use request::ConversionRequest;
pub use video_id::VideoId;
