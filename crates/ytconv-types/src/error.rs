use thiserror::Error;

/// Input errors detected before any upstream call is made.
///
/// The `Display` text of each variant is returned verbatim to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("YouTube URL is required")]
    MissingUrl,

    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Invalid type. Valid options: mp3, mp4")]
    InvalidType,

    #[error("Invalid audio quality. Valid options: 96, 128, 256, 320")]
    InvalidAudioQuality,

    #[error("Invalid video quality. Valid options: 144, 360, 480, 720, 1080")]
    InvalidVideoQuality,
}
