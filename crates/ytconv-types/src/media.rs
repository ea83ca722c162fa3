use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

/// Output container requested by the caller.
///
/// The wire labels are the ones accepted in the `type` query parameter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum MediaKind {
    #[default]
    #[serde(rename = "mp3")]
    #[strum(serialize = "mp3")]
    Audio,
    #[serde(rename = "mp4")]
    #[strum(serialize = "mp4")]
    Video,
}

const AUDIO_QUALITIES: &[&str] = &["96", "128", "256", "320"];
const VIDEO_QUALITIES: &[&str] = &["144", "360", "480", "720", "1080"];

impl MediaKind {
    /// Upstream format discriminator: 1 for audio, 2 for video.
    pub fn format_code(self) -> u8 {
        match self {
            MediaKind::Audio => 1,
            MediaKind::Video => 2,
        }
    }

    /// Quality used when the caller does not pass one.
    pub fn default_quality(self) -> &'static str {
        match self {
            MediaKind::Audio => "128",
            MediaKind::Video => "720",
        }
    }

    /// Accepted quality labels, lowest first.
    pub fn valid_qualities(self) -> &'static [&'static str] {
        match self {
            MediaKind::Audio => AUDIO_QUALITIES,
            MediaKind::Video => VIDEO_QUALITIES,
        }
    }

    pub fn accepts_quality(self, quality: &str) -> bool {
        self.valid_qualities().contains(&quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("mp3".parse::<MediaKind>().unwrap(), MediaKind::Audio);
        assert_eq!("MP4".parse::<MediaKind>().unwrap(), MediaKind::Video);
        assert!("wav".parse::<MediaKind>().is_err());
        assert!("".parse::<MediaKind>().is_err());
    }

    #[test]
    fn displays_wire_label() {
        assert_eq!(MediaKind::Audio.to_string(), "mp3");
        assert_eq!(MediaKind::Video.as_ref(), "mp4");
        assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"mp4\"");
    }

    #[test]
    fn format_codes() {
        assert_eq!(MediaKind::Audio.format_code(), 1);
        assert_eq!(MediaKind::Video.format_code(), 2);
    }

    #[test]
    fn quality_sets_and_defaults() {
        assert!(MediaKind::Audio.accepts_quality(MediaKind::Audio.default_quality()));
        assert!(MediaKind::Video.accepts_quality(MediaKind::Video.default_quality()));
        assert!(MediaKind::Audio.accepts_quality("320"));
        assert!(!MediaKind::Audio.accepts_quality("720"));
        assert!(!MediaKind::Video.accepts_quality("128"));
        assert!(!MediaKind::Audio.accepts_quality("0128"));
    }
}
