//! Fixed lookup tables from user-facing quality labels to upstream codes.
//!
//! Both functions are total: labels outside the table (or that do not parse
//! as a number) fall back to the default code of their media kind.

use serde::Serialize;

use crate::media::MediaKind;

/// Opaque quality selector understood only by the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QualityCode(u8);

impl QualityCode {
    pub fn value(self) -> u8 {
        self.0
    }

    /// Map `label` using the table for `kind`.
    pub fn for_kind(kind: MediaKind, label: &str) -> Self {
        match kind {
            MediaKind::Audio => audio_quality_code(label),
            MediaKind::Video => video_quality_code(label),
        }
    }
}

fn parse_label(label: &str) -> Option<u32> {
    label.trim().parse().ok()
}

/// Bitrate in kbps → code. Unknown values map to the 128 kbps code.
pub fn audio_quality_code(label: &str) -> QualityCode {
    QualityCode(match parse_label(label) {
        Some(320) => 0,
        Some(256) => 1,
        Some(128) => 4,
        Some(96) => 5,
        _ => 4,
    })
}

/// Vertical resolution → code. Unknown values map to the 720p code.
pub fn video_quality_code(label: &str) -> QualityCode {
    QualityCode(match parse_label(label) {
        Some(1080) => 0,
        Some(720) => 1,
        Some(480) => 2,
        Some(360) => 3,
        Some(144) => 4,
        _ => 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_table() {
        let table = [("320", 0), ("256", 1), ("128", 4), ("96", 5)];
        for (label, code) in table {
            assert_eq!(audio_quality_code(label).value(), code, "label {label}");
        }
    }

    #[test]
    fn video_table() {
        let table = [("1080", 0), ("720", 1), ("480", 2), ("360", 3), ("144", 4)];
        for (label, code) in table {
            assert_eq!(video_quality_code(label).value(), code, "label {label}");
        }
    }

    #[test]
    fn unlisted_values_fall_back_to_defaults() {
        for label in ["0", "64", "500", "999999", "abc", ""] {
            assert_eq!(audio_quality_code(label).value(), 4, "label {label:?}");
            assert_eq!(video_quality_code(label).value(), 1, "label {label:?}");
        }
    }

    #[test]
    fn for_kind_dispatches_on_table() {
        assert_eq!(QualityCode::for_kind(MediaKind::Audio, "320").value(), 0);
        assert_eq!(QualityCode::for_kind(MediaKind::Video, "144").value(), 4);
    }
}
