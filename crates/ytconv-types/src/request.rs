use crate::error::ValidationError;
use crate::media::MediaKind;
use crate::quality::QualityCode;
use crate::video_id::VideoId;

/// A validated conversion request.
///
/// Built only through [`ConversionRequest::parse`], so `quality` is always a
/// member of `kind.valid_qualities()` and `quality_code` matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub url: String,
    pub video_id: VideoId,
    pub kind: MediaKind,
    pub quality: String,
    pub quality_code: QualityCode,
}

impl ConversionRequest {
    /// Validate raw query values in order: url presence, url shape, type,
    /// quality. The first failing check wins.
    pub fn parse(
        url: Option<&str>,
        kind: Option<&str>,
        quality: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let url = url
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingUrl)?;
        let video_id = VideoId::from_url(url).ok_or(ValidationError::InvalidUrl)?;

        let kind = match kind {
            Some(raw) => raw
                .parse::<MediaKind>()
                .map_err(|_| ValidationError::InvalidType)?,
            None => MediaKind::default(),
        };

        let quality = quality.unwrap_or_else(|| kind.default_quality());
        if !kind.accepts_quality(quality) {
            return Err(match kind {
                MediaKind::Audio => ValidationError::InvalidAudioQuality,
                MediaKind::Video => ValidationError::InvalidVideoQuality,
            });
        }

        Ok(Self {
            url: url.to_owned(),
            video_id,
            kind,
            quality: quality.to_owned(),
            quality_code: QualityCode::for_kind(kind, quality),
        })
    }

    pub fn format_code(&self) -> u8 {
        self.kind.format_code()
    }
}
