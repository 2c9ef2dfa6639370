use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media published as the image of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    #[serde(other)]
    Other,
}

impl MediaKind {
    /// Parse the service's `media_type` string. Unknown kinds map to `Other`.
    #[must_use]
    pub fn from_media_type(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The daily astronomy image (or video) record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyImageRecord {
    pub media: MediaKind,
    pub url: String,
    pub title: String,
    pub explanation: String,
    pub date: NaiveDate,
    pub copyright: Option<String>,
    /// Still frame for video entries, when thumbnails were requested.
    pub thumbnail_url: Option<String>,
}

impl DailyImageRecord {
    /// URL suitable for an `<img>`: the image itself, or a video's thumbnail.
    #[must_use]
    pub fn display_url(&self) -> Option<&str> {
        match self.media {
            MediaKind::Image => Some(&self.url),
            MediaKind::Video | MediaKind::Other => self.thumbnail_url.as_deref(),
        }
    }
}

/// Cached result of one image-of-the-day lookup.
///
/// `image` is `None` when the service was unavailable; that state is cached
/// like a successful lookup so a failing service is not hit on every view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImageSnapshot {
    pub image: Option<DailyImageRecord>,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(media: MediaKind, thumbnail_url: Option<&str>) -> DailyImageRecord {
        DailyImageRecord {
            media,
            url: "https://apod.example/image.jpg".into(),
            title: "Pillars".into(),
            explanation: "Gas and dust.".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            copyright: None,
            thumbnail_url: thumbnail_url.map(String::from),
        }
    }

    #[test]
    fn media_type_parsing_is_lenient() {
        assert_eq!(MediaKind::from_media_type("image"), MediaKind::Image);
        assert_eq!(MediaKind::from_media_type(" VIDEO "), MediaKind::Video);
        assert_eq!(MediaKind::from_media_type("interactive"), MediaKind::Other);
    }

    #[test]
    fn unknown_media_kind_deserializes_to_other() {
        let kind: MediaKind = serde_json::from_str("\"gif\"").unwrap();
        assert_eq!(kind, MediaKind::Other);
    }

    #[test]
    fn display_url_prefers_image_then_thumbnail() {
        assert_eq!(
            record(MediaKind::Image, None).display_url(),
            Some("https://apod.example/image.jpg")
        );
        assert_eq!(
            record(MediaKind::Video, Some("https://apod.example/thumb.jpg")).display_url(),
            Some("https://apod.example/thumb.jpg")
        );
        assert_eq!(record(MediaKind::Video, None).display_url(), None);
    }
}
