use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// Video metadata as consumed by metrics, scoring and analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub channel_id: String,
    pub published_at: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub duration: Option<String>,
    pub url: String,
    pub description: Option<String>,
}

// --- Input Structures ---

/// Raw video record as dumped by the search client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub channel_id: String,
    pub published_at: Option<String>, // ISO 8601 string from API
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    pub duration: Option<String>,
    #[serde(default)]
    pub url: String,
    pub description: Option<String>,
}

impl VideoRecord {
    /// Converts the wire record into a `Video`.
    ///
    /// A missing or unparseable publish time is replaced by `now`, so the
    /// record stays in the batch with minimal age instead of failing it.
    pub fn into_video(self, now: DateTime<Utc>) -> Video {
        let published_at = match self.published_at.as_deref().map(parse_published_at) {
            Some(Some(date)) => date,
            Some(None) => {
                warn!(
                    "Unparseable publish time {:?} for video {}, using now",
                    self.published_at, self.id
                );
                now
            }
            None => {
                warn!("Missing publish time for video {}, using now", self.id);
                now
            }
        };

        Video {
            id: self.id,
            title: self.title,
            channel: self.channel,
            channel_id: self.channel_id,
            published_at,
            views: self.views,
            likes: self.likes,
            comments: self.comments,
            duration: self.duration,
            url: self.url,
            description: self.description,
        }
    }
}

/// Parses the timestamp formats seen in search dumps.
/// Naive timestamps are taken as UTC.
pub fn parse_published_at(date_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_published_at_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 2, 20, 8, 30, 0).unwrap();
        assert_eq!(parse_published_at("2024-02-20T08:30:00Z"), Some(expected));
        assert_eq!(parse_published_at("2024-02-20T10:30:00+02:00"), Some(expected));
        assert_eq!(parse_published_at("2024-02-20T08:30:00"), Some(expected));
        assert_eq!(parse_published_at("2024-02-20T08:30:00.000"), Some(expected));
        assert_eq!(parse_published_at("2024-02-20 08:30:00"), Some(expected));
        assert_eq!(parse_published_at("yesterday"), None);
    }

    #[test]
    fn test_into_video_substitutes_now_for_bad_timestamps() {
        let missing = VideoRecord { id: "a".into(), ..Default::default() };
        let garbage = VideoRecord {
            id: "b".into(),
            published_at: Some("not a date".into()),
            ..Default::default()
        };

        assert_eq!(missing.into_video(now()).published_at, now());
        assert_eq!(garbage.into_video(now()).published_at, now());
    }

    #[test]
    fn test_record_missing_numbers_default_to_zero() {
        let record: VideoRecord =
            serde_json::from_str(r#"{"id":"x","title":"Only a title"}"#).unwrap();
        let video = record.into_video(now());

        assert_eq!(video.views, 0);
        assert_eq!(video.likes, 0);
        assert_eq!(video.comments, 0);
        assert_eq!(video.title, "Only a title");
    }
}
