//! Display types for UI components
//!
//! The song record as the catalog API serves it. Only `title` and `singer`
//! are guaranteed non-empty for a persisted record; everything else is
//! nullable and rendered conditionally.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single song record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Server-assigned identifier, immutable after creation
    pub id: String,
    pub title: String,
    pub singer: String,
    #[serde(default)]
    pub composer: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub youtube_link: Option<String>,
    #[serde(default)]
    pub spotify_link: Option<String>,
    #[serde(default)]
    pub apple_music_link: Option<String>,
    /// The server may send either a plain date or a full RFC 3339 datetime
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub cover_art_url: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Release date formatted for display, e.g. "October 31, 1975"
    pub fn release_date_display(&self) -> Option<String> {
        self.release_date
            .map(|d| d.format("%B %e, %Y").to_string())
    }

    /// Release date as the `YYYY-MM-DD` string used by date inputs
    pub fn release_date_input(&self) -> String {
        self.release_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_release_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid release date: {s}"))),
    }
}

/// Parse a wire date value: `YYYY-MM-DD` or an RFC 3339 datetime.
pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_json(release_date: &str) -> String {
        format!(
            r#"{{
                "id": "0a1b2c3d",
                "title": "Bohemian Rhapsody",
                "singer": "Queen",
                "release_date": {release_date},
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z"
            }}"#
        )
    }

    #[test]
    fn deserializes_plain_date() {
        let song: Song = serde_json::from_str(&song_json("\"1975-10-31\"")).unwrap();
        assert_eq!(
            song.release_date,
            Some(NaiveDate::from_ymd_opt(1975, 10, 31).unwrap())
        );
    }

    #[test]
    fn deserializes_datetime_form() {
        let song: Song = serde_json::from_str(&song_json("\"1975-10-31T00:00:00Z\"")).unwrap();
        assert_eq!(song.release_date_input(), "1975-10-31");
    }

    #[test]
    fn deserializes_null_date() {
        let song: Song = serde_json::from_str(&song_json("null")).unwrap();
        assert_eq!(song.release_date, None);
        assert_eq!(song.release_date_input(), "");
        assert_eq!(song.release_date_display(), None);
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let song: Song = serde_json::from_str(
            r#"{
                "id": "x",
                "title": "A",
                "singer": "B",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(song.album, None);
        assert_eq!(song.lyrics, None);
        assert_eq!(song.release_date, None);
    }
}
