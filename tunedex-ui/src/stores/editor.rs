//! Editor state store: the create/edit draft and its submit lifecycle

use chrono::NaiveDate;
use serde::Serialize;

use crate::display_types::Song;

/// One editable field of the draft
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Singer,
    Composer,
    Album,
    YoutubeLink,
    SpotifyLink,
    AppleMusicLink,
    ReleaseDate,
    Genre,
    CoverArtUrl,
    Lyrics,
}

/// In-memory form draft. Every field is the raw input string; normalization
/// to the wire shape happens in `to_payload`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SongDraft {
    pub title: String,
    pub singer: String,
    pub composer: String,
    pub album: String,
    pub youtube_link: String,
    pub spotify_link: String,
    pub apple_music_link: String,
    /// `YYYY-MM-DD`, or empty for "no date"
    pub release_date: String,
    pub genre: String,
    pub cover_art_url: String,
    pub lyrics: String,
}

impl SongDraft {
    /// Seed the draft from an existing record, with the date formatted the
    /// way a date input expects it.
    pub fn from_song(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            singer: song.singer.clone(),
            composer: song.composer.clone().unwrap_or_default(),
            album: song.album.clone().unwrap_or_default(),
            youtube_link: song.youtube_link.clone().unwrap_or_default(),
            spotify_link: song.spotify_link.clone().unwrap_or_default(),
            apple_music_link: song.apple_music_link.clone().unwrap_or_default(),
            release_date: song.release_date_input(),
            genre: song.genre.clone().unwrap_or_default(),
            cover_art_url: song.cover_art_url.clone().unwrap_or_default(),
            lyrics: song.lyrics.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Singer => self.singer = value,
            DraftField::Composer => self.composer = value,
            DraftField::Album => self.album = value,
            DraftField::YoutubeLink => self.youtube_link = value,
            DraftField::SpotifyLink => self.spotify_link = value,
            DraftField::AppleMusicLink => self.apple_music_link = value,
            DraftField::ReleaseDate => self.release_date = value,
            DraftField::Genre => self.genre = value,
            DraftField::CoverArtUrl => self.cover_art_url = value,
            DraftField::Lyrics => self.lyrics = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Singer => &self.singer,
            DraftField::Composer => &self.composer,
            DraftField::Album => &self.album,
            DraftField::YoutubeLink => &self.youtube_link,
            DraftField::SpotifyLink => &self.spotify_link,
            DraftField::AppleMusicLink => &self.apple_music_link,
            DraftField::ReleaseDate => &self.release_date,
            DraftField::Genre => &self.genre,
            DraftField::CoverArtUrl => &self.cover_art_url,
            DraftField::Lyrics => &self.lyrics,
        }
    }

    /// Title and singer are the only required fields; the rest of the
    /// validation belongs to the server.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.singer.trim().is_empty() {
            return Err("Singer is required.".to_string());
        }
        Ok(())
    }

    /// Build the request body: empty optionals become explicit nulls, and an
    /// empty date becomes the "no date" value rather than an empty string.
    pub fn to_payload(&self) -> SongPayload {
        SongPayload {
            title: self.title.clone(),
            singer: self.singer.clone(),
            composer: none_if_empty(&self.composer),
            album: none_if_empty(&self.album),
            youtube_link: none_if_empty(&self.youtube_link),
            spotify_link: none_if_empty(&self.spotify_link),
            apple_music_link: none_if_empty(&self.apple_music_link),
            release_date: NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok(),
            genre: none_if_empty(&self.genre),
            cover_art_url: none_if_empty(&self.cover_art_url),
            lyrics: none_if_empty(&self.lyrics),
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Request body for create and update calls. Every field is serialized, so
/// unset optionals go over the wire as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SongPayload {
    pub title: String,
    pub singer: String,
    pub composer: Option<String>,
    pub album: Option<String>,
    pub youtube_link: Option<String>,
    pub spotify_link: Option<String>,
    pub apple_music_link: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub cover_art_url: Option<String>,
    pub lyrics: Option<String>,
}

/// State for the song editor view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub draft: SongDraft,
    /// Whether a submit is outstanding; the form disables its buttons
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl EditorState {
    /// Create mode starts empty; edit mode seeds from the fetched record.
    pub fn new(initial: Option<&Song>) -> Self {
        Self {
            draft: initial.map(SongDraft::from_song).unwrap_or_default(),
            submitting: false,
            error: None,
            success: None,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
        self.success = None;
    }

    /// The draft is kept on failure so the user can correct and retry.
    pub fn finish_failure(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    pub fn finish_success(&mut self, message: String) {
        self.submitting = false;
        self.success = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_serialize_as_null() {
        let mut draft = SongDraft::default();
        draft.set(DraftField::Title, "A".to_string());
        draft.set(DraftField::Singer, "B".to_string());

        let body = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(body["title"], "A");
        assert_eq!(body["singer"], "B");
        assert_eq!(body["release_date"], serde_json::Value::Null);
        assert_eq!(body["album"], serde_json::Value::Null);
        assert_eq!(body["lyrics"], serde_json::Value::Null);
    }

    #[test]
    fn set_date_serializes_as_plain_date() {
        let mut draft = SongDraft::default();
        draft.set(DraftField::Title, "A".to_string());
        draft.set(DraftField::Singer, "B".to_string());
        draft.set(DraftField::ReleaseDate, "1975-10-31".to_string());

        let body = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(body["release_date"], "1975-10-31");
    }

    #[test]
    fn seeding_formats_datetime_as_input_date() {
        let song: Song = serde_json::from_str(
            r#"{
                "id": "s1",
                "title": "Bohemian Rhapsody",
                "singer": "Queen",
                "release_date": "1975-10-31T00:00:00Z",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        let draft = SongDraft::from_song(&song);
        assert_eq!(draft.release_date, "1975-10-31");
        assert_eq!(draft.title, "Bohemian Rhapsody");
        assert_eq!(draft.composer, "");
    }

    #[test]
    fn validate_requires_title_and_singer() {
        let mut draft = SongDraft::default();
        assert!(draft.validate().is_err());

        draft.set(DraftField::Title, "  ".to_string());
        draft.set(DraftField::Singer, "Queen".to_string());
        assert!(draft.validate().is_err());

        draft.set(DraftField::Title, "A Song".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn failure_preserves_draft() {
        let mut editor = EditorState::new(None);
        editor.set_field(DraftField::Title, "Keep me".to_string());
        editor.begin_submit();
        assert!(editor.submitting);

        editor.finish_failure("Song rejected".to_string());
        assert!(!editor.submitting);
        assert_eq!(editor.error.as_deref(), Some("Song rejected"));
        assert_eq!(editor.draft.title, "Keep me");
    }
}
