//! HTTP client for the remote song catalog API
//!
//! All functions return user-facing error text; pages render it directly.
//! Non-2xx bodies are expected to carry `{ "detail": ... }` and fall back
//! to a generic message when they don't.

use serde::Deserialize;
use tracing::error;
use tunedex_ui::display_types::Song;
use tunedex_ui::stores::{AdminSession, SongFilters, SongPayload};

const API_KEY_HEADER: &str = "X-API-KEY";

/// Base URL of the catalog API, settable at compile time.
fn base_url() -> &'static str {
    option_env!("TUNEDEX_API_URL").unwrap_or("http://localhost:8000")
}

/// One page of the list endpoint's envelope
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SongPage {
    pub total_count: usize,
    pub songs: Vec<Song>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Query pairs for the list endpoint: the set filters plus the page window.
fn list_query(filters: &SongFilters, skip: usize, limit: usize) -> Vec<(&'static str, String)> {
    let mut pairs = filters.query_pairs();
    pairs.push(("skip", skip.to_string()));
    pairs.push(("limit", limit.to_string()));
    pairs
}

/// Turn a non-2xx body into user-facing text.
fn detail_or_generic(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

async fn error_message(resp: reqwest::Response) -> String {
    let status = resp.status().as_u16();
    let body = resp.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
    let message = detail_or_generic(status, &body);
    error!("catalog API error: {message}");
    message
}

/// Fetch one page of songs matching the filters.
pub async fn fetch_songs(
    filters: &SongFilters,
    skip: usize,
    limit: usize,
) -> Result<SongPage, String> {
    let url = format!("{}/songs/", base_url());
    let resp = reqwest::Client::new()
        .get(&url)
        .query(&list_query(filters, skip, limit))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(error_message(resp).await);
    }
    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

/// Fetch a single song by id.
pub async fn fetch_song(id: &str) -> Result<Song, String> {
    let url = format!("{}/songs/{id}", base_url());
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(error_message(resp).await);
    }
    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

/// Create a new song. Requires the admin credential.
pub async fn create_song(session: &AdminSession, payload: &SongPayload) -> Result<Song, String> {
    let url = format!("{}/songs/", base_url());
    let resp = reqwest::Client::new()
        .post(&url)
        .header(API_KEY_HEADER, session.api_key())
        .json(payload)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(error_message(resp).await);
    }
    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

/// Update an existing song. Requires the admin credential.
pub async fn update_song(
    session: &AdminSession,
    id: &str,
    payload: &SongPayload,
) -> Result<Song, String> {
    let url = format!("{}/songs/{id}", base_url());
    let resp = reqwest::Client::new()
        .put(&url)
        .header(API_KEY_HEADER, session.api_key())
        .json(payload)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(error_message(resp).await);
    }
    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

/// Delete a song by id. Requires the admin credential.
pub async fn delete_song(session: &AdminSession, id: &str) -> Result<(), String> {
    let url = format!("{}/songs/{id}", base_url());
    let resp = reqwest::Client::new()
        .delete(&url)
        .header(API_KEY_HEADER, session.api_key())
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(error_message(resp).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunedex_ui::stores::FilterField;

    #[test]
    fn list_query_includes_window_and_set_filters_only() {
        let mut filters = SongFilters::default();
        filters.set(FilterField::Singer, "Queen".to_string());

        let pairs = list_query(&filters, 24, 12);
        assert_eq!(
            pairs,
            vec![
                ("singer", "Queen".to_string()),
                ("skip", "24".to_string()),
                ("limit", "12".to_string()),
            ]
        );
    }

    #[test]
    fn list_query_with_empty_filters_is_window_only() {
        let pairs = list_query(&SongFilters::default(), 0, 200);
        assert_eq!(
            pairs,
            vec![("skip", "0".to_string()), ("limit", "200".to_string())]
        );
    }

    #[test]
    fn error_detail_is_preferred() {
        let body = br#"{"detail": "Song not found"}"#;
        assert_eq!(detail_or_generic(404, body), "Song not found");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_generic() {
        assert_eq!(
            detail_or_generic(500, b"<html>oops</html>"),
            "Request failed with status 500"
        );
        assert_eq!(
            detail_or_generic(403, br#"{"message": "nope"}"#),
            "Request failed with status 403"
        );
    }

    #[test]
    fn song_page_envelope_deserializes() {
        let page: SongPage = serde_json::from_str(
            r#"{
                "total_count": 25,
                "songs": [{
                    "id": "s1",
                    "title": "Bohemian Rhapsody",
                    "singer": "Queen",
                    "release_date": "1975-10-31T00:00:00Z",
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(page.total_count, 25);
        assert_eq!(page.songs.len(), 1);
        assert_eq!(page.songs[0].release_date_input(), "1975-10-31");
    }
}
