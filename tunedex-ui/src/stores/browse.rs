//! Browse state store: filters, pagination, and the result page
//!
//! Responses are applied through a sequence guard: every search takes a
//! fresh sequence number and a completion is ignored unless its number is
//! still the latest, so a fast page-click series cannot overwrite newer
//! results with older ones.

use crate::display_types::Song;

/// Page size for the public browse view
pub const BROWSE_PAGE_SIZE: usize = 12;

/// One named filter field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Title,
    Singer,
    Album,
    Composer,
    Genre,
    ReleaseYear,
}

/// Filter criteria for the song list. All fields are input-backed strings;
/// empty means unconstrained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SongFilters {
    pub title: String,
    pub singer: String,
    pub album: String,
    pub composer: String,
    pub genre: String,
    pub release_year: String,
}

impl SongFilters {
    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Title => self.title = value,
            FilterField::Singer => self.singer = value,
            FilterField::Album => self.album = value,
            FilterField::Composer => self.composer = value,
            FilterField::Genre => self.genre = value,
            FilterField::ReleaseYear => self.release_year = value,
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Title => &self.title,
            FilterField::Singer => &self.singer,
            FilterField::Album => &self.album,
            FilterField::Composer => &self.composer,
            FilterField::Genre => &self.genre,
            FilterField::ReleaseYear => &self.release_year,
        }
    }

    /// Query pairs for the list endpoint. Empty fields are omitted; the year
    /// is omitted unless it parses as an integer.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("singer", &self.singer),
            ("album", &self.album),
            ("composer", &self.composer),
            ("genre", &self.genre),
        ] {
            if !value.is_empty() {
                pairs.push((name, value.clone()));
            }
        }
        if let Ok(year) = self.release_year.trim().parse::<i32>() {
            pairs.push(("release_year", year.to_string()));
        }
        pairs
    }
}

/// State for the public browse view
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    /// Current page of results
    pub songs: Vec<Song>,
    /// Total matching records, as reported by the server
    pub total_count: usize,
    /// 1-based page number
    pub page: usize,
    pub filters: SongFilters,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the most recent search
    latest_request: u64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            total_count: 0,
            page: 1,
            filters: SongFilters::default(),
            loading: false,
            error: None,
            latest_request: 0,
        }
    }

    /// Update one filter field and reset to page 1.
    pub fn set_filter(&mut self, field: FilterField, value: String) {
        self.filters.set(field, value);
        self.page = 1;
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(BROWSE_PAGE_SIZE)
    }

    /// Record offset for the current page.
    pub fn skip(&self) -> usize {
        (self.page - 1) * BROWSE_PAGE_SIZE
    }

    /// Move to page `n` if it is within `[1, total_pages]`. Returns whether
    /// the page changed; the caller re-fetches on `true`.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.page = n;
        true
    }

    /// Start a search: sets loading, clears the error, and returns the
    /// sequence number the completion must present.
    pub fn begin_search(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.latest_request += 1;
        self.latest_request
    }

    /// Apply a successful response. Returns false (unapplied) if a newer
    /// search has started since `seq` was issued.
    pub fn apply_success(&mut self, seq: u64, songs: Vec<Song>, total_count: usize) -> bool {
        if seq != self.latest_request {
            tracing::debug!("discarding stale search response (seq {seq})");
            return false;
        }
        self.songs = songs;
        self.total_count = total_count;
        self.loading = false;
        self.error = None;
        true
    }

    /// Apply a failed response: clears the results and surfaces the error.
    /// Stale completions are discarded like in `apply_success`.
    pub fn apply_failure(&mut self, seq: u64, message: String) -> bool {
        if seq != self.latest_request {
            tracing::debug!("discarding stale search failure (seq {seq})");
            return false;
        }
        self.songs.clear();
        self.error = Some(message);
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn song(id: &str) -> Song {
        Song {
            id: id.to_string(),
            title: format!("Song {id}"),
            singer: "Singer".to_string(),
            composer: None,
            album: None,
            youtube_link: None,
            spotify_link: None,
            apple_music_link: None,
            release_date: None,
            genre: None,
            cover_art_url: None,
            lyrics: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_filters_produce_no_query_pairs() {
        let filters = SongFilters::default();
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn only_set_filters_appear_in_query() {
        let mut filters = SongFilters::default();
        filters.set(FilterField::Singer, "Queen".to_string());
        filters.set(FilterField::ReleaseYear, "1975".to_string());
        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("singer", "Queen".to_string()),
                ("release_year", "1975".to_string()),
            ]
        );
    }

    #[test]
    fn blank_year_is_unset() {
        let mut filters = SongFilters::default();
        filters.set(FilterField::ReleaseYear, "1975".to_string());
        filters.set(FilterField::ReleaseYear, String::new());
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn non_numeric_year_is_omitted() {
        let mut filters = SongFilters::default();
        filters.set(FilterField::ReleaseYear, "next year".to_string());
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn set_filter_resets_page() {
        let mut state = BrowseState::new();
        state.total_count = 60;
        state.page = 4;
        state.set_filter(FilterField::Title, "Rhapsody".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(state.filters.title, "Rhapsody");
    }

    #[test]
    fn total_pages_rounds_up() {
        let mut state = BrowseState::new();
        state.total_count = 25;
        assert_eq!(state.total_pages(), 3);
        state.total_count = 24;
        assert_eq!(state.total_pages(), 2);
        state.total_count = 0;
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn go_to_page_is_bounded() {
        let mut state = BrowseState::new();
        state.total_count = 25; // 3 pages

        assert!(!state.go_to_page(0));
        assert_eq!(state.page, 1);

        assert!(!state.go_to_page(4));
        assert_eq!(state.page, 1);

        assert!(state.go_to_page(3));
        assert_eq!(state.page, 3);
        assert_eq!(state.skip(), 24);
    }

    #[test]
    fn success_replaces_results() {
        let mut state = BrowseState::new();
        let seq = state.begin_search();
        assert!(state.loading);
        assert!(state.apply_success(seq, vec![song("a"), song("b")], 25));
        assert!(!state.loading);
        assert_eq!(state.songs.len(), 2);
        assert_eq!(state.total_count, 25);
    }

    #[test]
    fn failure_clears_results_and_sets_error() {
        let mut state = BrowseState::new();
        let seq = state.begin_search();
        assert!(state.apply_success(seq, vec![song("a")], 1));

        let seq = state.begin_search();
        assert!(state.apply_failure(seq, "Network error".to_string()));
        assert!(state.songs.is_empty());
        assert_eq!(state.error.as_deref(), Some("Network error"));
        assert!(!state.loading);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = BrowseState::new();
        let first = state.begin_search();
        let second = state.begin_search();

        // The older request resolves after the newer one started.
        assert!(!state.apply_success(first, vec![song("old")], 99));
        assert!(state.songs.is_empty());
        assert_eq!(state.total_count, 0);

        assert!(state.apply_success(second, vec![song("new")], 1));
        assert_eq!(state.songs[0].id, "new");

        // A stale failure must not clobber the applied result either.
        assert!(!state.apply_failure(first, "too late".to_string()));
        assert_eq!(state.error, None);
        assert_eq!(state.songs.len(), 1);
    }
}
