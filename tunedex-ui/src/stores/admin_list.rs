//! Admin list state store: the manage table and the confirm-then-delete flow
//!
//! Deletion is optimistic only after the server confirms: the record leaves
//! the in-memory list on success and stays visible on failure.

use crate::display_types::Song;

/// Page size for the admin list; large enough that the view is effectively
/// unpaginated.
pub const ADMIN_PAGE_SIZE: usize = 200;

/// State for the admin manage-songs view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminListState {
    pub songs: Vec<Song>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id awaiting confirmation, if the dialog is open
    pub pending_delete: Option<String>,
    /// Whether a DELETE is outstanding
    pub deleting: bool,
}

impl AdminListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load_success(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.loading = false;
    }

    pub fn finish_load_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Open the confirmation dialog for `id`. No API call yet.
    pub fn request_delete(&mut self, id: String) {
        self.pending_delete = Some(id);
    }

    /// Close the confirmation dialog without calling the API.
    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Confirm the pending deletion: marks the DELETE as in flight and
    /// returns the id to delete, or None if nothing is pending.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.clone()?;
        self.deleting = true;
        Some(id)
    }

    /// Server confirmed: remove exactly that record and close the dialog.
    pub fn finish_delete_success(&mut self, id: &str) {
        self.songs.retain(|s| s.id != id);
        self.deleting = false;
        self.pending_delete = None;
    }

    /// Server refused: the record stays in the list, the error is surfaced,
    /// and the dialog closes.
    pub fn finish_delete_failure(&mut self, message: String) {
        self.error = Some(message);
        self.deleting = false;
        self.pending_delete = None;
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

    fn loaded_state() -> AdminListState {
        let mut state = AdminListState::default();
        state.begin_load();
        state.finish_load_success(vec![song("a"), song("b"), song("c")]);
        state
    }

    #[test]
    fn successful_delete_removes_exactly_the_confirmed_record() {
        let mut state = loaded_state();
        state.request_delete("b".to_string());

        let id = state.begin_delete().unwrap();
        assert_eq!(id, "b");
        assert!(state.deleting);

        state.finish_delete_success(&id);
        let ids: Vec<&str> = state.songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(state.pending_delete, None);
        assert!(!state.deleting);
    }

    #[test]
    fn failed_delete_leaves_list_unchanged() {
        let mut state = loaded_state();
        state.request_delete("b".to_string());
        let _id = state.begin_delete().unwrap();

        state.finish_delete_failure("Song not found".to_string());
        assert_eq!(state.songs.len(), 3);
        assert_eq!(state.error.as_deref(), Some("Song not found"));
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn cancel_closes_without_touching_the_list() {
        let mut state = loaded_state();
        state.request_delete("a".to_string());
        state.cancel_delete();
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.songs.len(), 3);
    }

    #[test]
    fn begin_delete_without_pending_is_a_no_op() {
        let mut state = loaded_state();
        assert_eq!(state.begin_delete(), None);
        assert!(!state.deleting);
    }

    #[test]
    fn load_failure_sets_error() {
        let mut state = AdminListState::default();
        state.begin_load();
        state.finish_load_failure("Network error".to_string());
        assert!(state.songs.is_empty());
        assert_eq!(state.error.as_deref(), Some("Network error"));
        assert!(!state.loading);
    }
}
