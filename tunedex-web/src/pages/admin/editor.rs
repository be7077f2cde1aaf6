use crate::{api, use_admin_session, Route};
use dioxus::prelude::*;
use tunedex_ui::components::SongFormView;
use tunedex_ui::display_types::Song;
use tunedex_ui::stores::{EditorState, SongDraft};

/// Shared wiring for the create and edit pages. Create navigates to the new
/// record's editor on success; edit reseeds the draft from the server's
/// response so the form reflects the stored record.
#[component]
pub(super) fn SongEditor(initial: Option<Song>) -> Element {
    let is_edit_mode = initial.is_some();
    let song_id = initial.as_ref().map(|s| s.id.clone());
    let mut editor = use_signal(|| EditorState::new(initial.as_ref()));
    let session = use_admin_session();
    let nav = use_navigator();

    let on_submit = move |_| {
        let draft = editor.read().draft.clone();
        if let Err(message) = draft.validate() {
            editor.write().error = Some(message);
            return;
        }
        let Some(active) = session() else {
            editor.write().error = Some("API key is missing. Please login again.".to_string());
            return;
        };
        let payload = draft.to_payload();
        let song_id = song_id.clone();
        editor.write().begin_submit();
        spawn(async move {
            let result = match &song_id {
                Some(id) => api::update_song(&active, id, &payload).await,
                None => api::create_song(&active, &payload).await,
            };
            match result {
                Ok(song) => {
                    let verb = if song_id.is_some() { "updated" } else { "created" };
                    editor
                        .write()
                        .finish_success(format!("Song successfully {verb}! ID: {}", song.id));
                    if song_id.is_some() {
                        // Refresh the form from the stored record.
                        editor.write().draft = SongDraft::from_song(&song);
                    } else {
                        nav.push(Route::EditSong { id: song.id });
                    }
                }
                Err(message) => editor.write().finish_failure(message),
            }
        });
    };

    rsx! {
        SongFormView {
            state: editor(),
            is_edit_mode,
            on_field_change: move |(field, value)| {
                editor.write().set_field(field, value);
            },
            on_submit,
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}
