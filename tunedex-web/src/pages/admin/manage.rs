use crate::{api, use_admin_session, Route};
use dioxus::prelude::*;
use tunedex_ui::components::{AdminSongTable, ConfirmDialog, ErrorDisplay, LoadingSpinner};
use tunedex_ui::stores::{AdminListState, AdminSession, SongFilters, ADMIN_PAGE_SIZE};

async fn load_songs(mut state: Signal<AdminListState>) {
    state.write().begin_load();
    match api::fetch_songs(&SongFilters::default(), 0, ADMIN_PAGE_SIZE).await {
        Ok(page) => state.write().finish_load_success(page.songs),
        Err(message) => state.write().finish_load_failure(message),
    }
}

/// Issue the DELETE for the confirmed record. The record only leaves the
/// in-memory list once the server confirms.
async fn delete_pending(mut state: Signal<AdminListState>, session: AdminSession) {
    let Some(id) = state.write().begin_delete() else {
        return;
    };
    match api::delete_song(&session, &id).await {
        Ok(()) => state.write().finish_delete_success(&id),
        Err(message) => state.write().finish_delete_failure(message),
    }
}

#[component]
pub fn ManageSongs() -> Element {
    let mut state = use_signal(AdminListState::default);
    let session = use_admin_session();
    let nav = use_navigator();
    use_future(move || load_songs(state));

    let st = state();

    rsx! {
        div { class: "bg-white shadow-xl rounded-lg p-4 sm:p-6",
            div { class: "flex justify-between items-center mb-6",
                h1 { class: "text-3xl font-bold text-sky-700", "Manage Songs" }
                Link {
                    to: Route::NewSong {},
                    class: "px-5 py-2 bg-green-600 hover:bg-green-700 text-white font-semibold rounded-lg shadow-md transition",
                    "Add New Song"
                }
            }

            if let Some(error) = st.error.clone() {
                ErrorDisplay {
                    message: error,
                    on_retry: move |_| {
                        spawn(load_songs(state));
                    },
                }
            }

            if st.loading && st.songs.is_empty() {
                LoadingSpinner { message: "Loading songs..." }
            } else if st.songs.is_empty() {
                p { class: "text-center text-gray-600 py-8", "No songs found." }
            } else {
                AdminSongTable {
                    songs: st.songs.clone(),
                    on_edit: move |id| {
                        nav.push(Route::EditSong { id });
                    },
                    on_delete: move |id| {
                        state.write().request_delete(id);
                    },
                }
            }

            ConfirmDialog {
                is_open: st.pending_delete.is_some(),
                title: "Confirm Deletion",
                message: "Are you sure you want to delete this song? This action cannot be undone.",
                confirm_label: "Delete",
                busy_label: Some("Deleting...".to_string()),
                busy: st.deleting,
                on_confirm: move |_| {
                    if let Some(active) = session() {
                        spawn(delete_pending(state, active));
                    }
                },
                on_cancel: move |_| {
                    state.write().cancel_delete();
                },
            }
        }
    }
}
