use super::editor::SongEditor;
use crate::api;
use dioxus::prelude::*;
use tunedex_ui::components::{ErrorDisplay, LoadingSpinner};

/// Edit fetches the record first and seeds the form from it.
#[component]
pub fn EditSong(id: String) -> Element {
    let fetch_id = id.clone();
    let mut data = use_resource(move || {
        let id = fetch_id.clone();
        async move { api::fetch_song(&id).await }
    });
    let read = data.read();

    let body = match &*read {
        None => rsx! {
            LoadingSpinner { message: "Loading song details..." }
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay {
                message: e.clone(),
                on_retry: move |_| data.restart(),
            }
        },
        Some(Ok(song)) => {
            let song = song.clone();
            rsx! {
                SongEditor { initial: song }
            }
        }
    };
    drop(read);

    body
}
