use super::editor::SongEditor;
use dioxus::prelude::*;

#[component]
pub fn NewSong() -> Element {
    rsx! {
        SongEditor {}
    }
}
