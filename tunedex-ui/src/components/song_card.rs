//! Song card component - pure view for one public catalog entry

use crate::display_types::Song;
use dioxus::prelude::*;

/// Individual song card. Required fields always render; everything else is
/// conditional on the record actually carrying a value.
#[component]
pub fn SongCard(song: Song) -> Element {
    let released = song.release_date_display();

    rsx! {
        div { class: "bg-white shadow-lg rounded-lg p-6 w-full",
            h2 { class: "text-2xl font-bold mb-2 text-sky-700", "{song.title}" }
            p { class: "text-lg text-gray-700 mb-1",
                strong { "Singer: " }
                "{song.singer}"
            }
            if let Some(album) = &song.album {
                p { class: "text-gray-600 mb-1",
                    strong { "Album: " }
                    "{album}"
                }
            }
            if let Some(composer) = &song.composer {
                p { class: "text-gray-600 mb-1",
                    strong { "Composer: " }
                    "{composer}"
                }
            }
            if let Some(genre) = &song.genre {
                p { class: "text-gray-600 mb-1",
                    strong { "Genre: " }
                    "{genre}"
                }
            }
            if let Some(date) = released {
                p { class: "text-gray-600 mb-3",
                    strong { "Released: " }
                    "{date}"
                }
            }

            div { class: "flex gap-4 mb-4",
                if let Some(url) = &song.youtube_link {
                    a {
                        class: "text-red-600 hover:text-red-700 font-medium",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "YouTube"
                    }
                }
                if let Some(url) = &song.spotify_link {
                    a {
                        class: "text-green-600 hover:text-green-700 font-medium",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Spotify"
                    }
                }
                if let Some(url) = &song.apple_music_link {
                    a {
                        class: "text-purple-600 hover:text-purple-700 font-medium",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Apple Music"
                    }
                }
            }

            if let Some(url) = &song.cover_art_url {
                img {
                    class: "rounded-md w-32 h-32 object-cover",
                    src: "{url}",
                    alt: "Cover art for {song.title}",
                }
            }
        }
    }
}
