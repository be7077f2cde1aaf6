//! Admin manage-songs table view

use crate::display_types::Song;
use dioxus::prelude::*;

/// Table of all songs with edit/delete actions per row
#[component]
pub fn AdminSongTable(
    songs: Vec<Song>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "min-w-full divide-y divide-gray-200",
                thead { class: "bg-gray-50",
                    tr {
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Title"
                        }
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Singer"
                        }
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Album"
                        }
                        th { class: "relative px-6 py-3",
                            span { class: "sr-only", "Actions" }
                        }
                    }
                }
                tbody { class: "bg-white divide-y divide-gray-200",
                    for song in songs {
                        tr { key: "{song.id}", class: "hover:bg-gray-50 transition-colors",
                            td { class: "px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900",
                                "{song.title}"
                            }
                            td { class: "px-6 py-4 whitespace-nowrap text-sm text-gray-500",
                                "{song.singer}"
                            }
                            td { class: "px-6 py-4 whitespace-nowrap text-sm text-gray-500",
                                {song.album.as_deref().unwrap_or("N/A")}
                            }
                            td { class: "px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-4",
                                button {
                                    class: "text-indigo-600 hover:text-indigo-900",
                                    onclick: {
                                        let id = song.id.clone();
                                        move |_| on_edit.call(id.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "text-red-600 hover:text-red-900",
                                    onclick: {
                                        let id = song.id.clone();
                                        move |_| on_delete.call(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
