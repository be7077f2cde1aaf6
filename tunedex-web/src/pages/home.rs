use crate::api;
use crate::Route;
use dioxus::prelude::*;
use tunedex_ui::components::{ErrorDisplay, LoadingSpinner, SongCard};
use tunedex_ui::stores::SongFilters;

/// The landing page shows one large unfiltered page of the catalog.
const HOME_LIMIT: usize = 100;

#[component]
pub fn Home() -> Element {
    let mut data =
        use_resource(|| async move { api::fetch_songs(&SongFilters::default(), 0, HOME_LIMIT).await });
    let read = data.read();

    let body = match &*read {
        None => rsx! {
            LoadingSpinner { message: "Loading songs..." }
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay {
                message: e.clone(),
                on_retry: move |_| data.restart(),
            }
        },
        Some(Ok(page)) if page.songs.is_empty() => rsx! {
            div { class: "text-center py-10",
                p { class: "text-xl text-gray-700", "No songs found. Add some in the admin panel!" }
            }
        },
        Some(Ok(page)) => {
            let songs = page.songs.clone();
            rsx! {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for song in songs {
                        SongCard { key: "{song.id}", song }
                    }
                }
            }
        }
    };
    drop(read);

    rsx! {
        main { class: "min-h-screen bg-gradient-to-b from-slate-50 to-slate-200 p-4 sm:p-8",
            div { class: "container mx-auto",
                header { class: "my-8 text-center",
                    h1 { class: "text-5xl font-extrabold text-sky-700", "Song Directory" }
                    p { class: "text-lg text-gray-600 mt-2", "Browse your favorite tunes." }
                    div { class: "mt-4 flex justify-center gap-4",
                        Link {
                            to: Route::Browse {},
                            class: "px-6 py-2 bg-sky-600 hover:bg-sky-700 text-white font-semibold rounded-lg shadow-md transition",
                            "Browse Songs"
                        }
                        Link {
                            to: Route::AdminDashboard {},
                            class: "px-6 py-2 bg-green-600 hover:bg-green-700 text-white font-semibold rounded-lg shadow-md transition",
                            "Admin Panel"
                        }
                    }
                }
                {body}
            }
        }
    }
}
