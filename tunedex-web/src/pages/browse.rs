use crate::api;
use crate::Route;
use dioxus::prelude::*;
use tunedex_ui::components::{
    ErrorDisplay, FilterBar, LoadingSpinner, PaginationControls, SongCard,
};
use tunedex_ui::stores::{BrowseState, BROWSE_PAGE_SIZE};

/// Run one search against the current filters and page. The sequence number
/// from `begin_search` makes sure a slow response can't overwrite the
/// results of a search that started later.
async fn run_search(mut state: Signal<BrowseState>) {
    let (seq, filters, skip) = {
        let mut st = state.write();
        let seq = st.begin_search();
        (seq, st.filters.clone(), st.skip())
    };
    match api::fetch_songs(&filters, skip, BROWSE_PAGE_SIZE).await {
        Ok(page) => {
            state.write().apply_success(seq, page.songs, page.total_count);
        }
        Err(message) => {
            state.write().apply_failure(seq, message);
        }
    }
}

#[component]
pub fn Browse() -> Element {
    let mut state = use_signal(BrowseState::new);
    // Initial load: empty filters, page 1.
    use_future(move || run_search(state));

    let st = state();

    let results = if st.loading {
        rsx! {
            LoadingSpinner { message: "Loading songs..." }
        }
    } else if let Some(error) = st.error.clone() {
        rsx! {
            ErrorDisplay {
                message: error,
                on_retry: move |_| {
                    spawn(run_search(state));
                },
            }
        }
    } else if st.songs.is_empty() {
        rsx! {
            div { class: "text-center py-10",
                p { class: "text-xl text-gray-700",
                    "No songs found matching your criteria. Try adjusting your filters."
                }
            }
        }
    } else {
        rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8",
                for song in st.songs.clone() {
                    SongCard { key: "{song.id}", song }
                }
            }
            PaginationControls {
                page: st.page,
                total_pages: st.total_pages(),
                on_page_change: move |n| {
                    if state.write().go_to_page(n) {
                        spawn(run_search(state));
                    }
                },
            }
        }
    };

    rsx! {
        main { class: "min-h-screen bg-gradient-to-b from-slate-100 to-slate-300 p-4 sm:p-8",
            div { class: "container mx-auto",
                header { class: "my-8",
                    div { class: "flex justify-between items-center",
                        h1 { class: "text-4xl sm:text-5xl font-extrabold text-sky-700", "Browse Songs" }
                        Link {
                            to: Route::Home {},
                            class: "px-4 py-2 bg-sky-600 hover:bg-sky-700 text-white font-semibold rounded-lg shadow-md transition",
                            "Back to Home"
                        }
                    }
                    p { class: "text-lg text-gray-600 mt-2",
                        "Find your favorite tunes using the filters below."
                    }
                }

                FilterBar {
                    filters: st.filters.clone(),
                    searching: st.loading,
                    on_change: move |(field, value)| {
                        state.write().set_filter(field, value);
                    },
                    on_search: move |_| {
                        spawn(run_search(state));
                    },
                }

                {results}
            }
        }
    }
}
