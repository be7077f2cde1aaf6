use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        div { class: "bg-white shadow-xl rounded-lg p-6 sm:p-8",
            h1 { class: "text-3xl sm:text-4xl font-bold text-sky-700 mb-6 sm:mb-8", "Admin Dashboard" }
            p { class: "text-lg text-gray-700 mb-6",
                "Welcome to the admin area. From here you can manage the song directory."
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                div { class: "p-6 bg-slate-50 rounded-lg shadow hover:shadow-lg transition-shadow",
                    h2 { class: "text-2xl font-semibold text-sky-600 mb-3", "Manage Songs" }
                    p { class: "text-gray-600 mb-4", "View, edit, or delete existing song entries." }
                    Link {
                        to: Route::ManageSongs {},
                        class: "inline-block px-5 py-2 bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-md shadow-sm transition-colors",
                        "Go to Songs"
                    }
                }
                div { class: "p-6 bg-slate-50 rounded-lg shadow hover:shadow-lg transition-shadow",
                    h2 { class: "text-2xl font-semibold text-sky-600 mb-3", "Add New Song" }
                    p { class: "text-gray-600 mb-4", "Create a new entry in the song directory." }
                    Link {
                        to: Route::NewSong {},
                        class: "inline-block px-5 py-2 bg-green-600 hover:bg-green-700 text-white font-medium rounded-md shadow-sm transition-colors",
                        "Add Song"
                    }
                }
            }
        }
    }
}
