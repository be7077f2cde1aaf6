use crate::{session, use_admin_session, Route};
use dioxus::prelude::*;

/// Shell around every admin view: nav, footer, and the session gate. A
/// missing session redirects to login instead of rendering the outlet.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_admin_session();
    let nav = use_navigator();

    use_effect(move || {
        if session.read().is_none() {
            nav.replace(Route::AdminLogin {});
        }
    });

    if session.read().is_none() {
        return rsx! {
            div { class: "text-center p-8 text-gray-600", "Redirecting to login..." }
        };
    }

    rsx! {
        div { class: "min-h-screen bg-slate-100",
            nav { class: "bg-sky-700 text-white p-4 shadow-md",
                div { class: "container mx-auto flex justify-between items-center",
                    Link {
                        to: Route::AdminDashboard {},
                        class: "text-xl font-bold hover:text-sky-200",
                        "Admin Panel"
                    }
                    div { class: "flex items-center gap-4",
                        Link { to: Route::Home {}, class: "hover:text-sky-200", "Public Site" }
                        Link { to: Route::ManageSongs {}, class: "hover:text-sky-200", "Manage Songs" }
                        Link { to: Route::NewSong {}, class: "hover:text-sky-200", "Add New Song" }
                        button {
                            class: "bg-red-500 hover:bg-red-600 px-3 py-1 rounded font-semibold",
                            onclick: move |_| {
                                session::logout(session);
                                nav.push(Route::AdminLogin {});
                            },
                            "Logout"
                        }
                    }
                }
            }
            main { class: "container mx-auto p-4 sm:p-6", Outlet::<Route> {} }
            footer { class: "text-center p-4 text-sm text-slate-600 border-t border-slate-300 mt-8",
                "Song Directory Admin"
            }
        }
    }
}
