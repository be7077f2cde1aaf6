pub mod api;
pub mod pages;
pub mod session;

use dioxus::prelude::*;
use pages::{AdminDashboard, AdminLayout, AdminLogin, Browse, EditSong, Home, ManageSongs, NewSong};
use tunedex_ui::stores::AdminSession;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/songs")]
    Browse {},
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/songs")]
    ManageSongs {},
    #[route("/admin/songs/new")]
    NewSong {},
    #[route("/admin/songs/:id/edit")]
    EditSong { id: String },
}

#[component]
pub fn App() -> Element {
    // The session context: constructed once here, injected everywhere else.
    use_context_provider(|| Signal::new(session::load_session()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

pub fn use_admin_session() -> Signal<Option<AdminSession>> {
    use_context()
}
