use crate::{session, use_admin_session, Route};
use dioxus::prelude::*;
use tunedex_ui::components::{Button, ButtonSize, ButtonVariant, TextInput};
use tunedex_ui::stores::AdminSession;

/// Login stores the key and moves on; the key is only proven valid (or not)
/// by the first mutating call.
#[component]
pub fn AdminLogin() -> Element {
    let session = use_admin_session();
    let nav = use_navigator();
    let mut api_key_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Already logged in: straight to the dashboard.
    use_effect(move || {
        if session.read().is_some() {
            nav.replace(Route::AdminDashboard {});
        }
    });

    let mut submit = move || match AdminSession::new(&api_key_input.read()) {
        Some(new_session) => {
            session::login(session, new_session);
            nav.push(Route::AdminDashboard {});
        }
        None => error.set(Some("API key cannot be empty.".to_string())),
    };

    rsx! {
        div { class: "flex items-center justify-center min-h-screen bg-gradient-to-br from-slate-200 to-slate-400 p-4",
            div { class: "w-full max-w-md p-8 space-y-6 bg-white rounded-xl shadow-2xl",
                h1 { class: "text-3xl font-bold text-center text-sky-700", "Admin Login" }
                div {
                    label { class: "block text-sm font-medium text-gray-700", "API Key" }
                    TextInput {
                        value: api_key_input(),
                        input_type: "password",
                        placeholder: "Enter your admin API key",
                        required: true,
                        on_input: move |v| api_key_input.set(v),
                    }
                }

                if let Some(message) = error() {
                    p { class: "text-sm text-red-600 text-center bg-red-100 p-2 rounded-md",
                        "{message}"
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    class: Some("w-full justify-center".to_string()),
                    onclick: move |_| submit(),
                    "Login"
                }
            }
        }
    }
}
