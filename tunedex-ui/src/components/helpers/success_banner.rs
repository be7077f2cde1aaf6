//! Success banner component

use dioxus::prelude::*;

/// Green confirmation box shown after a successful mutation
#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div { class: "bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded-lg mb-4",
            p { "{message}" }
        }
    }
}
