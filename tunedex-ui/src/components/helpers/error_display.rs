//! Error display component

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Generic error display box with an optional retry affordance
#[component]
pub fn ErrorDisplay(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded-lg mb-4 flex items-center justify-between gap-4",
            p { "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
