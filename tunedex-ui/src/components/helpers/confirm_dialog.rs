//! Confirm dialog view component

use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use dioxus::prelude::*;

/// A generic confirmation dialog view
#[component]
pub fn ConfirmDialog(
    is_open: bool,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    /// Label shown on the confirm button while `busy`
    #[props(default)] busy_label: Option<String>,
    /// Disables both buttons while the confirmed action is in flight
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_text = if busy {
        busy_label.unwrap_or_else(|| confirm_label.clone())
    } else {
        confirm_label.clone()
    };

    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            div { class: "bg-white rounded-lg shadow-xl p-6 max-w-sm w-full",
                h3 { class: "text-lg font-medium text-gray-900 mb-4", "{title}" }
                p { class: "text-sm text-gray-600 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        size: ButtonSize::Medium,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
