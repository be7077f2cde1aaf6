//! Modal overlay component
//!
//! A fixed overlay that closes on backdrop click; content clicks are kept
//! from propagating so they don't dismiss the dialog.

use dioxus::prelude::*;

/// Modal wrapper. Renders nothing while closed.
#[component]
pub fn Modal(is_open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            onclick: move |_| on_close.call(()),
            div { onclick: move |evt| evt.stop_propagation(), {children} }
        }
    }
}
