//! Reusable textarea component

use dioxus::prelude::*;

/// Multi-line text input with the same styling as `TextInput`
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 6)] rows: i64,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    rsx! {
        textarea {
            class: "mt-1 block w-full min-h-[100px] px-3 py-2 bg-white border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-sky-500 focus:border-sky-500 sm:text-sm",
            id: id.as_deref(),
            rows: "{rows}",
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
