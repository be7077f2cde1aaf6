//! Reusable text input component

use dioxus::prelude::*;

/// Reusable input component with consistent styling. The `input_type`
/// covers the form's text, url, number, date, and password fields.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let base = "mt-1 block w-full px-3 py-2 bg-white border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-sky-500 focus:border-sky-500 sm:text-sm";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let class = format!("{base} {disabled_class}");

    rsx! {
        input {
            r#type: input_type,
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            required,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
