//! Filter bar view for the public browse page

use crate::components::{Button, ButtonSize, ButtonVariant, TextInput};
use crate::stores::{FilterField, SongFilters};
use dioxus::prelude::*;

struct FilterInput {
    field: FilterField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const FILTER_INPUTS: &[FilterInput] = &[
    FilterInput {
        field: FilterField::Title,
        label: "Title",
        input_type: "text",
        placeholder: "e.g., Bohemian Rhapsody",
    },
    FilterInput {
        field: FilterField::Singer,
        label: "Singer",
        input_type: "text",
        placeholder: "e.g., Queen",
    },
    FilterInput {
        field: FilterField::Album,
        label: "Album",
        input_type: "text",
        placeholder: "e.g., A Night at the Opera",
    },
    FilterInput {
        field: FilterField::Composer,
        label: "Composer",
        input_type: "text",
        placeholder: "e.g., Freddie Mercury",
    },
    FilterInput {
        field: FilterField::Genre,
        label: "Genre",
        input_type: "text",
        placeholder: "e.g., Rock",
    },
    FilterInput {
        field: FilterField::ReleaseYear,
        label: "Release Year",
        input_type: "number",
        placeholder: "e.g., 1975",
    },
];

/// Filter inputs plus the search button. Changing a field only updates the
/// criteria; the fetch fires on the search callback.
#[component]
pub fn FilterBar(
    filters: SongFilters,
    on_change: EventHandler<(FilterField, String)>,
    on_search: EventHandler<()>,
    #[props(default)] searching: bool,
) -> Element {
    rsx! {
        div { class: "bg-white p-6 sm:p-8 rounded-xl shadow-lg mb-10",
            h2 { class: "text-2xl font-semibold text-gray-800 mb-6", "Filter Options" }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-x-6 gap-y-6",
                for input in FILTER_INPUTS {
                    div {
                        label { class: "block text-sm font-medium text-gray-700", "{input.label}" }
                        TextInput {
                            value: filters.get(input.field).to_string(),
                            input_type: input.input_type,
                            placeholder: input.placeholder,
                            on_input: {
                                let field = input.field;
                                move |value: String| on_change.call((field, value))
                            },
                        }
                    }
                }
            }
            div { class: "mt-6 text-right",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: searching,
                    onclick: move |_| on_search.call(()),
                    "Search"
                }
            }
        }
    }
}
