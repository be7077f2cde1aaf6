//! Song form view - shared by the create and edit pages
//!
//! Pure view over `EditorState`: field edits, submit, and cancel all go
//! through callbacks so the page owns the network side.

use crate::components::{
    Button, ButtonSize, ButtonVariant, ErrorDisplay, SuccessBanner, TextArea, TextInput,
};
use crate::stores::{DraftField, EditorState};
use dioxus::prelude::*;

struct LinkInput {
    field: DraftField,
    label: &'static str,
    placeholder: &'static str,
}

const LINK_INPUTS: &[LinkInput] = &[
    LinkInput {
        field: DraftField::YoutubeLink,
        label: "YouTube Link",
        placeholder: "https://youtube.com/watch?v=...",
    },
    LinkInput {
        field: DraftField::SpotifyLink,
        label: "Spotify Link",
        placeholder: "https://open.spotify.com/track/...",
    },
    LinkInput {
        field: DraftField::AppleMusicLink,
        label: "Apple Music Link",
        placeholder: "https://music.apple.com/...",
    },
    LinkInput {
        field: DraftField::CoverArtUrl,
        label: "Cover Art URL",
        placeholder: "https://example.com/image.jpg",
    },
];

#[component]
fn FieldLabel(text: &'static str, #[props(default)] required: bool) -> Element {
    rsx! {
        label { class: "block text-sm font-medium text-gray-700",
            "{text} "
            if required {
                span { class: "text-red-500", "*" }
            }
        }
    }
}

/// The create/edit form over a draft record
#[component]
pub fn SongFormView(
    state: EditorState,
    is_edit_mode: bool,
    on_field_change: EventHandler<(DraftField, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let heading = if is_edit_mode { "Edit Song" } else { "Add New Song" };
    let submit_label = match (state.submitting, is_edit_mode) {
        (true, true) => "Saving...",
        (true, false) => "Creating...",
        (false, true) => "Save Changes",
        (false, false) => "Create Song",
    };
    let submitting = state.submitting;
    let draft = state.draft.clone();

    rsx! {
        div { class: "space-y-6 p-4 sm:p-6 bg-white shadow-lg rounded-lg",
            h2 { class: "text-2xl font-semibold text-sky-700 mb-6", "{heading}" }

            if let Some(error) = &state.error {
                ErrorDisplay { message: error.clone() }
            }
            if let Some(message) = &state.success {
                SuccessBanner { message: message.clone() }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                div {
                    FieldLabel { text: "Title", required: true }
                    TextInput {
                        value: draft.title.clone(),
                        required: true,
                        disabled: submitting,
                        on_input: move |v: String| on_field_change.call((DraftField::Title, v)),
                    }
                }
                div {
                    FieldLabel { text: "Singer", required: true }
                    TextInput {
                        value: draft.singer.clone(),
                        required: true,
                        disabled: submitting,
                        on_input: move |v: String| on_field_change.call((DraftField::Singer, v)),
                    }
                }
                div {
                    FieldLabel { text: "Composer" }
                    TextInput {
                        value: draft.composer.clone(),
                        disabled: submitting,
                        on_input: move |v: String| on_field_change.call((DraftField::Composer, v)),
                    }
                }
                div {
                    FieldLabel { text: "Album" }
                    TextInput {
                        value: draft.album.clone(),
                        disabled: submitting,
                        on_input: move |v: String| on_field_change.call((DraftField::Album, v)),
                    }
                }
                div {
                    FieldLabel { text: "Release Date" }
                    TextInput {
                        value: draft.release_date.clone(),
                        input_type: "date",
                        disabled: submitting,
                        on_input: move |v: String| on_field_change.call((DraftField::ReleaseDate, v)),
                    }
                }
                div {
                    FieldLabel { text: "Genre" }
                    TextInput {
                        value: draft.genre.clone(),
                        disabled: submitting,
                        on_input: move |v: String| on_field_change.call((DraftField::Genre, v)),
                    }
                }
            }

            div { class: "space-y-4",
                for input in LINK_INPUTS {
                    div {
                        FieldLabel { text: input.label }
                        TextInput {
                            value: draft.get(input.field).to_string(),
                            input_type: "url",
                            placeholder: input.placeholder,
                            disabled: submitting,
                            on_input: {
                                let field = input.field;
                                move |v: String| on_field_change.call((field, v))
                            },
                        }
                    }
                }
            }

            div {
                FieldLabel { text: "Lyrics" }
                TextArea {
                    value: draft.lyrics.clone(),
                    disabled: submitting,
                    on_input: move |v: String| on_field_change.call((DraftField::Lyrics, v)),
                }
            }

            div { class: "flex justify-end gap-3 pt-4",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    disabled: submitting,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: submitting,
                    onclick: move |_| on_submit.call(()),
                    "{submit_label}"
                }
            }
        }
    }
}
