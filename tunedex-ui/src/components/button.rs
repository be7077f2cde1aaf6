//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Sky background - for primary actions
    Primary,
    /// Gray background - for secondary/cancel actions
    Secondary,
    /// Red background - for destructive actions
    Danger,
    /// Green background - for creation shortcuts
    Success,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = match size {
        ButtonSize::Small => {
            "inline-flex items-center gap-2 px-3 py-1.5 text-sm font-medium rounded-lg transition-colors"
        }
        ButtonSize::Medium => {
            "inline-flex items-center gap-2 px-4 py-2 font-medium rounded-lg transition-colors"
        }
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-sky-600 hover:bg-sky-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-200 hover:bg-gray-300 text-gray-700 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Danger => {
            "bg-red-600 hover:bg-red-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Success => {
            "bg-green-600 hover:bg-green-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type,
            disabled,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
