//! Pagination controls for the browse page

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Previous / "Page N of M" / Next. The buttons disable at the bounds; the
/// owning state still treats out-of-range requests as no-ops.
#[component]
pub fn PaginationControls(
    page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "mt-12 flex justify-center items-center gap-4",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                disabled: page <= 1,
                onclick: move |_| on_page_change.call(page - 1),
                "Previous"
            }
            span { class: "text-gray-700 text-sm sm:text-base", "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                disabled: page >= total_pages,
                onclick: move |_| on_page_change.call(page + 1),
                "Next"
            }
        }
    }
}
