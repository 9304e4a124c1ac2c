use dioxus::prelude::*;
use model::PageState;

/// Rows-per-page selector, range label and previous/next buttons.
#[component]
pub fn TablePagination(mut state: Signal<PageState>, total: usize) -> Element {
    let current = state();
    let page = current.page();
    let page_size = current.page_size().to_string();

    rsx! {
        div {
            class: "pagination",
            label {
                class: "pagination-size",
                "Rows per page:"
                select {
                    value: "{page_size}",
                    onchange: move |evt: FormEvent| match evt.value().parse::<usize>() {
                        Ok(size) => state.write().set_page_size(size),
                        Err(e) => tracing::warn!("Ignoring page size {:?}: {}", evt.value(), e),
                    },
                    for size in current.options().iter().copied() {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == current.page_size(),
                            "{size}"
                        }
                    }
                }
            }
            span { class: "pagination-range", "{current.label(total)}" }
            button {
                class: "pagination-button",
                title: "Previous page",
                disabled: !current.has_previous(),
                onclick: move |_| state.write().set_page(page.saturating_sub(1), total),
                "‹"
            }
            button {
                class: "pagination-button",
                title: "Next page",
                disabled: !current.has_next(total),
                onclick: move |_| state.write().set_page(page + 1, total),
                "›"
            }
        }
    }
}
