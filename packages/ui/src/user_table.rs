//! Paginated listing of every user.

use dioxus::prelude::*;
use model::{ListingView, PageState, UserRecord, COLUMNS};

use crate::cells::UserCell;
use crate::context::{use_registry_config, use_users_client};
use crate::pagination::TablePagination;
use crate::refresh::use_listing_refresh;

/// Fetches the collection on mount and whenever the listing is invalidated.
/// Each fetch starts from the loading state and the first page.
#[component]
pub fn UserTable() -> Element {
    let client = use_users_client();
    let refresh = use_listing_refresh();
    let initial_page = PageState::new(&use_registry_config().table);

    let mut page = use_signal({
        let initial_page = initial_page.clone();
        move || initial_page
    });
    // None while a fetch is pending.
    let mut users = use_signal(|| Option::<Vec<UserRecord>>::None);

    let _loader = use_resource(move || {
        let client = client.clone();
        let initial_page = initial_page.clone();
        async move {
            let generation = refresh.generation();
            tracing::debug!("Loading users (generation {generation})");
            users.set(None);
            page.set(initial_page);
            users.set(Some(api::fetch_users(&client).await));
        }
    });

    let fetched = users();
    let (rows, total) = match ListingView::new(fetched.as_deref(), &page.read()) {
        ListingView::Loading => {
            return rsx! {
                div { class: "progress", role: "progressbar", div { class: "progress-bar" } }
            };
        }
        ListingView::Empty => {
            return rsx! {
                div {
                    class: "card empty-state",
                    "No users found"
                }
            };
        }
        ListingView::Rows { rows, total } => (rows.to_vec(), total),
    };

    rsx! {
        div {
            class: "card user-table",
            table {
                "aria-label": "user data table",
                thead {
                    tr {
                        for column in COLUMNS {
                            th { key: "{column.key}", "{column.label()}" }
                        }
                    }
                }
                tbody {
                    for user in rows {
                        tr {
                            key: "{user.id}",
                            for column in COLUMNS {
                                UserCell {
                                    key: "{column.key}",
                                    column: *column,
                                    value: user.field_text(column.key),
                                }
                            }
                        }
                    }
                }
            }
            TablePagination { state: page, total }
        }
    }
}
