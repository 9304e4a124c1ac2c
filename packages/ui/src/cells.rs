use dioxus::prelude::*;
use model::{avatar_glyph, BadgeCategory, CellKind, Column};

/// One table cell, drawn according to its column's [`CellKind`].
#[component]
pub fn UserCell(column: Column, value: String) -> Element {
    match column.kind {
        CellKind::Text => rsx! {
            td { "{value}" }
        },
        CellKind::Avatar => rsx! {
            td {
                class: "cell-name",
                span { class: "avatar", "{avatar_glyph(&value)}" }
                "{value}"
            }
        },
        CellKind::Badge => rsx! {
            td {
                GenderBadge { value }
            }
        },
    }
}

#[component]
pub fn GenderBadge(value: String) -> Element {
    let category = BadgeCategory::for_value(&value);
    rsx! {
        span {
            class: category.class(),
            "data-category": "{category}",
            "{value}"
        }
    }
}
