//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod cells;
pub use cells::{GenderBadge, UserCell};

mod config;
pub use config::load_config;
#[cfg(not(target_arch = "wasm32"))]
pub use config::load_config_from;

mod context;
pub use context::{use_registry_config, use_users_client};

mod pagination;
pub use pagination::TablePagination;

mod refresh;
pub use refresh::{use_listing_refresh, ListingRefresh};

mod registry_page;
pub use registry_page::RegistryPage;

mod text_field;
pub use text_field::TextField;

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::UserTable;
