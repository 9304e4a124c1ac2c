use dioxus::prelude::*;

use crate::refresh::ListingRefresh;
use crate::{UserForm, UserTable};

/// The whole app: registration form above the user table. A successful
/// registration invalidates the table so it refetches.
#[component]
pub fn RegistryPage() -> Element {
    let mut refresh = use_context_provider(ListingRefresh::new);

    rsx! {
        main {
            class: "registry-page",
            UserForm { on_success: move |_| refresh.invalidate() }
            UserTable {}
        }
    }
}
