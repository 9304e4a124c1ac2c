//! Hooks for the app-wide contexts the platform `App` components provide.

use api::UsersClient;
use dioxus::prelude::*;
use model::RegistryConfig;

/// Gateway used by the form and the table.
pub fn use_users_client() -> UsersClient {
    use_context::<UsersClient>()
}

pub fn use_registry_config() -> RegistryConfig {
    use_context::<RegistryConfig>()
}
