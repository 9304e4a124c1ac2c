use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(api::UsersClient::new);
    // Reads <config dir>/user-registry/registry.toml when present
    use_context_provider(ui::load_config);

    rsx! {
        document::Title { "User Registry" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::RegistryPage {}
    }
}
