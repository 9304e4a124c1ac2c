use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(api::UsersClient::new);
    use_context_provider(ui::load_config);

    rsx! {
        // Global app resources
        document::Title { "User Registration" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::RegistryPage {}
    }
}
