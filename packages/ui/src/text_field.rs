use dioxus::prelude::*;
use model::{Field, RegistrationForm};

/// Labelled input bound to one draft field. The error under the input
/// appears once the field has been blurred.
#[component]
pub fn TextField(
    mut form: Signal<RegistrationForm>,
    field: Field,
    #[props(default = "text")] input_type: &'static str,
    /// Render a three-row textarea instead of an input.
    #[props(default)]
    multiline: bool,
) -> Element {
    let id = field.key();
    let value = form.read().value(field).to_string();
    let error = form.read().visible_error(field);
    let class = if error.is_some() { "field field--error" } else { "field" };

    rsx! {
        div {
            class: "{class}",
            label { r#for: "{id}", "{field.label()}" }
            if multiline {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    rows: "3",
                    value: "{value}",
                    oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
                    onblur: move |_| form.write().touch(field),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    r#type: input_type,
                    value: "{value}",
                    oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
                    onblur: move |_| form.write().touch(field),
                }
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
