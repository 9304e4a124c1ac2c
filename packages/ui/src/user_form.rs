//! Registration form component.

use dioxus::prelude::*;
use model::{Field, Gender, RegistrationForm};

use crate::context::use_users_client;
use crate::icons::FaLock;
use crate::text_field::TextField;
use crate::Icon;

/// Validated registration form. `on_success` fires once per created user,
/// after the form has been reset.
#[component]
pub fn UserForm(on_success: EventHandler<()>) -> Element {
    let client = use_users_client();
    let mut form = use_signal(RegistrationForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            api::submit_registration(
                &client,
                move || form.write().begin_submit(),
                move |result| {
                    form.write().finish_submit(result);
                },
                move || on_success.call(()),
            )
            .await;
        });
    };

    let submitting = form.read().is_submitting();

    rsx! {
        div {
            class: "registration",
            div { class: "registration-avatar", Icon { icon: FaLock, width: 18, height: 18 } }
            h1 { class: "registration-title", "User Registration" }

            form {
                class: "card registration-form",
                onsubmit: handle_submit,

                TextField { form, field: Field::Name }
                div {
                    class: "form-row",
                    TextField { form, field: Field::Age, input_type: "number" }
                    GenderField { form }
                }
                TextField { form, field: Field::Address, multiline: true }
                TextField { form, field: Field::Pincode }
                div {
                    class: "form-row",
                    TextField { form, field: Field::Password, input_type: "password" }
                    TextField { form, field: Field::ConfirmPassword, input_type: "password" }
                }

                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Submitting..." } else { "Register" }
                }
            }
        }
    }
}

/// Radio group over [`Gender::ALL`].
#[component]
fn GenderField(mut form: Signal<RegistrationForm>) -> Element {
    let selected = form.read().value(Field::Gender).to_string();
    let error = form.read().visible_error(Field::Gender);

    rsx! {
        fieldset {
            class: "field",
            legend { "{Field::Gender.label()}" }
            div {
                class: "radio-group",
                for gender in Gender::ALL {
                    label {
                        key: "{gender.as_str()}",
                        class: "radio",
                        input {
                            r#type: "radio",
                            name: "{Field::Gender.key()}",
                            value: gender.as_str(),
                            checked: selected == gender.as_str(),
                            onchange: move |_| {
                                let mut form = form.write();
                                form.set(Field::Gender, gender.as_str());
                                form.touch(Field::Gender);
                            },
                        }
                        "{gender.label()}"
                    }
                }
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
