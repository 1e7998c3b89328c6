//! Contact Form Component
//!
//! Four required fields and a submit button. Submission never leaves the
//! page: the form handler validates, notifies through a blocking dialog,
//! and clears the fields after the simulated send.

use contactpage_core::{ContactField, ContactFields, SubmitOutcome};
use dioxus::prelude::*;

use crate::context::{use_contact_form, use_page_config};
use crate::dialogs::DesktopNotifier;

/// Label and placeholder shown for each field
fn field_text(field: ContactField) -> (&'static str, &'static str) {
    match field {
        ContactField::Name => ("Nombre", "Tu nombre completo"),
        ContactField::Email => ("Correo electrónico", "tucorreo@ejemplo.com"),
        ContactField::Phone => ("Teléfono", "+34 600 000 000"),
        ContactField::Message => ("Mensaje", "Cuéntanos en qué podemos ayudarte"),
    }
}

/// Contact form section
#[component]
pub fn ContactFormSection() -> Element {
    let form = use_contact_form();
    let config = use_page_config();
    let mut fields = use_signal(ContactFields::default);

    let Some(form) = form.read().clone() else {
        return rsx! {};
    };

    let form_class = config
        .read()
        .selectors
        .contact_form
        .trim_start_matches('.')
        .to_string();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let mut current = fields();
        match form.submit(&mut current, &DesktopNotifier) {
            SubmitOutcome::Sent => tracing::info!("Contact form sent (simulated)"),
            SubmitOutcome::Incomplete { missing } => {
                tracing::debug!("Contact form missing {:?}", missing)
            }
        }
        fields.set(current);
    };

    rsx! {
        form {
            class: "{form_class}",
            // Validation is ours; the control's own check would block the event.
            "novalidate": "true",
            onsubmit: on_submit,

            for field in ContactField::ALL {
                ContactInput {
                    key: "{field}",
                    field,
                    value: fields.read().raw(field).to_string(),
                    oninput: move |value: String| fields.write().set(field, value),
                }
            }

            button { class: "btn-primary btn-submit", r#type: "submit", "Enviar mensaje" }
        }
    }
}

/// One labelled contact field
#[component]
fn ContactInput(field: ContactField, value: String, oninput: EventHandler<String>) -> Element {
    let config = use_page_config();
    let ids = config.read().field_ids.clone();
    let id = match field {
        ContactField::Name => ids.name,
        ContactField::Email => ids.email,
        ContactField::Phone => ids.phone,
        ContactField::Message => ids.message,
    };
    let (label, placeholder) = field_text(field);

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", "{label}" }
            {match field.kind().html_type() {
                Some(input_type) => rsx! {
                    input {
                        id: "{id}",
                        name: "{id}",
                        class: "input-field",
                        r#type: input_type,
                        value: "{value}",
                        placeholder,
                        required: true,
                        oninput: move |e| oninput.call(e.value()),
                    }
                },
                None => rsx! {
                    textarea {
                        id: "{id}",
                        name: "{id}",
                        class: "input-field textarea",
                        rows: "5",
                        value: "{value}",
                        placeholder,
                        required: true,
                        oninput: move |e| oninput.call(e.value()),
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_text() {
        for field in ContactField::ALL {
            let (label, placeholder) = field_text(field);
            assert!(!label.is_empty());
            assert!(!placeholder.is_empty());
        }
    }
}
