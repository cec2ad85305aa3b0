use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::contact::{ContactDraft, Field};

use crate::{Browser, Button};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-chai-cream/60 border border-chai-dark/10 focus:border-chai-gold focus:outline-none transition-colors";

/// Contact form that hands the message off to the visitor's mail client.
#[component]
pub fn ContactForm() -> Element {
    let mut draft = use_signal(ContactDraft::default);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = draft.read().submit();
        match submitted {
            Ok(uri) => {
                info!("Handing contact message off to the mail client");
                Browser::open(&uri);
                error.set(None);
            }
            Err(e) => {
                warn!("Contact form rejected: {}", e);
                error.set(Some(e.to_string()));
                return;
            }
        }
        draft.set(ContactDraft::default());
    };

    let mut update = move |field: Field, value: String| {
        draft.write().set(field, value);
        if error.read().is_some() {
            error.set(None);
        }
    };

    let current = draft();

    rsx! {
      form {
        class: "booking-form bg-white rounded-2xl p-8 shadow-lg space-y-5",
        novalidate: true,
        onsubmit: handle_submit,

        div { class: "grid gap-5 md:grid-cols-2",
          div { class: "space-y-2",
            label { class: "block text-sm font-semibold", "Name" }
            input {
              class: INPUT_CLASS,
              "type": "text",
              placeholder: "Your name",
              value: "{current.name}",
              oninput: move |e| update(Field::Name, e.value()),
            }
          }
          div { class: "space-y-2",
            label { class: "block text-sm font-semibold", "Email" }
            input {
              class: INPUT_CLASS,
              "type": "email",
              placeholder: "your@email.com",
              value: "{current.email}",
              oninput: move |e| update(Field::Email, e.value()),
            }
          }
        }
        div { class: "space-y-2",
          label { class: "block text-sm font-semibold", "Phone" }
          input {
            class: INPUT_CLASS,
            "type": "tel",
            placeholder: "0XXX XXX XXX",
            value: "{current.phone}",
            oninput: move |e| update(Field::Phone, e.value()),
          }
        }
        div { class: "space-y-2",
          label { class: "block text-sm font-semibold", "Message" }
          textarea {
            class: INPUT_CLASS,
            rows: "4",
            placeholder: "How can we help you?",
            value: "{current.message}",
            oninput: move |e| update(Field::Message, e.value()),
          }
        }

        if let Some(message) = error() {
          div { class: "form-error text-sm text-red-700", "{message}" }
        }

        Button { submit: true, class: "w-full", "Send Message" }
      }
    }
}
