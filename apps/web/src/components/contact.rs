use crate::dispatcher::Dispatcher;
use crate::platform;
use chrono::Utc;
use dioxus::prelude::*;
use hw_domain::config::SiteConfig;
use hw_domain::constants::{CONTACT_FORM_ID, CONTACT_SECTION_ID};
use hw_page::{Field, UiEvent};

#[component]
pub(super) fn Contact() -> Element {
    let site = use_context::<SiteConfig>();
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();
    let submit = page.state().form().submit();

    let options = site.content.services.iter().map(|service| {
        rsx! { option { key: "{service}", value: "{service}", "{service}" } }
    });

    rsx! {
        section { id: CONTACT_SECTION_ID, class: "section contact",
            div { class: "container",
                h2 { class: "section-title", "Contact Us" }
                form {
                    id: CONTACT_FORM_ID,
                    class: "contact-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        async move {
                            let token = platform::verification_token().await;
                            dispatcher.send(UiEvent::FormSubmitted { token, at: Utc::now() });
                        }
                    },
                    TextField { field: Field::Name, label: "Name", kind: "text" }
                    TextField { field: Field::Email, label: "Email", kind: "email" }
                    TextField { field: Field::Phone, label: "Phone", kind: "tel" }
                    div { class: "form-group",
                        label { r#for: Field::Service.id(), "Service" }
                        select {
                            id: Field::Service.id(),
                            name: Field::Service.id(),
                            value: "{page.state().form().field(Field::Service).value}",
                            onchange: move |evt: FormEvent| {
                                dispatcher.send(UiEvent::FieldInput {
                                    field: Field::Service,
                                    value: evt.value(),
                                });
                            },
                            option { value: "", "Select a service" }
                            {options}
                        }
                    }
                    TextField { field: Field::Message, label: "Message", kind: "textarea" }
                    div { class: "g-recaptcha", "data-sitekey": "{site.contact.recaptcha_site_key}" }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary submit-btn",
                        disabled: submit.is_disabled(),
                        "{submit.label()}"
                    }
                }
            }
        }
    }
}

/// A controlled input: value and border colour come from the controller.
#[component]
fn TextField(field: Field, label: &'static str, kind: &'static str) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();
    let state = page.state().form().field(field);
    let style = format!("border-color: {};", state.tone.border_color());
    let required = field.is_required();

    let oninput = move |evt: FormEvent| {
        dispatcher.send(UiEvent::FieldInput { field, value: evt.value() });
    };
    let onblur = move |_: FocusEvent| dispatcher.send(UiEvent::FieldBlurred(field));

    rsx! {
        div { class: "form-group",
            label { r#for: field.id(), "{label}" }
            if kind == "textarea" {
                textarea {
                    id: field.id(),
                    name: field.id(),
                    rows: 5,
                    required,
                    style,
                    value: "{state.value}",
                    oninput: oninput,
                    onblur: onblur,
                }
            } else {
                input {
                    id: field.id(),
                    name: field.id(),
                    r#type: kind,
                    required,
                    style,
                    value: "{state.value}",
                    oninput: oninput,
                    onblur: onblur,
                }
            }
        }
    }
}
