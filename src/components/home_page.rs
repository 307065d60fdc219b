use dioxus::prelude::*;

use crate::api::{HttpApi, PortalApi};
use crate::state::SubmissionForm;

#[allow(non_snake_case)]
#[component]
pub fn Home() -> Element {
    let api = use_context::<HttpApi>();
    let mut form = use_signal(SubmissionForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let outcome = api.submit(&request).await;
            form.write().complete(outcome);
        });
    };

    let state = form.read().clone();
    let busy = state.is_submitting();
    let ready = state.can_submit();

    rsx! {
        section { class: "hero",
            div { class: "logo-badge logo-badge-lg", "RC" }
            h1 { "Random Corp" }
            p { class: "hero-tagline", "Welcome to our professional submission portal" }
        }
        div { class: "container",
            div { class: "panel",
                h2 { "Submit Your Information" }
                p { class: "muted", "Please provide your first and last name to get started." }

                if let Some(err) = state.error() {
                    div { class: "alert alert-error", role: "alert", "{err}" }
                }

                form { class: "name-form", onsubmit: on_submit,
                    label { class: "field",
                        span { "First Name *" }
                        input {
                            r#type: "text",
                            value: "{state.first_name}",
                            disabled: busy,
                            required: true,
                            oninput: move |e| form.write().first_name = e.value(),
                        }
                    }
                    label { class: "field",
                        span { "Last Name *" }
                        input {
                            r#type: "text",
                            value: "{state.last_name}",
                            disabled: busy,
                            required: true,
                            oninput: move |e| form.write().last_name = e.value(),
                        }
                    }
                    div { class: "form-actions",
                        button { class: "btn btn-primary", r#type: "submit", disabled: !ready,
                            if busy {
                                span { class: "spinner spinner-sm" }
                            } else {
                                "Submit"
                            }
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| form.write().clear(),
                            "Clear"
                        }
                    }
                }

                if let Some(result) = state.result() {
                    div { class: "result-card",
                        h3 { class: "accent", "Submission Successful! ✅" }
                        p {
                            strong { "Name: " }
                            "{result.first_name} {result.last_name}"
                        }
                        p {
                            strong { "Message: " }
                            "{result.message}"
                        }
                        p { class: "muted small",
                            "Your submission has been processed successfully. Thank you for using Random Corp!"
                        }
                    }
                }
            }
        }
    }
}
