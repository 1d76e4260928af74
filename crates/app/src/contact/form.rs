use dioxus::prelude::*;
use shared_types::{ContactSubmission, FormStatus, SubmitButton};
use shared_ui::{Button, Form, FormField, Input, StatusRegion, Textarea};
use std::rc::Rc;

use super::flow::{ContactFlow, ContactView, StatusTicket};
use crate::config::site_config;

/// Signal-backed handles the submission flow drives.
#[derive(Clone, Copy)]
struct SignalView {
    fields: Signal<ContactSubmission>,
    status: Signal<FormStatus>,
    status_serial: Signal<u64>,
    button: Signal<SubmitButton>,
}

impl ContactView for SignalView {
    fn submit_button(&self) -> SubmitButton {
        self.button.read().clone()
    }

    fn set_submit_button(&mut self, state: SubmitButton) {
        self.button.set(state);
    }

    fn show_status(&mut self, status: FormStatus) -> StatusTicket {
        let serial = *self.status_serial.read() + 1;
        self.status_serial.set(serial);
        self.status.set(status);
        StatusTicket(serial)
    }

    fn clear_status(&mut self, ticket: StatusTicket) {
        if *self.status_serial.read() == ticket.0 {
            self.status.set(FormStatus::Idle);
        }
    }

    fn reset_fields(&mut self) {
        self.fields.set(ContactSubmission::default());
    }
}

/// Contact form with a hidden decoy field, a status region, and a submit
/// button that tracks the in-flight send.
#[component]
pub fn ContactForm() -> Element {
    let flow = use_hook(|| Rc::new(ContactFlow::from_config(&site_config().contact)));
    let mut fields = use_signal(ContactSubmission::default);
    let status = use_signal(FormStatus::default);
    let status_serial = use_signal(|| 0u64);
    let button = use_signal(SubmitButton::default);

    let handle_submit = move |_evt: FormEvent| {
        let flow = flow.clone();
        let mut view = SignalView {
            fields,
            status,
            status_serial,
            button,
        };
        let submission = fields();
        spawn(async move {
            let outcome = flow.submit(submission, &mut view).await;
            tracing::debug!(?outcome, "contact submit finished");
        });
    };

    let current = fields();
    let current_status = status();
    let current_button = button();
    let button_label = current_button.label().to_string();

    rsx! {
        Form {
            id: "contactForm",
            onsubmit: handle_submit,

            FormField {
                Input {
                    field_id: "name",
                    name: "name",
                    label: "Name",
                    placeholder: "Your name",
                    value: current.name.clone(),
                    on_input: move |e: FormEvent| fields.write().name = e.value(),
                }
            }
            FormField {
                Input {
                    field_id: "email",
                    name: "email",
                    input_type: "email",
                    label: "Email",
                    placeholder: "you@example.com",
                    value: current.email.clone(),
                    on_input: move |e: FormEvent| fields.write().email = e.value(),
                }
            }
            FormField {
                Input {
                    field_id: "subject",
                    name: "subject",
                    label: "Subject",
                    placeholder: "What's this about?",
                    value: current.subject.clone(),
                    on_input: move |e: FormEvent| fields.write().subject = e.value(),
                }
            }
            FormField {
                Textarea {
                    field_id: "message",
                    name: "message",
                    label: "Message",
                    placeholder: "Tell me about your project...",
                    rows: 6,
                    value: current.message.clone(),
                    on_input: move |e: FormEvent| fields.write().message = e.value(),
                }
            }

            // Hidden from people; bots that fill every input trip it.
            div { class: "form-decoy", aria_hidden: "true",
                label { r#for: "website", "Website" }
                input {
                    id: "website",
                    name: "website",
                    r#type: "text",
                    tabindex: "-1",
                    autocomplete: "off",
                    value: current.website.clone(),
                    oninput: move |e: FormEvent| fields.write().website = e.value(),
                }
            }

            Button {
                class: "submit-button",
                button_type: "submit",
                disabled: current_button.is_disabled(),
                "{button_label}"
            }

            StatusRegion {
                id: "formStatus",
                message: current_status.message().to_string(),
                tone: current_status.tone().map(str::to_string),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{MISSING_FIELDS_MESSAGE, SUCCESS_MESSAGE};

    /// Runs a success followed by a newer error through a `SignalView`,
    /// then clears with either the stale success ticket or the current one.
    #[component]
    fn ClearHarness(stale: bool) -> Element {
        let fields = use_signal(|| ContactSubmission {
            name: "Ada".into(),
            ..ContactSubmission::default()
        });
        let status = use_signal(FormStatus::default);
        let status_serial = use_signal(|| 0u64);
        let button = use_signal(SubmitButton::default);

        use_hook(move || {
            let mut view = SignalView {
                fields,
                status,
                status_serial,
                button,
            };
            view.set_submit_button(SubmitButton::Sending);
            let success = view.show_status(FormStatus::success());
            view.reset_fields();
            let error = view.show_status(FormStatus::error(MISSING_FIELDS_MESSAGE));
            view.clear_status(if stale { success } else { error });
        });

        let current = status();
        let class = current.class();
        let message = current.message().to_string();
        let label = button().label().to_string();
        let name = fields().name;

        rsx! {
            p { class: "{class}", "{message}" }
            span { "label:{label}" }
            span { "name:{name};" }
        }
    }

    fn render(stale: bool) -> String {
        let mut dom = VirtualDom::new_with_props(ClearHarness, ClearHarnessProps { stale });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn stale_ticket_leaves_newer_status_visible() {
        let html = render(true);
        assert!(html.contains(r#"class="form-status error""#), "{html}");
        assert!(html.contains(MISSING_FIELDS_MESSAGE), "{html}");
        assert!(!html.contains(SUCCESS_MESSAGE), "{html}");
    }

    #[test]
    fn current_ticket_returns_region_to_idle() {
        let html = render(false);
        assert!(html.contains(r#"class="form-status""#), "{html}");
        assert!(!html.contains(MISSING_FIELDS_MESSAGE), "{html}");
    }

    #[test]
    fn signal_view_tracks_button_and_fields() {
        let html = render(true);
        assert!(html.contains("label:Sending..."), "{html}");
        assert!(html.contains("name:;"), "{html}");
        assert!(!html.contains("Ada"), "{html}");
    }
}
