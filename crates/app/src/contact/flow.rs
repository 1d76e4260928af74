use shared_types::{ContactConfig, ContactError, ContactSubmission, FormStatus, SubmitButton};
use std::time::Duration;

use super::transport::{ContactTransport, SiteTransport};
use crate::timer;

/// Identifies one status shown by a [`ContactView`]. Each call to
/// `show_status` hands out a newer ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(pub u64);

/// The UI handles the submission flow drives.
pub trait ContactView {
    fn submit_button(&self) -> SubmitButton;
    fn set_submit_button(&mut self, state: SubmitButton);
    fn show_status(&mut self, status: FormStatus) -> StatusTicket;
    /// Return the status region to idle, unless a newer status than
    /// `ticket` has been shown since.
    fn clear_status(&mut self, ticket: StatusTicket);
    /// Empty every form field, the decoy included.
    fn reset_fields(&mut self);
}

/// How one submit attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The decoy field was filled; nothing was sent.
    Blocked,
    /// Validation failed; nothing was sent.
    Rejected(ContactError),
    Sent,
    Failed(ContactError),
}

/// Handles submit actions of the contact form.
pub struct ContactFlow<T> {
    transport: T,
    status_clear: Duration,
}

impl ContactFlow<SiteTransport> {
    pub fn from_config(config: &ContactConfig) -> Self {
        ContactFlow::new(
            SiteTransport::from_config(config),
            Duration::from_millis(config.status_clear_ms),
        )
    }
}

impl<T: ContactTransport> ContactFlow<T> {
    pub fn new(transport: T, status_clear: Duration) -> Self {
        Self {
            transport,
            status_clear,
        }
    }

    /// Run one submit attempt against `view`.
    ///
    /// On success this keeps running until the success status has been
    /// cleared, so callers should spawn it rather than await it inline.
    pub async fn submit<V: ContactView>(
        &self,
        submission: ContactSubmission,
        view: &mut V,
    ) -> SubmitOutcome {
        if submission.is_decoy_filled() {
            tracing::warn!("decoy field filled, contact submission blocked");
            view.show_status(FormStatus::success());
            return SubmitOutcome::Blocked;
        }

        let message = match submission.into_message() {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(%err, "contact form rejected");
                view.show_status(FormStatus::error(err.status_message()));
                return SubmitOutcome::Rejected(err);
            }
        };

        let original_label = view.submit_button().label().to_string();
        view.set_submit_button(SubmitButton::Sending);
        view.show_status(FormStatus::Sending);

        match self.transport.submit(&message).await {
            Ok(()) => {
                let ticket = view.show_status(FormStatus::success());
                view.reset_fields();
                view.set_submit_button(SubmitButton::Ready {
                    label: original_label,
                });
                timer::sleep(self.status_clear).await;
                view.clear_status(ticket);
                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(%err, "contact submission failed");
                view.show_status(FormStatus::error(err.status_message()));
                view.set_submit_button(SubmitButton::default());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{
        ContactMessage, INVALID_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE, SEND_FAILED_MESSAGE,
        SUCCESS_MESSAGE,
    };
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::time::{sleep, Instant};

    /// Counts calls and resolves after `delay`, failing when asked to.
    #[derive(Clone, Default)]
    struct FakeTransport {
        calls: Rc<Cell<usize>>,
        fail: bool,
        delay: Duration,
    }

    impl ContactTransport for FakeTransport {
        async fn submit(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            self.calls.set(self.calls.get() + 1);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                Err(ContactError::Submission("endpoint down".into()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Debug, Default)]
    struct Screen {
        status: FormStatus,
        serial: u64,
        button: SubmitButton,
        fields: ContactSubmission,
        history: Vec<String>,
    }

    /// A view over a shared screen, so several in-flight submits can
    /// observe each other.
    #[derive(Clone, Default)]
    struct RecordingView(Rc<RefCell<Screen>>);

    impl RecordingView {
        fn with_fields(fields: ContactSubmission) -> Self {
            let view = RecordingView::default();
            view.0.borrow_mut().fields = fields;
            view
        }

        fn status(&self) -> FormStatus {
            self.0.borrow().status.clone()
        }

        fn button(&self) -> SubmitButton {
            self.0.borrow().button.clone()
        }

        fn fields(&self) -> ContactSubmission {
            self.0.borrow().fields.clone()
        }

        fn history(&self) -> Vec<String> {
            self.0.borrow().history.clone()
        }
    }

    impl ContactView for RecordingView {
        fn submit_button(&self) -> SubmitButton {
            self.button()
        }

        fn set_submit_button(&mut self, state: SubmitButton) {
            let mut screen = self.0.borrow_mut();
            screen.history.push(format!(
                "button:{}:{}",
                state.label(),
                if state.is_disabled() { "disabled" } else { "enabled" }
            ));
            screen.button = state;
        }

        fn show_status(&mut self, status: FormStatus) -> StatusTicket {
            let mut screen = self.0.borrow_mut();
            screen.serial += 1;
            screen.history.push(format!("status:{}", status.class()));
            screen.status = status;
            StatusTicket(screen.serial)
        }

        fn clear_status(&mut self, ticket: StatusTicket) {
            let mut screen = self.0.borrow_mut();
            if screen.serial == ticket.0 {
                screen.history.push("status:cleared".to_string());
                screen.status = FormStatus::Idle;
            }
        }

        fn reset_fields(&mut self) {
            let mut screen = self.0.borrow_mut();
            screen.history.push("fields:reset".to_string());
            screen.fields = ContactSubmission::default();
        }
    }

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: "S".into(),
            message: "M".into(),
            website: String::new(),
        }
    }

    fn make_flow(transport: FakeTransport) -> ContactFlow<FakeTransport> {
        ContactFlow::new(transport, Duration::from_secs(5))
    }

    fn working() -> FakeTransport {
        FakeTransport {
            delay: Duration::from_secs(1),
            ..FakeTransport::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn empty_required_field_is_rejected_without_sending() {
        let transport = working();
        let flow = make_flow(transport.clone());
        for field in ["name", "email", "subject", "message"] {
            let mut submission = valid();
            match field {
                "name" => submission.name.clear(),
                "email" => submission.email.clear(),
                "subject" => submission.subject.clear(),
                _ => submission.message.clear(),
            }
            let mut view = RecordingView::with_fields(submission.clone());
            let outcome = flow.submit(submission, &mut view).await;
            assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::MissingFields));
            assert_eq!(view.status(), FormStatus::error(MISSING_FIELDS_MESSAGE));
            assert_eq!(view.button(), SubmitButton::default());
        }
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_email_is_rejected() {
        let transport = working();
        let flow = make_flow(transport.clone());
        let submission = ContactSubmission {
            email: "no-at-sign.com".into(),
            ..valid()
        };
        let mut view = RecordingView::with_fields(submission.clone());
        let outcome = flow.submit(submission.clone(), &mut view).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::InvalidEmail));
        assert_eq!(view.status(), FormStatus::error(INVALID_EMAIL_MESSAGE));
        assert_eq!(view.fields(), submission);
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn filled_decoy_fakes_success_without_sending() {
        let transport = working();
        let flow = make_flow(transport.clone());
        let submission = ContactSubmission {
            website: "http://spam.example".into(),
            ..valid()
        };
        let mut view = RecordingView::with_fields(submission.clone());
        let outcome = flow.submit(submission, &mut view).await;
        assert_eq!(outcome, SubmitOutcome::Blocked);
        assert_eq!(view.status(), FormStatus::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(view.history(), vec!["status:form-status success"]);
    }

    #[tokio::test(start_paused = true)]
    async fn decoy_wins_over_validation() {
        let transport = working();
        let flow = make_flow(transport.clone());
        let submission = ContactSubmission {
            website: "bot".into(),
            ..ContactSubmission::default()
        };
        let mut view = RecordingView::default();
        assert_eq!(flow.submit(submission, &mut view).await, SubmitOutcome::Blocked);
        assert_eq!(view.status(), FormStatus::success());
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submission_sends_resets_and_clears_status() {
        let transport = working();
        let flow = make_flow(transport.clone());
        let mut view = RecordingView::with_fields(valid());
        let observer = view.clone();
        let started = Instant::now();

        let submit = flow.submit(valid(), &mut view);
        let watch = async {
            // In flight: button disabled, nothing cleared yet.
            sleep(Duration::from_millis(500)).await;
            assert_eq!(observer.button(), SubmitButton::Sending);
            assert_eq!(observer.button().label(), "Sending...");
            assert_eq!(observer.status(), FormStatus::Sending);
            assert_eq!(observer.status().message(), "Sending...");
            assert_eq!(observer.fields(), valid());

            // Sent: success shown, fields cleared, button restored.
            sleep(Duration::from_millis(1000)).await;
            assert_eq!(observer.status(), FormStatus::success());
            assert_eq!(observer.fields(), ContactSubmission::default());
            assert_eq!(observer.button(), SubmitButton::default());

            // Still visible just before the clear window ends.
            sleep(Duration::from_millis(4000)).await;
            assert_eq!(observer.status(), FormStatus::success());
        };
        let (outcome, ()) = tokio::join!(submit, watch);

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(view.status(), FormStatus::Idle);
        assert!(started.elapsed() >= Duration::from_secs(6));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(
            view.history(),
            vec![
                "button:Sending...:disabled",
                "status:form-status sending",
                "status:form-status success",
                "fields:reset",
                "button:Send Message:enabled",
                "status:cleared",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn success_restores_original_label() {
        let flow = make_flow(working());
        let mut view = RecordingView::with_fields(valid());
        view.set_submit_button(SubmitButton::Ready {
            label: "Say hello".into(),
        });
        flow.submit(valid(), &mut view).await;
        assert_eq!(
            view.button(),
            SubmitButton::Ready {
                label: "Say hello".into()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn retry_after_error_replaces_it_with_sending_text() {
        let flow = make_flow(working());
        let mut view = RecordingView::default();
        flow.submit(ContactSubmission::default(), &mut view).await;
        assert_eq!(view.status().message(), MISSING_FIELDS_MESSAGE);

        let observer = view.clone();
        let retry = flow.submit(valid(), &mut view);
        let watch = async {
            sleep(Duration::from_millis(500)).await;
            assert_eq!(observer.status().class(), "form-status sending");
            assert_eq!(observer.status().message(), "Sending...");
        };
        let (outcome, ()) = tokio::join!(retry, watch);
        assert_eq!(outcome, SubmitOutcome::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn transport_failure_keeps_fields_and_resets_button() {
        let transport = FakeTransport {
            fail: true,
            ..working()
        };
        let flow = make_flow(transport.clone());
        let mut view = RecordingView::with_fields(valid());
        view.set_submit_button(SubmitButton::Ready {
            label: "Say hello".into(),
        });

        let outcome = flow.submit(valid(), &mut view).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ContactError::Submission("endpoint down".into()))
        );
        assert_eq!(view.status(), FormStatus::error(SEND_FAILED_MESSAGE));
        assert_eq!(view.button(), SubmitButton::default());
        assert_eq!(view.button().label(), "Send Message");
        assert_eq!(view.fields(), valid());

        // Errors are not cleared on a timer.
        sleep(Duration::from_secs(10)).await;
        assert_eq!(view.status(), FormStatus::error(SEND_FAILED_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_status_survives_earlier_clear_timer() {
        let flow = make_flow(working());
        let mut first_view = RecordingView::with_fields(valid());
        let mut second_view = first_view.clone();
        let observer = first_view.clone();

        let first = flow.submit(valid(), &mut first_view);
        let second = async {
            // Submit an empty form while the first success is on screen.
            sleep(Duration::from_secs(2)).await;
            flow.submit(ContactSubmission::default(), &mut second_view)
                .await
        };
        let (first_outcome, second_outcome) = tokio::join!(first, second);

        assert_eq!(first_outcome, SubmitOutcome::Sent);
        assert_eq!(
            second_outcome,
            SubmitOutcome::Rejected(ContactError::MissingFields)
        );
        assert_eq!(observer.status(), FormStatus::error(MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn from_config_reads_clear_window() {
        let config = ContactConfig {
            status_clear_ms: 1500,
            ..ContactConfig::default()
        };
        let flow = ContactFlow::from_config(&config);
        assert_eq!(flow.status_clear, Duration::from_millis(1500));
        assert!(matches!(flow.transport, SiteTransport::Simulated(_)));
    }
}
