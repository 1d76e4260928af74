use serde::{Deserialize, Serialize};

use crate::contact::{SENDING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE};

/// Outcome display for the contact form's status region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn success() -> Self {
        FormStatus::Success(SUCCESS_MESSAGE.to_string())
    }

    pub fn error(message: impl Into<String>) -> Self {
        FormStatus::Error(message.into())
    }

    /// Text rendered inside the status region. Empty while idle.
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => SENDING_LABEL,
            FormStatus::Success(msg) | FormStatus::Error(msg) => msg,
        }
    }

    /// Modifier class appended to `form-status`.
    pub fn tone(&self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Sending => Some("sending"),
            FormStatus::Success(_) => Some("success"),
            FormStatus::Error(_) => Some("error"),
        }
    }

    /// Full class attribute for the status region.
    pub fn class(&self) -> String {
        match self.tone() {
            Some(tone) => format!("form-status {tone}"),
            None => "form-status".to_string(),
        }
    }
}

/// State of the contact form's submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitButton {
    Ready { label: String },
    Sending,
}

impl Default for SubmitButton {
    fn default() -> Self {
        SubmitButton::Ready {
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

impl SubmitButton {
    pub fn label(&self) -> &str {
        match self {
            SubmitButton::Ready { label } => label,
            SubmitButton::Sending => SENDING_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmitButton::Sending)
    }
}
