use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

/// Status text shown after a successful send. Also shown when the decoy
/// field trips, so automated senders cannot tell they were caught.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SEND_FAILED_MESSAGE: &str = "Error sending message. Please try again.";

/// Label of the submit button when no send is in flight.
pub const SUBMIT_LABEL: &str = "Send Message";
/// Label of the submit button while a send is in flight.
pub const SENDING_LABEL: &str = "Sending...";

const REQUIRED_CODE: &str = "required";
const EMAIL_CODE: &str = "email";

/// `local@domain.tld` with no whitespace or extra `@` in any part.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Raw contents of the contact form as the user submitted it.
///
/// Absent fields are represented by the empty string. `website` is a
/// hidden decoy input that real visitors never fill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub website: String,
}

/// Validated contact payload handed to a transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, code = "required", message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, code = "required", message = "Email is required"),
        regex(path = *EMAIL_PATTERN, code = "email", message = "Valid email is required")
    )]
    pub email: String,
    #[validate(length(min = 1, code = "required", message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, code = "required", message = "Message is required"))]
    pub message: String,
}

impl ContactSubmission {
    /// Whether the decoy field carries anything besides whitespace.
    pub fn is_decoy_filled(&self) -> bool {
        !self.website.trim().is_empty()
    }

    /// Extract and validate the four visible fields.
    ///
    /// Missing fields are reported before a malformed email.
    pub fn into_message(self) -> Result<ContactMessage, ContactError> {
        let message = ContactMessage {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        };
        message.validate()?;
        Ok(message)
    }
}

/// Failures of the contact flow.
///
/// `MissingFields` and `InvalidEmail` are validation failures and never
/// reach a transport. `Submission` is raised by the transport itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    MissingFields,
    InvalidEmail,
    Submission(String),
}

impl ContactError {
    /// Text to show in the status region for this failure.
    pub fn status_message(&self) -> &'static str {
        match self {
            ContactError::MissingFields => MISSING_FIELDS_MESSAGE,
            ContactError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            ContactError::Submission(_) => SEND_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => write!(f, "one or more required fields are empty"),
            ContactError::InvalidEmail => write!(f, "email address is malformed"),
            ContactError::Submission(reason) => write!(f, "submission failed: {reason}"),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let missing = fields
            .values()
            .any(|errs| errs.iter().any(|e| e.code == REQUIRED_CODE));
        if missing {
            return ContactError::MissingFields;
        }
        let bad_email = fields
            .get("email")
            .is_some_and(|errs| errs.iter().any(|e| e.code == EMAIL_CODE));
        if bad_email {
            ContactError::InvalidEmail
        } else {
            ContactError::MissingFields
        }
    }
}
