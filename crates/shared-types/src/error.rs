use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors a contact endpoint may report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    RateLimited,
    Unavailable,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Unavailable => write!(f, "Unavailable"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error body returned by a contact endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RateLimited,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unavailable,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Map an HTTP status code to an error with a generic message.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::bad_request("The request was rejected"),
            422 => Self::validation("Validation failed", HashMap::new()),
            429 => Self::rate_limited("Too many requests"),
            502..=504 => Self::unavailable("Endpoint unavailable"),
            _ => Self::internal(format!("Unexpected status {status}")),
        }
    }

    /// Parse an AppError from a response body.
    ///
    /// Accepts either raw JSON or text with a JSON object embedded between
    /// the first `{` and the last `}`.
    pub fn from_body(body: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return Some(err);
        }
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        if end > start {
            serde_json::from_str(&body[start..=end]).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
