//! The contact form: validation, submission, and status display.

pub mod flow;
mod form;
pub mod transport;

pub use form::ContactForm;
