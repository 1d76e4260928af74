use shared_types::{AppError, ContactConfig, ContactError, ContactMessage};
use std::time::Duration;

use crate::timer;

/// Delivers a validated contact message somewhere.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Pretends to deliver: waits for a fixed delay, logs the message, and
/// always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        timer::sleep(self.delay).await;
        tracing::info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "form submitted"
        );
        Ok(())
    }
}

/// POSTs the message as JSON to a contact endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactTransport for HttpTransport {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| ContactError::Submission(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let error = AppError::from_body(&body).unwrap_or_else(|| AppError::from_status(status.as_u16()));
        Err(ContactError::Submission(error.to_string()))
    }
}

/// The transport the site actually uses, chosen from configuration.
#[derive(Debug, Clone)]
pub enum SiteTransport {
    Simulated(SimulatedTransport),
    Http(HttpTransport),
}

impl SiteTransport {
    /// HTTP when an endpoint is configured, simulated otherwise.
    pub fn from_config(config: &ContactConfig) -> Self {
        match config.http_endpoint() {
            Some(endpoint) => SiteTransport::Http(HttpTransport::new(endpoint)),
            None => SiteTransport::Simulated(SimulatedTransport {
                delay: Duration::from_millis(config.simulated_delay_ms),
            }),
        }
    }
}

impl ContactTransport for SiteTransport {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        match self {
            SiteTransport::Simulated(t) => t.submit(message).await,
            SiteTransport::Http(t) => t.submit(message).await,
        }
    }
}
