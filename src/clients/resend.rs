//! Resend email API client.

use reqwest::Method;
use serde_json::Value;
use tracing::{error, info};

use super::http::{HttpTransport, OutboundRequest};
use crate::core::config::ResendCredentials;
use crate::core::models::ResendEmail;
use crate::errors::HandlerError;

pub const RESEND_SEND_URL: &str = "https://api.resend.com/emails";

pub struct ResendClient<'a> {
    transport: &'a dyn HttpTransport,
    credentials: ResendCredentials<'a>,
    endpoint: &'a str,
}

impl<'a> ResendClient<'a> {
    #[must_use]
    pub fn new(transport: &'a dyn HttpTransport, credentials: ResendCredentials<'a>) -> Self {
        Self {
            transport,
            credentials,
            endpoint: RESEND_SEND_URL,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    #[must_use]
    pub fn from_address(&self) -> &str {
        self.credentials.from_email
    }

    /// Sends a single message.
    ///
    /// # Errors
    ///
    /// Returns `ProviderRequestFailed` carrying the raw response text when Resend
    /// answers with a non-2xx status, or `Internal` if the request cannot be sent.
    pub async fn send_email(&self, email: &ResendEmail) -> Result<(), HandlerError> {
        let request = OutboundRequest::new(Method::POST, self.endpoint)
            .header(
                "Authorization",
                &format!("Bearer {}", self.credentials.api_key),
            )
            .header("Content-Type", "application/json")
            .json(serde_json::to_value(email)?);

        let resp = self.transport.execute(request).await?;
        if !resp.is_success() {
            error!(status = resp.status, "Resend rejected signup alert");
            return Err(HandlerError::ProviderRequestFailed {
                message: "Email provider request failed".to_string(),
                details: Value::String(resp.body),
            });
        }

        info!(status = resp.status, recipients = email.to.len(), "Signup alert sent");
        Ok(())
    }
}
