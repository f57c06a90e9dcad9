//! Signup alert: emails the address that was just used to register on the portal.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::info;

use crate::api::{ApiHandler, helpers};
use crate::clients::{HttpTransport, ResendClient};
use crate::core::config::AppConfig;
use crate::core::models::{ResendEmail, SignupAlertRequest};
use crate::core::validation::is_valid_email;
use crate::errors::HandlerError;
use crate::templates::{SIGNUP_ALERT_SUBJECT, signup_alert_html, signup_alert_text};

pub struct SignupAlertHandler {
    config: Arc<AppConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl SignupAlertHandler {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Validates the event and sends the alert email.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a bad address, `ProviderNotConfigured` when Resend
    /// settings are missing, `ProviderRequestFailed` when Resend rejects the send.
    pub async fn notify(&self, request: &SignupAlertRequest) -> Result<(), HandlerError> {
        if !is_valid_email(&request.email) {
            return Err(HandlerError::InvalidInput(
                "Valid email is required".to_string(),
            ));
        }

        let credentials = self.config.resend.credentials()?;
        let occurred_at = request.occurred_at.clone().unwrap_or_else(now_iso8601);

        let client = ResendClient::new(self.transport.as_ref(), credentials);
        let email = build_signup_email(client.from_address(), &request.email, &occurred_at);
        client.send_email(&email).await
    }
}

#[async_trait]
impl ApiHandler for SignupAlertHandler {
    fn name(&self) -> &'static str {
        "signup-alert"
    }

    async fn process(&self, body: &Map<String, Value>) -> Result<Value, HandlerError> {
        let request = SignupAlertRequest::from_body(body);
        info!(has_timestamp = request.occurred_at.is_some(), "Processing signup alert");
        self.notify(&request).await?;
        Ok(helpers::ok_empty())
    }
}

#[must_use]
pub fn build_signup_email(from: &str, to: &str, occurred_at: &str) -> ResendEmail {
    ResendEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: SIGNUP_ALERT_SUBJECT.to_string(),
        text: signup_alert_text(to, occurred_at),
        html: signup_alert_html(to, occurred_at),
    }
}

/// Current UTC time as `2024-01-31T12:00:00.000Z`.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
