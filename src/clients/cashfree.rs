//! Cashfree Payment Gateway client (PG API, version 2023-08-01).

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::http::{HttpTransport, OutboundRequest};
use crate::core::config::CashfreeCredentials;
use crate::core::models::CashfreeOrderPayload;
use crate::errors::HandlerError;

pub const CASHFREE_API_VERSION: &str = "2023-08-01";

pub struct CashfreeClient<'a> {
    transport: &'a dyn HttpTransport,
    credentials: CashfreeCredentials<'a>,
    base_url: &'a str,
}

impl<'a> CashfreeClient<'a> {
    #[must_use]
    pub fn new(transport: &'a dyn HttpTransport, credentials: CashfreeCredentials<'a>) -> Self {
        Self {
            transport,
            credentials,
            base_url: credentials.base_url,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = base_url;
        self
    }

    fn authed(&self, request: OutboundRequest) -> OutboundRequest {
        request
            .header("x-client-id", self.credentials.app_id)
            .header("x-client-secret", self.credentials.secret_key)
            .header("x-api-version", CASHFREE_API_VERSION)
    }

    /// Creates an order and returns the gateway's JSON answer.
    ///
    /// # Errors
    ///
    /// Returns `ProviderRequestFailed` on a non-2xx status, `Internal` on transport failure.
    pub async fn create_order(
        &self,
        payload: &CashfreeOrderPayload,
    ) -> Result<Map<String, Value>, HandlerError> {
        let url = format!("{}/orders", self.base_url);
        let request = self
            .authed(OutboundRequest::new(Method::POST, url))
            .header("Content-Type", "application/json")
            .json(serde_json::to_value(payload)?);

        self.call(request, "Cashfree order create failed").await
    }

    /// Fetches the current state of an order.
    ///
    /// # Errors
    ///
    /// Returns `ProviderRequestFailed` on a non-2xx status, `Internal` on transport failure.
    pub async fn fetch_order(&self, order_id: &str) -> Result<Map<String, Value>, HandlerError> {
        let encoded = utf8_percent_encode(order_id, NON_ALPHANUMERIC_EXCEPT_UNRESERVED);
        let url = format!("{}/orders/{encoded}", self.base_url);
        let request = self.authed(OutboundRequest::new(Method::GET, url));

        self.call(request, "Cashfree order verify failed").await
    }

    async fn call(
        &self,
        request: OutboundRequest,
        fallback_message: &str,
    ) -> Result<Map<String, Value>, HandlerError> {
        let method = request.method.clone();
        let url = request.url.clone();
        let resp = self.transport.execute(request).await?;
        let data = resp.json_or_empty();

        if !resp.is_success() {
            let message = provider_error_message(&data)
                .unwrap_or_else(|| fallback_message.to_string());
            warn!(%method, %url, status = resp.status, error = %message, "Cashfree request failed");
            return Err(HandlerError::ProviderRequestFailed {
                message,
                details: Value::Object(data),
            });
        }

        info!(%method, %url, status = resp.status, "Cashfree request succeeded");
        Ok(data)
    }
}

/// Characters `encodeURIComponent` leaves untouched.
const NON_ALPHANUMERIC_EXCEPT_UNRESERVED: &percent_encoding::AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Cashfree reports failures as `{message, code, type}`; some edges use `error`.
fn provider_error_message(data: &Map<String, Value>) -> Option<String> {
    ["message", "error"].iter().find_map(|key| match data.get(*key)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Bool(false) => None,
        other => Some(other.to_string()),
    })
}
