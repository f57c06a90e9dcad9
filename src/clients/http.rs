//! Outbound HTTP transport.
//!
//! Provider clients build an [`OutboundRequest`] and hand it to an [`HttpTransport`].
//! Production uses [`ReqwestTransport`]; tests substitute a recording fake.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::HandlerError;

// No explicit timeout: calls inherit reqwest's defaults and the Lambda deadline.
static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(Client::new);

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub json: Option<Value>,
}

impl OutboundRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            json: None,
        }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundResponse {
    pub status: u16,
    pub body: String,
}

impl OutboundResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as a JSON object, falling back to `{}` on anything else.
    #[must_use]
    pub fn json_or_empty(&self) -> Map<String, Value> {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs exactly one request. Non-2xx statuses are returned, not raised.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the body could not be read.
    async fn execute(&self, request: OutboundRequest) -> Result<OutboundResponse, HandlerError>;
}

/// Sends through one `reqwest::Client` shared by every invocation of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<OutboundResponse, HandlerError> {
        let mut builder = HTTP_CLIENT.request(request.method.clone(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        debug!(method = %request.method, url = %request.url, status, "provider responded");

        Ok(OutboundResponse { status, body })
    }
}
