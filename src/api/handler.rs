//! Shared request boundary for the three endpoint handlers.
//!
//! This module handles:
//! - Method gating (POST only, `Allow: POST` on 405)
//! - Body extraction
//! - Turning every `HandlerError` into the failure envelope

use async_trait::async_trait;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::errors::HandlerError;

/// One endpoint: receives the parsed JSON body of an accepted POST and returns
/// the proxy response for the success case.
#[async_trait]
pub trait ApiHandler: Send + Sync {
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Any `HandlerError`; [`respond`] converts it into the failure envelope.
    async fn process(&self, body: &Map<String, Value>) -> Result<Value, HandlerError>;
}

/// Runs `handler` against a raw proxy event. Never fails: errors become envelopes.
#[tracing::instrument(level = "info", skip_all, fields(handler = handler.name()))]
pub async fn respond<H: ApiHandler + ?Sized>(handler: &H, event: &Value) -> Value {
    if !parsing::is_post(event) {
        warn!(
            method = parsing::request_method(event).unwrap_or(""),
            "Rejected non-POST request"
        );
        return helpers::err_response(&HandlerError::MethodNotAllowed);
    }

    let result = match parsing::parse_body(event) {
        Ok(body) => handler.process(&body).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => {
            info!("Request completed");
            response
        }
        Err(e) => {
            match &e {
                HandlerError::InvalidInput(msg) => warn!(error = %msg, "Invalid input"),
                other => error!(status = other.status_code(), error = %other, "Request failed"),
            }
            helpers::err_response(&e)
        }
    }
}

/// Lambda entry point shared by the binaries.
///
/// # Errors
///
/// Never returns an error in practice; the signature matches `service_fn`.
pub async fn function_handler<H: ApiHandler + ?Sized>(
    handler: &H,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let headers = event.payload.get("headers").cloned().unwrap_or(Value::Null);
    let xray = parsing::get_header_value(&headers, "X-Amzn-Trace-Id").unwrap_or("");
    info!(
        request_id = %event.context.request_id,
        xray_trace_id = %xray,
        handler = handler.name(),
        "Received request"
    );

    Ok(respond(handler, &event.payload).await)
}
