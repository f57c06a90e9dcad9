//! Lambda proxy response builders.
//!
//! Every handler answers with `{statusCode, headers, body}` where `body` is the
//! serialized envelope: `{"ok": true, ...}` or `{"ok": false, "error": ..., "details"?: ...}`.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::errors::HandlerError;

fn proxy_response(status_code: u16, body: &Value, allow_post: bool) -> Value {
    let mut headers = json!({ "Content-Type": "application/json" });
    if allow_post {
        headers["Allow"] = Value::String("POST".to_string());
    }
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string(),
    })
}

/// Returns a 200 response whose envelope is `{"ok": true}` merged with `payload`'s fields.
///
/// # Errors
///
/// Returns `Internal` if `payload` does not serialize to a JSON object.
pub fn ok_response<T: Serialize>(payload: &T) -> Result<Value, HandlerError> {
    let mut envelope = match serde_json::to_value(payload)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(HandlerError::Internal(format!(
                "response payload is not an object: {other}"
            )));
        }
    };
    envelope.insert("ok".to_string(), Value::Bool(true));
    Ok(proxy_response(200, &Value::Object(envelope), false))
}

/// Returns a 200 response with the bare `{"ok": true}` envelope.
#[must_use]
pub fn ok_empty() -> Value {
    proxy_response(200, &json!({ "ok": true }), false)
}

/// Returns the failure envelope for `error` with its mapped status code.
#[must_use]
pub fn err_response(error: &HandlerError) -> Value {
    let mut body = json!({ "ok": false, "error": error.public_message() });
    if let Some(details) = error.details() {
        body["details"] = details;
    }
    proxy_response(
        error.status_code(),
        &body,
        matches!(error, HandlerError::MethodNotAllowed),
    )
}
