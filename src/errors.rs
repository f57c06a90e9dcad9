use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    ProviderNotConfigured(String),

    /// Upstream answered with a non-success status. `details` carries whatever
    /// the provider sent back so callers can diagnose the failure.
    #[error("{message}")]
    ProviderRequestFailed { message: String, details: Value },

    #[error("Unexpected server error: {0}")]
    Internal(String),
}

impl HandlerError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MethodNotAllowed => 405,
            HandlerError::InvalidInput(_) => 400,
            HandlerError::ProviderNotConfigured(_) | HandlerError::Internal(_) => 500,
            HandlerError::ProviderRequestFailed { .. } => 502,
        }
    }

    /// Text placed in the envelope's `error` field.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            HandlerError::Internal(_) => "Unexpected server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Optional `details` value for the envelope.
    #[must_use]
    pub fn details(&self) -> Option<Value> {
        match self {
            HandlerError::ProviderRequestFailed { details, .. } => Some(details.clone()),
            HandlerError::Internal(msg) => Some(Value::String(msg.clone())),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HandlerError {
    fn from(error: reqwest::Error) -> Self {
        HandlerError::Internal(error.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::Internal(error.to_string())
    }
}

impl From<base64::DecodeError> for HandlerError {
    fn from(error: base64::DecodeError) -> Self {
        HandlerError::Internal(format!("Failed to decode base64 body: {error}"))
    }
}
