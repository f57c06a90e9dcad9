//! Shared fixtures for handler integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal_api::HandlerError;
use portal_api::clients::{HttpTransport, OutboundRequest, OutboundResponse};
use portal_api::core::config::{AppConfig, CashfreeConfig, CashfreeEnvironment, ResendConfig};
use serde_json::{Value, json};

/// Records every outbound request and answers with a canned response.
pub struct FakeTransport {
    response: Result<OutboundResponse, String>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(OutboundResponse {
                status,
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn json(status: u16, body: &Value) -> Arc<Self> {
        Self::responding(status, &body.to_string())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> OutboundRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one outbound call");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<OutboundResponse, HandlerError> {
        self.requests.lock().unwrap().push(request);
        self.response.clone().map_err(HandlerError::Internal)
    }
}

pub fn full_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        resend: ResendConfig {
            api_key: "re_test_key".to_string(),
            from_email: "alerts@ritp.in".to_string(),
        },
        cashfree: CashfreeConfig {
            app_id: "cf_app".to_string(),
            secret_key: "cf_secret".to_string(),
            environment: CashfreeEnvironment::Sandbox,
            notify_url: None,
        },
    })
}

pub fn post_event(body: &Value) -> Value {
    json!({
        "requestContext": { "http": { "method": "POST" } },
        "headers": { "content-type": "application/json" },
        "body": body.to_string(),
        "isBase64Encoded": false
    })
}

pub fn event_with_method(method: &str, body: &Value) -> Value {
    json!({
        "httpMethod": method,
        "body": body.to_string()
    })
}

pub fn response_body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().expect("body is a string"))
        .expect("body is JSON")
}
