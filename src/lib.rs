/// RITP portal API - serverless handlers that front two third-party providers.
///
/// This crate backs three independent AWS Lambda functions:
/// 1. `signup-alert` emails a user (through Resend) when their address is used to register
/// 2. `create-order` creates a Cashfree payment order and returns its payment session
/// 3. `verify-order` asks Cashfree whether an order has been paid
///
/// # Architecture
///
/// Each binary loads [`core::config::AppConfig`] once, wraps one handler from
/// [`features`] and runs it under `lambda_runtime`. Handlers reach providers only
/// through the [`clients::HttpTransport`] trait, so tests swap in a fake.
/// Every response is the JSON envelope `{"ok": bool, ...}` built in [`api::helpers`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use portal_api::clients::ReqwestTransport;
/// use portal_api::core::config::AppConfig;
/// use portal_api::features::VerifyOrderHandler;
///
/// #[tokio::main]
/// async fn main() {
///     portal_api::setup_logging();
///
///     let handler = VerifyOrderHandler::new(
///         Arc::new(AppConfig::from_env()),
///         Arc::new(ReqwestTransport::new()),
///     );
///     let event = serde_json::json!({
///         "requestContext": { "http": { "method": "POST" } },
///         "body": "{\"orderId\":\"ritp_1700000000000_42\"}"
///     });
///     let response = portal_api::api::respond(&handler, &event).await;
///     println!("{response}");
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod templates;

pub use errors::HandlerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG` (default `info`). Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// portal_api::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
