use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use portal_api::api::function_handler;
use portal_api::clients::ReqwestTransport;
use portal_api::core::config::AppConfig;
use portal_api::features::CreateOrderHandler;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    portal_api::setup_logging();

    let handler = CreateOrderHandler::new(
        Arc::new(AppConfig::from_env()),
        Arc::new(ReqwestTransport::new()),
    );
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
