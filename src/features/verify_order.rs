//! Order verification: asks Cashfree for the order's current status.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::info;

use crate::api::parsing::{coerce_number, coerce_string};
use crate::api::{ApiHandler, helpers};
use crate::clients::{CashfreeClient, HttpTransport};
use crate::core::config::AppConfig;
use crate::core::models::{OrderVerifyRequest, OrderVerifyResult};
use crate::errors::HandlerError;
use crate::features::create_order::ORDER_CURRENCY;

const PAID_STATUS: &str = "PAID";

pub struct VerifyOrderHandler {
    config: Arc<AppConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl VerifyOrderHandler {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// # Errors
    ///
    /// `InvalidInput` for an empty order id, `ProviderNotConfigured`,
    /// `ProviderRequestFailed`, or `Internal` for transport failures.
    pub async fn verify(
        &self,
        request: &OrderVerifyRequest,
    ) -> Result<OrderVerifyResult, HandlerError> {
        if request.order_id.is_empty() {
            return Err(HandlerError::InvalidInput(
                "Order ID is required".to_string(),
            ));
        }

        let credentials = self.config.cashfree.credentials()?;
        let client = CashfreeClient::new(self.transport.as_ref(), credentials);
        let data = client.fetch_order(&request.order_id).await?;

        let result = order_verify_result(&data, &request.order_id);
        info!(
            order_id = %result.order_id,
            order_status = %result.order_status,
            paid = result.paid,
            "Verified Cashfree order"
        );
        Ok(result)
    }
}

#[async_trait]
impl ApiHandler for VerifyOrderHandler {
    fn name(&self) -> &'static str {
        "verify-order"
    }

    async fn process(&self, body: &Map<String, Value>) -> Result<Value, HandlerError> {
        let request = OrderVerifyRequest::from_body(body);
        let result = self.verify(&request).await?;
        helpers::ok_response(&result)
    }
}

fn order_verify_result(data: &Map<String, Value>, requested_id: &str) -> OrderVerifyResult {
    let order_status = coerce_string(data.get("order_status")).to_uppercase();
    let order_id = coerce_string(data.get("order_id"));
    let order_currency = coerce_string(data.get("order_currency"));

    OrderVerifyResult {
        paid: order_status == PAID_STATUS,
        order_id: if order_id.is_empty() {
            requested_id.to_string()
        } else {
            order_id
        },
        order_status,
        order_amount: coerce_number(data.get("order_amount")),
        order_currency: if order_currency.is_empty() {
            ORDER_CURRENCY.to_string()
        } else {
            order_currency
        },
    }
}
