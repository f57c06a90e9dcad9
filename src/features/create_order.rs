//! Order creation: turns a course purchase intent into a Cashfree order and
//! hands the payment session back to the client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use serde_json::{Map, Value};
use tracing::info;

use crate::api::parsing::coerce_string;
use crate::api::{ApiHandler, helpers};
use crate::clients::{CashfreeClient, HttpTransport};
use crate::core::config::AppConfig;
use crate::core::models::{
    CashfreeCustomerDetails, CashfreeOrderMeta, CashfreeOrderPayload, OrderCreateRequest,
    OrderCreateResult,
};
use crate::core::validation::{derive_customer_id, is_valid_amount, is_valid_email, round_amount};
use crate::errors::HandlerError;

pub const ORDER_CURRENCY: &str = "INR";
const ORDER_ID_RANDOM_RANGE: u32 = 100_000;

pub struct CreateOrderHandler {
    config: Arc<AppConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl CreateOrderHandler {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// # Errors
    ///
    /// `InvalidInput` (first failing field wins), `ProviderNotConfigured`,
    /// `ProviderRequestFailed`, or `Internal` for transport failures.
    pub async fn create(
        &self,
        request: &OrderCreateRequest,
    ) -> Result<OrderCreateResult, HandlerError> {
        validate_order_request(request)?;

        let credentials = self.config.cashfree.credentials()?;
        let now_millis = Utc::now().timestamp_millis();
        let order_id = generate_order_id(now_millis);
        let payload = build_order_payload(
            request,
            self.config.cashfree.notify_url.as_deref(),
            order_id.clone(),
            now_millis,
        );

        info!(
            order_id = %order_id,
            amount = payload.order_amount,
            has_meta = payload.order_meta.is_some(),
            "Creating Cashfree order"
        );

        let client = CashfreeClient::new(self.transport.as_ref(), credentials);
        let data = client.create_order(&payload).await?;

        Ok(order_create_result(&data, order_id))
    }
}

#[async_trait]
impl ApiHandler for CreateOrderHandler {
    fn name(&self) -> &'static str {
        "create-order"
    }

    async fn process(&self, body: &Map<String, Value>) -> Result<Value, HandlerError> {
        let request = OrderCreateRequest::from_body(body);
        let result = self.create(&request).await?;
        helpers::ok_response(&result)
    }
}

/// # Errors
///
/// `InvalidInput` for the first failing check: course name, then amount, then email.
pub fn validate_order_request(request: &OrderCreateRequest) -> Result<(), HandlerError> {
    if request.course_name.is_empty() {
        return Err(HandlerError::InvalidInput(
            "Course name is required".to_string(),
        ));
    }
    if !is_valid_amount(request.amount) {
        return Err(HandlerError::InvalidInput(
            "Valid amount is required".to_string(),
        ));
    }
    if !is_valid_email(&request.customer_email) {
        return Err(HandlerError::InvalidInput(
            "Valid customer email is required".to_string(),
        ));
    }
    Ok(())
}

/// `ritp_<millis>_<0..100000>`. Only weakly unique; the gateway's id is authoritative.
#[must_use]
pub fn generate_order_id(now_millis: i64) -> String {
    let suffix = rand::thread_rng().gen_range(0..ORDER_ID_RANDOM_RANGE);
    format!("ritp_{now_millis}_{suffix}")
}

#[must_use]
pub fn build_order_payload(
    request: &OrderCreateRequest,
    notify_url: Option<&str>,
    order_id: String,
    now_millis: i64,
) -> CashfreeOrderPayload {
    CashfreeOrderPayload {
        order_id,
        order_amount: round_amount(request.amount),
        order_currency: ORDER_CURRENCY.to_string(),
        customer_details: CashfreeCustomerDetails {
            customer_id: derive_customer_id(&request.customer_email, now_millis),
            customer_name: request.customer_name.clone(),
            customer_email: request.customer_email.clone(),
            customer_phone: request.customer_phone.clone(),
        },
        order_meta: CashfreeOrderMeta::from_urls(
            request.return_url.clone(),
            notify_url.map(ToString::to_string),
        ),
        order_note: format!("RITP Course Purchase: {}", request.course_name),
    }
}

fn order_create_result(data: &Map<String, Value>, generated_id: String) -> OrderCreateResult {
    let provider_id = coerce_string(data.get("order_id"));
    OrderCreateResult {
        order_id: if provider_id.is_empty() {
            generated_id
        } else {
            provider_id
        },
        payment_session_id: coerce_string(data.get("payment_session_id")),
        order_status: coerce_string(data.get("order_status")),
    }
}
