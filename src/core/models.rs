use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validation::{
    normalize_customer_name, normalize_customer_phone, normalize_email,
};
use crate::api::parsing::{coerce_number, coerce_string};

/// Signup event as posted by the portal after an account is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupAlertRequest {
    pub email: String,
    /// `None` when the client did not send a timestamp.
    pub occurred_at: Option<String>,
}

impl SignupAlertRequest {
    #[must_use]
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let occurred_at = coerce_string(body.get("occurredAt"));
        Self {
            email: normalize_email(&coerce_string(body.get("email"))),
            occurred_at: (!occurred_at.is_empty()).then_some(occurred_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreateRequest {
    pub course_name: String,
    pub amount: f64,
    pub customer_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub return_url: Option<String>,
}

impl OrderCreateRequest {
    #[must_use]
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let return_url = coerce_string(body.get("returnUrl")).trim().to_string();
        Self {
            course_name: coerce_string(body.get("courseName")).trim().to_string(),
            amount: coerce_number(body.get("amount")),
            customer_email: normalize_email(&coerce_string(body.get("customerEmail"))),
            customer_name: normalize_customer_name(&coerce_string(body.get("customerName"))),
            customer_phone: normalize_customer_phone(&coerce_string(body.get("customerPhone"))),
            return_url: (!return_url.is_empty()).then_some(return_url),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateResult {
    pub order_id: String,
    pub payment_session_id: String,
    pub order_status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderVerifyRequest {
    pub order_id: String,
}

impl OrderVerifyRequest {
    #[must_use]
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            order_id: coerce_string(body.get("orderId")).trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderVerifyResult {
    pub paid: bool,
    pub order_id: String,
    pub order_status: String,
    pub order_amount: f64,
    pub order_currency: String,
}

/// Order body sent to `POST /orders` on the payment gateway.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CashfreeOrderPayload {
    pub order_id: String,
    pub order_amount: f64,
    pub order_currency: String,
    pub customer_details: CashfreeCustomerDetails,
    /// The gateway rejects an empty `order_meta`, so the key is dropped entirely when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_meta: Option<CashfreeOrderMeta>,
    pub order_note: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CashfreeCustomerDetails {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CashfreeOrderMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
}

impl CashfreeOrderMeta {
    /// `None` unless at least one URL is present.
    #[must_use]
    pub fn from_urls(return_url: Option<String>, notify_url: Option<String>) -> Option<Self> {
        if return_url.is_none() && notify_url.is_none() {
            return None;
        }
        Some(Self {
            return_url,
            notify_url,
        })
    }
}

/// Message body for the email provider's send endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}
