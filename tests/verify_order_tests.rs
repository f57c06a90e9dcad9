mod common;

use std::sync::Arc;

use common::{FakeTransport, event_with_method, full_config, post_event, response_body};
use portal_api::api::respond;
use portal_api::features::VerifyOrderHandler;
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn test_verify_order_paid_scenario() {
    let transport = FakeTransport::json(
        200,
        &json!({
            "order_id": "ritp_1700000000000_42",
            "order_status": "paid",
            "order_amount": 499.0,
            "order_currency": "INR"
        }),
    );
    let handler = VerifyOrderHandler::new(full_config(), transport.clone());

    let response = respond(
        &handler,
        &post_event(&json!({"orderId": "ritp_1700000000000_42"})),
    )
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        response_body(&response),
        json!({
            "ok": true,
            "paid": true,
            "orderId": "ritp_1700000000000_42",
            "orderStatus": "PAID",
            "orderAmount": 499.0,
            "orderCurrency": "INR"
        })
    );

    let request = transport.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.url,
        "https://sandbox.cashfree.com/pg/orders/ritp_1700000000000_42"
    );
    assert_eq!(request.header_value("x-api-version"), Some("2023-08-01"));
    assert_eq!(request.header_value("x-client-id"), Some("cf_app"));
    assert!(request.json.is_none());
}

#[tokio::test]
async fn test_verify_order_encodes_order_id() {
    let transport = FakeTransport::json(200, &json!({"order_status": "ACTIVE"}));
    let handler = VerifyOrderHandler::new(full_config(), transport.clone());

    let response =
        respond(&handler, &post_event(&json!({"orderId": " order/1 2 "}))).await;

    assert_eq!(
        transport.single_request().url,
        "https://sandbox.cashfree.com/pg/orders/order%2F1%202"
    );
    let body = response_body(&response);
    assert_eq!(body["paid"], false);
    assert_eq!(body["orderId"], "order/1 2");
    assert_eq!(body["orderAmount"], 0.0);
    assert_eq!(body["orderCurrency"], "INR");
}

#[tokio::test]
async fn test_verify_order_requires_order_id() {
    let transport = FakeTransport::json(200, &json!({}));
    let handler = VerifyOrderHandler::new(full_config(), transport.clone());

    let response = respond(&handler, &post_event(&json!({"orderId": "   "}))).await;

    assert_eq!(response["statusCode"], 400);
    assert_eq!(
        response_body(&response),
        json!({"ok": false, "error": "Order ID is required"})
    );
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_verify_order_rejects_non_post() {
    let transport = FakeTransport::json(200, &json!({}));
    let handler = VerifyOrderHandler::new(full_config(), transport);

    let response = respond(&handler, &event_with_method("PATCH", &json!({}))).await;

    assert_eq!(response["statusCode"], 405);
    assert_eq!(response["headers"]["Allow"], "POST");
    assert_eq!(response_body(&response)["ok"], false);
}

#[tokio::test]
async fn test_verify_order_missing_credentials() {
    let transport = FakeTransport::json(200, &json!({}));
    let mut config = (*full_config()).clone();
    config.cashfree.app_id.clear();
    let handler = VerifyOrderHandler::new(Arc::new(config), transport);

    let response = respond(&handler, &post_event(&json!({"orderId": "ritp_1"}))).await;

    assert_eq!(response["statusCode"], 500);
}

#[tokio::test]
async fn test_verify_order_provider_failure() {
    let transport = FakeTransport::json(
        404,
        &json!({"message": "order not found", "code": "order_not_found"}),
    );
    let handler = VerifyOrderHandler::new(full_config(), transport);

    let response = respond(&handler, &post_event(&json!({"orderId": "ritp_1"}))).await;

    assert_eq!(response["statusCode"], 502);
    let body = response_body(&response);
    assert_eq!(body["error"], "order not found");
    assert_eq!(body["details"]["code"], "order_not_found");
}

#[tokio::test]
async fn test_verify_order_provider_failure_fallback_message() {
    let transport = FakeTransport::responding(500, "");
    let handler = VerifyOrderHandler::new(full_config(), transport);

    let response = respond(&handler, &post_event(&json!({"orderId": "ritp_1"}))).await;

    assert_eq!(response["statusCode"], 502);
    assert_eq!(
        response_body(&response)["error"],
        "Cashfree order verify failed"
    );
}

#[tokio::test]
async fn test_verify_order_accepts_parsed_body_object() {
    let transport = FakeTransport::json(200, &json!({"order_status": "PAID"}));
    let handler = VerifyOrderHandler::new(full_config(), transport);

    let event = json!({
        "requestContext": { "http": { "method": "post" } },
        "body": { "orderId": "ritp_7" }
    });
    let response = respond(&handler, &event).await;

    let body = response_body(&response);
    assert_eq!(body["paid"], true);
    assert_eq!(body["orderId"], "ritp_7");
}
