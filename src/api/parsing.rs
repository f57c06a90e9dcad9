//! Reading the Lambda proxy event: method, headers and JSON body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::errors::HandlerError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of the invocation, covering both the HTTP API (v2) and REST API (v1) event shapes.
pub fn request_method(event: &Value) -> Option<&str> {
    v_str(event, &["requestContext", "http", "method"]).or_else(|| v_str(event, &["httpMethod"]))
}

#[must_use]
pub fn is_post(event: &Value) -> bool {
    request_method(event).is_some_and(|m| m.eq_ignore_ascii_case("POST"))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Extracts the request body as a JSON object.
///
/// A missing or empty body, and any JSON that is not an object, yields an empty map.
///
/// # Errors
///
/// Returns `Internal` if the body is a string that is not valid JSON or not valid base64.
pub fn parse_body(event: &Value) -> Result<Map<String, Value>, HandlerError> {
    let parsed = match event.get("body") {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(Value::String(raw)) => {
            let encoded = event
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let text = if encoded {
                let bytes = STANDARD.decode(raw.trim())?;
                String::from_utf8(bytes)
                    .map_err(|e| HandlerError::Internal(format!("Body is not UTF-8: {e}")))?
            } else {
                raw.clone()
            };
            if text.is_empty() {
                Value::Object(Map::new())
            } else {
                serde_json::from_str(&text)?
            }
        }
        Some(other) => other.clone(),
    };

    Ok(match parsed {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// Loose string read: numbers are stringified, `true` becomes `"true"`,
/// and null, `false` or structured values read as empty.
#[must_use]
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Loose numeric read. Absent, null and empty values are zero; text that does
/// not parse as a number is NaN so that range checks reject it.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        None | Some(Value::Null | Value::Bool(false)) => 0.0,
        Some(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_method_from_http_api_event() {
        let event = json!({"requestContext": {"http": {"method": "POST"}}});
        assert_eq!(request_method(&event), Some("POST"));
        assert!(is_post(&event));
    }

    #[test]
    fn test_request_method_from_rest_api_event() {
        let event = json!({"httpMethod": "get"});
        assert_eq!(request_method(&event), Some("get"));
        assert!(!is_post(&event));
        assert!(!is_post(&json!({})));
    }

    #[test]
    fn test_get_header_value_is_case_insensitive() {
        let headers = json!({"content-type": "application/json"});
        assert_eq!(
            get_header_value(&headers, "Content-Type"),
            Some("application/json")
        );
        assert_eq!(get_header_value(&headers, "X-Missing"), None);
    }

    #[test]
    fn test_parse_body_string() {
        let event = json!({"body": "{\"email\":\"a@b.com\"}"});
        let body = parse_body(&event).unwrap();
        assert_eq!(body.get("email"), Some(&json!("a@b.com")));
    }

    #[test]
    fn test_parse_body_base64() {
        let encoded = STANDARD.encode(r#"{"orderId":"ritp_1"}"#);
        let event = json!({"body": encoded, "isBase64Encoded": true});
        let body = parse_body(&event).unwrap();
        assert_eq!(body.get("orderId"), Some(&json!("ritp_1")));
    }

    #[test]
    fn test_parse_body_object_and_missing() {
        let event = json!({"body": {"orderId": "x"}});
        assert_eq!(parse_body(&event).unwrap().get("orderId"), Some(&json!("x")));
        assert!(parse_body(&json!({})).unwrap().is_empty());
        assert!(parse_body(&json!({"body": ""})).unwrap().is_empty());
        assert!(parse_body(&json!({"body": "[1,2]"})).unwrap().is_empty());
    }

    #[test]
    fn test_parse_body_malformed_json_is_internal_error() {
        let err = parse_body(&json!({"body": "{not json"})).unwrap_err();
        assert!(matches!(err, HandlerError::Internal(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_coerce_string() {
        assert_eq!(coerce_string(Some(&json!("abc"))), "abc");
        assert_eq!(coerce_string(Some(&json!(42))), "42");
        assert_eq!(coerce_string(Some(&json!(0))), "");
        assert_eq!(coerce_string(Some(&json!(null))), "");
        assert_eq!(coerce_string(Some(&json!({"a": 1}))), "");
        assert_eq!(coerce_string(None), "");
    }

    #[test]
    fn test_coerce_number() {
        assert!((coerce_number(Some(&json!(499))) - 499.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some(&json!(" 12.5 "))) - 12.5).abs() < f64::EPSILON);
        assert!(coerce_number(None).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!("abc"))).is_nan());
        assert!(coerce_number(Some(&json!("Infinity"))).is_infinite());
    }
}
