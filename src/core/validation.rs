//! Field validation and normalization shared by the handlers.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_CUSTOMER_NAME: &str = "RITP Student";
pub const DEFAULT_CUSTOMER_PHONE: &str = "9999999999";

const CUSTOMER_NAME_MAX_CHARS: usize = 80;
const CUSTOMER_PHONE_DIGITS: usize = 10;
const CUSTOMER_ID_MAX_CHARS: usize = 40;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex compile"));

/// `local@domain.tld` with no whitespace or extra `@` in either part.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn normalize_customer_name(raw: &str) -> String {
    let name: String = raw.trim().chars().take(CUSTOMER_NAME_MAX_CHARS).collect();
    if name.is_empty() {
        DEFAULT_CUSTOMER_NAME.to_string()
    } else {
        name
    }
}

/// Keeps the last ten digits of whatever the client sent.
#[must_use]
pub fn normalize_customer_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return DEFAULT_CUSTOMER_PHONE.to_string();
    }
    let start = digits.len().saturating_sub(CUSTOMER_PHONE_DIGITS);
    digits[start..].iter().collect()
}

/// Gateway customer id: the email with every non-alphanumeric character removed.
#[must_use]
pub fn derive_customer_id(email: &str, now_millis: i64) -> String {
    let id: String = email
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(CUSTOMER_ID_MAX_CHARS)
        .collect();
    if id.is_empty() {
        format!("user_{now_millis}")
    } else {
        id
    }
}

#[must_use]
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 1.0
}

/// Rounds to the two decimal places the gateway accepts.
#[must_use]
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.in"));
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "a@b",
            "a b@c.com",
            "a@b .com",
            "a@@b.com",
            "@b.com",
            "a@b.com\n",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Student@Example.COM "), "student@example.com");
    }

    #[test]
    fn test_customer_name_defaults_and_truncates() {
        assert_eq!(normalize_customer_name("   "), DEFAULT_CUSTOMER_NAME);
        assert_eq!(normalize_customer_name(" Asha "), "Asha");
        let long = "x".repeat(120);
        assert_eq!(normalize_customer_name(&long).chars().count(), 80);
    }

    #[test]
    fn test_customer_phone_keeps_last_ten_digits() {
        assert_eq!(normalize_customer_phone("+91 98765-43210"), "9876543210");
        assert_eq!(normalize_customer_phone("12345"), "12345");
        assert_eq!(normalize_customer_phone("n/a"), DEFAULT_CUSTOMER_PHONE);
        assert_eq!(normalize_customer_phone(""), DEFAULT_CUSTOMER_PHONE);
    }

    #[test]
    fn test_customer_id_strips_symbols() {
        assert_eq!(derive_customer_id("a@b.com", 1), "abcom");
        let long = format!("{}@example.com", "a".repeat(60));
        assert_eq!(derive_customer_id(&long, 1).len(), 40);
        assert_eq!(derive_customer_id("@.+", 1_700_000_000_000), "user_1700000000000");
    }

    #[test]
    fn test_amount_bounds() {
        assert!(is_valid_amount(1.0));
        assert!(is_valid_amount(499.0));
        assert!(!is_valid_amount(0.99));
        assert!(!is_valid_amount(0.0));
        assert!(!is_valid_amount(-5.0));
        assert!(!is_valid_amount(f64::NAN));
        assert!(!is_valid_amount(f64::INFINITY));
    }

    #[test]
    fn test_round_amount() {
        assert!((round_amount(499.999) - 500.0).abs() < f64::EPSILON);
        assert!((round_amount(10.123) - 10.12).abs() < 1e-9);
    }
}
