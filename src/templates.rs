//! Email bodies for the signup alert.

pub const SIGNUP_ALERT_SUBJECT: &str = "RITP Portal Signup Alert";

const NOTICE: &str = "Your Gmail was used to create an account on RITP Learning Portal.";
const CONTACT: &str = "If this was not you, please contact the portal admin immediately.";

#[must_use]
pub fn signup_alert_text(email: &str, occurred_at: &str) -> String {
    [
        NOTICE.to_string(),
        String::new(),
        format!("Email: {email}"),
        format!("Time: {occurred_at}"),
        String::new(),
        CONTACT.to_string(),
    ]
    .join("\n")
}

/// HTML variant. Both interpolated values are escaped; the timestamp comes
/// straight from the client and the address pattern still admits markup.
#[must_use]
pub fn signup_alert_html(email: &str, occurred_at: &str) -> String {
    let email = escape_html(email);
    let occurred_at = escape_html(occurred_at);
    [
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.5; color: #0f172a;">"#
            .to_string(),
        format!(r#"<h2 style="margin: 0 0 12px;">{SIGNUP_ALERT_SUBJECT}</h2>"#),
        "<p>Your Gmail was used to create an account on <strong>RITP Learning Portal</strong>.</p>"
            .to_string(),
        format!(
            "<p><strong>Email:</strong> {email}<br/><strong>Time:</strong> {occurred_at}</p>"
        ),
        format!("<p>{CONTACT}</p>"),
        "</div>".to_string(),
    ]
    .concat()
}

#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_body_layout() {
        let text = signup_alert_text("a@b.com", "2024-01-01T00:00:00.000Z");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "Email: a@b.com");
        assert_eq!(lines[3], "Time: 2024-01-01T00:00:00.000Z");
        assert!(lines[1].is_empty() && lines[4].is_empty());
    }

    #[test]
    fn test_html_body_escapes_markup() {
        let html = signup_alert_html("<script>@x.io", "now & then");
        assert!(html.contains("&lt;script&gt;@x.io"));
        assert!(html.contains("now &amp; then"));
        assert!(!html.contains("<script>"));
        assert!(html.starts_with("<div"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_text_body_is_verbatim() {
        let text = signup_alert_text("<b>@x.io", "t");
        assert!(text.contains("Email: <b>@x.io"));
    }
}
