use std::env;

use crate::errors::HandlerError;

pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const SIGNUP_ALERT_FROM_EMAIL: &str = "SIGNUP_ALERT_FROM_EMAIL";
pub const CASHFREE_APP_ID: &str = "CASHFREE_APP_ID";
pub const CASHFREE_SECRET_KEY: &str = "CASHFREE_SECRET_KEY";
pub const CASHFREE_ENV: &str = "CASHFREE_ENV";
pub const CASHFREE_NOTIFY_URL: &str = "CASHFREE_NOTIFY_URL";

const CASHFREE_SANDBOX_URL: &str = "https://sandbox.cashfree.com/pg";
const CASHFREE_PRODUCTION_URL: &str = "https://api.cashfree.com/pg";

/// Process-wide configuration, read once at start-up and handed to each handler.
///
/// Nothing here is required at load time: a handler whose provider is not
/// configured answers with a 500 for every request instead of refusing to boot.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub resend: ResendConfig,
    pub cashfree: CashfreeConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ResendConfig {
    pub api_key: String,
    pub from_email: String,
}

#[derive(Debug, Clone, Default)]
pub struct CashfreeConfig {
    pub app_id: String,
    pub secret_key: String,
    pub environment: CashfreeEnvironment,
    pub notify_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CashfreeEnvironment {
    #[default]
    Sandbox,
    Production,
}

/// Resend credentials that passed the presence check.
#[derive(Debug, Clone, Copy)]
pub struct ResendCredentials<'a> {
    pub api_key: &'a str,
    pub from_email: &'a str,
}

/// Cashfree credentials that passed the presence check.
#[derive(Debug, Clone, Copy)]
pub struct CashfreeCredentials<'a> {
    pub app_id: &'a str,
    pub secret_key: &'a str,
    pub base_url: &'static str,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let trimmed = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();

        let notify_url = trimmed(CASHFREE_NOTIFY_URL);

        Self {
            resend: ResendConfig {
                api_key: lookup(RESEND_API_KEY).unwrap_or_default(),
                from_email: lookup(SIGNUP_ALERT_FROM_EMAIL).unwrap_or_default(),
            },
            cashfree: CashfreeConfig {
                app_id: trimmed(CASHFREE_APP_ID),
                secret_key: trimmed(CASHFREE_SECRET_KEY),
                environment: CashfreeEnvironment::parse(&trimmed(CASHFREE_ENV)),
                notify_url: (!notify_url.is_empty()).then_some(notify_url),
            },
        }
    }
}

impl ResendConfig {
    /// # Errors
    ///
    /// Returns `ProviderNotConfigured` if the API key or sender address is empty.
    pub fn credentials(&self) -> Result<ResendCredentials<'_>, HandlerError> {
        if self.api_key.is_empty() || self.from_email.is_empty() {
            return Err(HandlerError::ProviderNotConfigured(format!(
                "Email provider not configured. Set {RESEND_API_KEY} and {SIGNUP_ALERT_FROM_EMAIL}."
            )));
        }
        Ok(ResendCredentials {
            api_key: &self.api_key,
            from_email: &self.from_email,
        })
    }
}

impl CashfreeConfig {
    /// # Errors
    ///
    /// Returns `ProviderNotConfigured` if the app id or secret key is empty.
    pub fn credentials(&self) -> Result<CashfreeCredentials<'_>, HandlerError> {
        if self.app_id.is_empty() || self.secret_key.is_empty() {
            return Err(HandlerError::ProviderNotConfigured(format!(
                "Cashfree is not configured. Set {CASHFREE_APP_ID} and {CASHFREE_SECRET_KEY}."
            )));
        }
        Ok(CashfreeCredentials {
            app_id: &self.app_id,
            secret_key: &self.secret_key,
            base_url: self.environment.base_url(),
        })
    }
}

impl CashfreeEnvironment {
    /// Only an explicit `production` selects the live gateway.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("production") {
            CashfreeEnvironment::Production
        } else {
            CashfreeEnvironment::Sandbox
        }
    }

    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            CashfreeEnvironment::Sandbox => CASHFREE_SANDBOX_URL,
            CashfreeEnvironment::Production => CASHFREE_PRODUCTION_URL,
        }
    }
}
