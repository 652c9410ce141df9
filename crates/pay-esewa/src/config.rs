//! # eSewa Configuration
//!
//! Configuration management for the eSewa integration.
//! All values, including the signing secret, are loaded from environment
//! variables once at startup and injected wherever they are needed.

use pay_core::{PaymentError, PaymentResult};
use std::{env, fmt};
use tracing::warn;

pub const BASE_URL_VAR: &str = "ESEWA_BASE_URL";
pub const MERCHANT_ID_VAR: &str = "ESEWA_MERCHANT_ID";
pub const SECRET_KEY_VAR: &str = "ESEWA_SECRET_KEY";

/// Path of the ePay v2 form on the gateway host
pub const FORM_PATH: &str = "/api/epay/main/v2/form";

/// HMAC signing secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// eSewa gateway configuration
#[derive(Debug, Clone)]
pub struct EsewaConfig {
    /// Gateway host (e.g., "https://rc-epay.esewa.com.np")
    pub base_url: String,

    /// Merchant / product code sent as `product_code`
    pub product_code: String,

    /// Signing secret. Absence is only detected when signing.
    secret_key: Option<SecretKey>,
}

impl EsewaConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - `ESEWA_BASE_URL`
    /// - `ESEWA_MERCHANT_ID`
    /// - `ESEWA_SECRET_KEY`
    ///
    /// A missing variable is logged here. Only the secret is enforced, at signing time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| {
            warn!("{} not set, payment URLs will be incomplete", BASE_URL_VAR);
            String::new()
        });

        let product_code = lookup(MERCHANT_ID_VAR).unwrap_or_else(|| {
            warn!("{} not set, product_code will be empty", MERCHANT_ID_VAR);
            String::new()
        });

        let secret_key = lookup(SECRET_KEY_VAR)
            .filter(|s| !s.is_empty())
            .map(SecretKey::new);

        if secret_key.is_none() {
            warn!("{} not set, payment initiation will fail", SECRET_KEY_VAR);
        }

        Self {
            base_url,
            product_code,
            secret_key,
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        base_url: impl Into<String>,
        product_code: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            product_code: product_code.into(),
            secret_key: Some(SecretKey::new(secret_key)),
        }
    }

    /// Builder: drop the signing secret
    pub fn without_secret_key(mut self) -> Self {
        self.secret_key = None;
        self
    }

    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// The signing secret, or a configuration error if none was supplied
    pub fn secret_key(&self) -> PaymentResult<&SecretKey> {
        self.secret_key.as_ref().ok_or_else(|| {
            PaymentError::Configuration(format!(
                "Missing {} in environment variables.",
                SECRET_KEY_VAR
            ))
        })
    }

    /// Where the browser posts the signed form
    pub fn form_url(&self) -> String {
        format!("{}{}", self.base_url, FORM_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_url() {
        let config = EsewaConfig::new("https://rc-epay.esewa.com.np", "EPAYTEST", "secret");
        assert_eq!(
            config.form_url(),
            "https://rc-epay.esewa.com.np/api/epay/main/v2/form"
        );
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let config = EsewaConfig::new("https://gw", "EPAYTEST", "secret").without_secret_key();
        assert!(!config.has_secret_key());

        let err = config.secret_key().unwrap_err();
        assert_eq!(
            err,
            PaymentError::Configuration(
                "Missing ESEWA_SECRET_KEY in environment variables.".to_string()
            )
        );
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = EsewaConfig::new("https://gw", "EPAYTEST", "super-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_from_lookup() {
        let config = EsewaConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://rc-epay.esewa.com.np"),
            (MERCHANT_ID_VAR, "EPAYTEST"),
            (SECRET_KEY_VAR, "8gBm/:&EnhH.1/q"),
        ]));
        assert_eq!(config.base_url, "https://rc-epay.esewa.com.np");
        assert_eq!(config.product_code, "EPAYTEST");
        assert!(config.has_secret_key());
    }

    #[test]
    fn test_from_lookup_empty_secret_is_absent() {
        let config = EsewaConfig::from_lookup(lookup(&[(SECRET_KEY_VAR, "")]));
        assert!(!config.has_secret_key());
    }

    #[test]
    fn test_from_lookup_missing_vars() {
        let config = EsewaConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, "");
        assert_eq!(config.product_code, "");
        assert!(!config.has_secret_key());
        assert_eq!(config.form_url(), "/api/epay/main/v2/form");
    }
}
