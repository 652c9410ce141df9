//! # Request Signing
//!
//! eSewa verifies a form by recomputing an HMAC-SHA256 over a canonical
//! `key=value,key=value,...` message built from the fields named in
//! `signed_field_names`. The digest is sent as standard Base64.

use crate::config::EsewaConfig;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use pay_core::{PaymentError, PaymentResult};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signed fields, in message order
pub const SIGNED_FIELDS: [&str; 3] = ["total_amount", "transaction_uuid", "product_code"];

/// Value of the `signed_field_names` form parameter
pub const SIGNED_FIELD_NAMES: &str = "total_amount,transaction_uuid,product_code";

/// The three values that make up the canonical message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningMessage {
    pub total_amount: String,
    pub transaction_uuid: String,
    pub product_code: String,
}

impl SigningMessage {
    pub fn new(
        total_amount: impl Into<String>,
        transaction_uuid: impl Into<String>,
        product_code: impl Into<String>,
    ) -> Self {
        Self {
            total_amount: total_amount.into(),
            transaction_uuid: transaction_uuid.into(),
            product_code: product_code.into(),
        }
    }

    fn values(&self) -> [&str; 3] {
        [&self.total_amount, &self.transaction_uuid, &self.product_code]
    }

    /// `total_amount=...,transaction_uuid=...,product_code=...`
    pub fn canonical(&self) -> String {
        SIGNED_FIELDS
            .iter()
            .zip(self.values())
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Sign `message` with the configured secret.
///
/// Fails with a configuration error when no secret was supplied.
pub fn generate_signature(config: &EsewaConfig, message: &str) -> PaymentResult<String> {
    let secret = config.secret_key()?;
    compute_hmac_sha256_base64(secret.as_bytes(), message.as_bytes())
}

/// Base64 (standard, padded) HMAC-SHA256 of `message` under `secret`
pub fn compute_hmac_sha256_base64(secret: &[u8], message: &[u8]) -> PaymentResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| PaymentError::unexpected(format!("Failed to initialise HMAC: {}", e)))?;
    mac.update(message);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
