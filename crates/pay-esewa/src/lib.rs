//! # pay-esewa
//!
//! eSewa ePay v2 integration for esewa-checkout.
//!
//! eSewa's hosted checkout takes a browser form post. This crate builds that
//! form: tax-inclusive amounts, a fresh transaction UUID, and an HMAC-SHA256
//! signature over `total_amount,transaction_uuid,product_code`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{CallbackUrls, PaymentRequest};
//! use pay_esewa::EsewaGateway;
//!
//! // Create gateway from environment
//! let gateway = EsewaGateway::from_env(CallbackUrls::new("https://shop.example.com"));
//!
//! // Build the signed form
//! let initiation = gateway.initiate(&PaymentRequest::new(100, "A", "a@b.com"))?;
//!
//! // POST initiation.params to initiation.payment_url from the browser
//! ```

pub mod config;
pub mod gateway;
pub mod signature;

// Re-exports
pub use config::{EsewaConfig, SecretKey};
pub use gateway::{EsewaFormParams, EsewaGateway, PaymentInitiation};
pub use signature::{
    compute_hmac_sha256_base64, generate_signature, SigningMessage, SIGNED_FIELDS,
    SIGNED_FIELD_NAMES,
};
