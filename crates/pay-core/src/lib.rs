//! # pay-core
//!
//! Core types for the esewa-checkout payment engine.
//!
//! This crate provides:
//! - `PaymentRequest` and its validation
//! - `Money`, `TaxRate` and the tax-inclusive amount calculator
//! - `TransactionIdSource` for minting gateway correlation ids
//! - `CallbackUrls` for the success/failure landing pages
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use pay_core::{calculate, PaymentRequest, TaxRate};
//!
//! let payment = PaymentRequest::new(100, "A", "a@b.com").validate()?;
//! let amounts = calculate(payment.amount, TaxRate::VAT)?;
//! assert_eq!(amounts.total.to_string(), "113.00");
//! # Ok::<(), pay_core::PaymentError>(())
//! ```

pub mod amount;
pub mod callback;
pub mod error;
pub mod request;
pub mod transaction;

// Re-exports for convenience
pub use amount::{calculate, AmountBreakdown, Money, TaxRate, INVALID_AMOUNT, MINIMUM_AMOUNT};
pub use callback::CallbackUrls;
pub use error::{PaymentError, PaymentResult, DEFAULT_FAILURE_MESSAGE};
pub use request::{PaymentRequest, ValidatedPayment, MISSING_FIELDS};
pub use transaction::{BoxedTransactionIdSource, TransactionIdSource, UuidV4Source};
