//! # Transaction Identifiers
//!
//! Each initiation mints a fresh identifier that the gateway uses to
//! correlate the payment. Nothing stores it locally.

use std::sync::Arc;
use uuid::Uuid;

/// Source of per-request transaction identifiers
pub trait TransactionIdSource: Send + Sync {
    /// Produce a new identifier. Must never repeat a previous one.
    fn next_id(&self) -> String;
}

/// Type alias for a shared id source (dynamic dispatch)
pub type BoxedTransactionIdSource = Arc<dyn TransactionIdSource>;

/// Random UUID v4 identifiers (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Source;

impl TransactionIdSource for UuidV4Source {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
