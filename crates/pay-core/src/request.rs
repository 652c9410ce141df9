//! # Payment Request
//!
//! Inbound `{ amount, name, email }` payload and its validation.
//!
//! The body is read as loose JSON. A field counts as missing when it is
//! absent, `null`, `false`, `0` or `""`, and `amount` may arrive either as a
//! number or as a numeric string.

use crate::amount::INVALID_AMOUNT;
use crate::error::{PaymentError, PaymentResult};
use serde_json::{Map, Number, Value};

/// Client-facing message when any required field is absent
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Raw payment request as posted by the browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentRequest {
    pub amount: Value,
    pub name: Value,
    pub email: Value,
}

/// Request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayment {
    /// Base amount, finite and at least 1
    pub amount: f64,
    pub name: String,
    pub email: String,
}

impl PaymentRequest {
    pub fn new(amount: impl Into<Value>, name: impl Into<Value>, email: impl Into<Value>) -> Self {
        Self {
            amount: amount.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Parse a raw request body.
    ///
    /// Invalid JSON is an unexpected error. Valid JSON that is not an object
    /// yields a request with every field missing.
    pub fn from_json_slice(body: &[u8]) -> PaymentResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(match value {
            Value::Object(map) => Self::from_object(map),
            _ => Self::default(),
        })
    }

    fn from_object(mut map: Map<String, Value>) -> Self {
        Self {
            amount: map.remove("amount").unwrap_or(Value::Null),
            name: map.remove("name").unwrap_or(Value::Null),
            email: map.remove("email").unwrap_or(Value::Null),
        }
    }

    /// Check presence of all fields, then coerce and bound the amount
    pub fn validate(&self) -> PaymentResult<ValidatedPayment> {
        if !is_present(&self.amount) || !is_present(&self.name) || !is_present(&self.email) {
            return Err(PaymentError::validation(MISSING_FIELDS));
        }

        let amount = coerce_amount(&self.amount)
            .filter(|a| *a >= crate::amount::MINIMUM_AMOUNT)
            .ok_or_else(|| PaymentError::validation(INVALID_AMOUNT))?;

        Ok(ValidatedPayment {
            amount,
            name: text_of(&self.name),
            email: text_of(&self.email),
        })
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => number_value(n) != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric value of `amount`, if it has a finite one
fn coerce_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => number_value(n),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}

/// Numbers keep their source text, so values past the `f64` range read as infinite
fn number_value(n: &Number) -> f64 {
    n.to_string().parse::<f64>().unwrap_or(f64::NAN)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
