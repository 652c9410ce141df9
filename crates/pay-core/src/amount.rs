//! # Amount Calculation
//!
//! Tax-inclusive amounts for a payment.
//!
//! Every step rounds to two decimal places before the next one starts:
//! base, then tax on the rounded base, then total of the two rounded values.
//! Rounding works on the exact binary value of the `f64` and sends halves
//! away from zero, the same way a fixed-point formatter (`toFixed(2)`) does,
//! so totals agree with the gateway's own arithmetic to the cent.

use crate::error::{PaymentError, PaymentResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Client-facing message for an amount that is not a number or is too small
pub const INVALID_AMOUNT: &str = "Invalid amount";

/// Smallest amount a payment may be initiated for
pub const MINIMUM_AMOUNT: f64 = 1.0;

/// Tax rate applied on top of the base amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Nepal VAT (13%)
    pub const VAT: TaxRate = TaxRate(0.13);

    pub fn new(rate: f64) -> Self {
        Self(rate)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::VAT
    }
}

/// Monetary value with two fractional digits
///
/// Always displays with exactly two decimals (`"100.00"`, `"0.13"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Round an `f64` to two decimal places.
    ///
    /// Fails with a validation error for NaN, infinities, and values outside
    /// the fixed-point range.
    pub fn round2(value: f64) -> PaymentResult<Self> {
        let exact = Decimal::from_f64_retain(value)
            .ok_or_else(|| PaymentError::validation(INVALID_AMOUNT))?;
        Ok(Self(exact.round_dp_with_strategy(
            2,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }

    /// Nearest `f64` to this value, used as the input to the next step
    pub fn to_f64(&self) -> PaymentResult<f64> {
        self.to_string().parse::<f64>().map_err(|e| {
            PaymentError::unexpected(format!("Failed to convert amount {}: {}", self, e))
        })
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        value.rescale(2);
        write!(f, "{}", value)
    }
}

/// Base, tax and total for one payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountBreakdown {
    pub base: Money,
    pub tax: Money,
    pub total: Money,
}

/// Derive tax and total from a base amount.
///
/// `amount` must be finite and at least [`MINIMUM_AMOUNT`].
pub fn calculate(amount: f64, rate: TaxRate) -> PaymentResult<AmountBreakdown> {
    if !amount.is_finite() || amount < MINIMUM_AMOUNT {
        return Err(PaymentError::validation(INVALID_AMOUNT));
    }

    let base = Money::round2(amount)?;
    let base_value = base.to_f64()?;
    let tax = Money::round2(base_value * rate.as_f64())?;
    let total = Money::round2(base_value + tax.to_f64()?)?;

    Ok(AmountBreakdown { base, tax, total })
}
