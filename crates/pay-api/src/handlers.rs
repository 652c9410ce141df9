//! # Request Handlers
//!
//! Axum request handlers for the payment API.
//! Payment errors are turned into HTTP status codes here and nowhere else.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use pay_core::{PaymentError, PaymentRequest};
use pay_esewa::PaymentInitiation;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn payment_error_to_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.client_message())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "esewa-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Start an eSewa payment.
///
/// The body is read raw so that presence checks see exactly what the client
/// sent, whatever its `Content-Type`.
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn initiate_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PaymentInitiation>, (StatusCode, Json<ErrorResponse>)> {
    let result = PaymentRequest::from_json_slice(&body)
        .and_then(|request| state.gateway.initiate(&request));

    match result {
        Ok(initiation) => {
            info!(
                "Initiated {} payment: transaction={}, total={}",
                state.gateway.provider_name(),
                initiation.params.transaction_uuid,
                initiation.params.total_amount
            );
            Ok(Json(initiation))
        }
        Err(err) if err.is_client_error() => {
            warn!("Rejected payment request: {}", err);
            Err(payment_error_to_response(err))
        }
        Err(err) => {
            error!("Payment error: {}", err);
            Err(payment_error_to_response(err))
        }
    }
}

/// Payment success page
pub async fn payment_success() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html>
<head><title>Payment Successful</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; min-height: 100vh; margin: 0;">
    <div style="text-align: center;">
        <div style="font-size: 64px; color: #22c55e;">&#10004;</div>
        <h1>Payment Successful!</h1>
        <p style="color: #4b5563;">Thank you for your Payment. Your transaction has been completed successfully.</p>
    </div>
</body>
</html>
"#,
    )
}

/// Payment failure page
pub async fn payment_failure() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html>
<head><title>Payment Failed</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; min-height: 100vh; margin: 0;">
    <div style="text-align: center;">
        <div style="font-size: 64px; color: #ef4444;">&#10008;</div>
        <h1>Payment Failed</h1>
        <p style="color: #4b5563;">Your payment could not be completed. No charges were made.</p>
    </div>
</body>
</html>
"#,
    )
}
