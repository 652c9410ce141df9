//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /api/payment/initiate - Build a signed eSewa form
/// - GET  /success - Gateway success redirect target
/// - GET  /failure - Gateway failure redirect target
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // The initiate call comes from the storefront's browser code
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route("/payment/initiate", post(handlers::initiate_payment));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Landing pages
        .route("/success", get(handlers::payment_success))
        .route("/failure", get(handlers::payment_failure))
        // API
        .nest("/api", api_routes)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // State
        .with_state(state)
}
