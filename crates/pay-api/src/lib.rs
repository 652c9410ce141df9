//! # pay-api
//!
//! HTTP API layer for esewa-checkout.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment initiation endpoint
//! - Success/failure landing pages for the gateway redirects
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/payment/initiate` | Build a signed eSewa form |
//! | GET | `/success` | Payment success page |
//! | GET | `/failure` | Payment failure page |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, ConfigError};
