//! # eSewa Checkout
//!
//! Payment initiation service for eSewa ePay v2.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PUBLIC_URL=https://shop.example.com
//! export ESEWA_BASE_URL=https://rc-epay.esewa.com.np
//! export ESEWA_MERCHANT_ID=EPAYTEST
//! export ESEWA_SECRET_KEY=...
//!
//! # Run the server
//! esewa-checkout
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Initialize application state
    let state = AppState::new();

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Gateway form: {}", state.gateway.config().form_url());
    info!("Product code: {}", state.gateway.config().product_code);
    info!(
        "Callbacks: success={}, failure={}",
        state.gateway.urls().success_url(),
        state.gateway.urls().failure_url()
    );
    if !state.gateway.config().has_secret_key() {
        warn!("Signing secret missing, every initiation will fail");
    }

    let app = routes::create_router(state);

    info!("eSewa checkout starting on http://{}", addr);

    if !is_prod {
        info!("Health: http://{}/health", addr);
        info!("Initiate: POST http://{}/api/payment/initiate", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  eSewa Checkout
  ━━━━━━━━━━━━━━━━━━━━━━━
  Payment initiation service
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
