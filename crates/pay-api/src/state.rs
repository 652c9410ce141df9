//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the eSewa gateway and the server configuration.

use pay_core::CallbackUrls;
use pay_esewa::EsewaGateway;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while reading server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid socket address {addr}: {source}")]
    InvalidSocketAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Public base URL, used for the gateway's success/failure redirects
    pub public_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            public_url: lookup("PUBLIC_URL")
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidSocketAddr { addr, source })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Callback URLs under the public base URL
    pub fn callback_urls(&self) -> CallbackUrls {
        CallbackUrls::new(&self.public_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// eSewa initiation flow
    pub gateway: Arc<EsewaGateway>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let gateway = EsewaGateway::from_env(config.callback_urls());
        Self::with_gateway(config, gateway)
    }

    /// Create from explicit parts (for testing)
    pub fn with_gateway(config: AppConfig, gateway: EsewaGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
