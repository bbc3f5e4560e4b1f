//! # Application State
//!
//! Shared state for the Axum application. The server's advertised identity
//! (non-loopback local IP + port) is discovered once here, before the
//! listener starts, and carried read-only inside `AppState` — handlers never
//! consult process globals.

use trace_core::VerificationUrls;
use trace_qr::QrRenderer;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, production); gates error detail
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if running in development (verbose error detail)
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Discover the server's non-loopback local IPv4 address.
///
/// Scans the available network interfaces, skipping loopback; falls back to
/// `"localhost"` when no suitable interface exists. A mobile device on the
/// same network must be able to reach this address after scanning a QR code.
pub fn discover_local_ip() -> String {
    match local_ip_address::local_ip() {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            tracing::warn!("Could not discover local IP, falling back to localhost: {}", e);
            "localhost".to_string()
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Advertised server identity, embedded in every QR verification URL
    pub urls: VerificationUrls,
    /// QR renderer
    pub renderer: QrRenderer,
}

impl AppState {
    /// Create state with identity discovered from the local interfaces
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let urls = VerificationUrls::new(discover_local_ip(), config.port);
        Self {
            config,
            urls,
            renderer: QrRenderer::from_env(),
        }
    }

    /// Create state with an explicit advertised identity (for testing)
    pub fn with_urls(config: AppConfig, urls: VerificationUrls) -> Self {
        Self {
            config,
            urls,
            renderer: QrRenderer::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
