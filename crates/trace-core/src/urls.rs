//! # Verification URLs
//!
//! URL construction for the verification flow. The base address is the
//! server's own advertised IP and port, discovered once at startup, so that
//! a mobile device on the same network can reach the server after scanning.

use serde::{Deserialize, Serialize};

/// Addresses embedded into QR codes and mobile instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationUrls {
    /// Advertised host (non-loopback local IP, or "localhost")
    pub host: String,
    /// Listening port
    pub port: u16,
}

impl VerificationUrls {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Base URL of the server as seen from the local network
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Verification URL for a product, payload token included
    pub fn verify_url(&self, product_id: &str, token: &str) -> String {
        format!("{}/verify/{}?data={}", self.base_url(), product_id, token)
    }

    /// Health-check URL (used for mobile connectivity tests)
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url())
    }
}

impl Default for VerificationUrls {
    fn default() -> Self {
        Self::new("localhost", 3001)
    }
}
