//! # QR Render Configuration
//!
//! Rendering parameters for generated QR images. The pixel width is
//! overridable through `QR_CODE_SIZE`; everything else is fixed to the
//! values the mobile scanning flow was tuned against.

use qrcode::EcLevel;
use std::env;

/// Default pixel width of generated QR images
pub const DEFAULT_QR_WIDTH: u32 = 300;

/// Quiet-zone margin around the symbol, in modules
pub const QR_MARGIN_MODULES: u32 = 2;

/// QR rendering configuration
#[derive(Debug, Clone)]
pub struct QrRenderConfig {
    /// Target pixel width (and height) of the rendered image
    pub width: u32,

    /// Quiet-zone margin in modules
    pub margin_modules: u32,

    /// Error-correction level
    pub ec_level: EcLevel,
}

impl QrRenderConfig {
    /// Load configuration from environment variables.
    ///
    /// Honors `QR_CODE_SIZE` (pixel width); falls back to 300 when unset or
    /// unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let width = env::var("QR_CODE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QR_WIDTH);

        Self {
            width,
            margin_modules: QR_MARGIN_MODULES,
            ec_level: EcLevel::M,
        }
    }

    /// Builder: set target pixel width (for testing)
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

impl Default for QrRenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_QR_WIDTH,
            margin_modules: QR_MARGIN_MODULES,
            ec_level: EcLevel::M,
        }
    }
}
