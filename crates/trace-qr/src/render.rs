//! # QR Rendering
//!
//! Rasterizes verification URLs into black-on-white PNG images, packaged as
//! data URLs so they embed directly in JSON responses and HTML without a
//! separate file fetch.

use crate::config::QrRenderConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use serde::Serialize;
use std::io::Cursor;
use trace_core::{codec, ProductRecord, TraceError, TraceResult, VerificationUrls};

/// Static connectivity hints returned alongside every generated QR code.
///
/// Purely informational; derived only from the server's advertised address.
#[derive(Debug, Clone, Serialize)]
pub struct MobileInstructions {
    pub network: String,
    pub test: String,
    pub scan: String,
}

impl MobileInstructions {
    pub fn for_server(urls: &VerificationUrls) -> Self {
        Self {
            network: format!(
                "Ensure mobile device is on same WiFi as server ({})",
                urls.host
            ),
            test: format!("Test connection: {}", urls.health_url()),
            scan: "Scan QR code to see full product details".to_string(),
        }
    }
}

/// Everything produced by registering a product with a QR code
#[derive(Debug, Clone)]
pub struct GeneratedQr {
    /// PNG image as a `data:image/png;base64,...` URL
    pub data_url: String,
    /// The record's JSON serialization (what the payload token encodes)
    pub payload_json: String,
    /// Verification URL embedded in the QR image
    pub verification_url: String,
    /// Connectivity hints for the scanning device
    pub mobile_instructions: MobileInstructions,
}

/// Renders QR symbols to PNG data URLs
#[derive(Debug, Clone)]
pub struct QrRenderer {
    config: QrRenderConfig,
}

impl QrRenderer {
    pub fn new(config: QrRenderConfig) -> Self {
        Self { config }
    }

    /// Renderer with configuration loaded from the environment
    pub fn from_env() -> Self {
        Self::new(QrRenderConfig::from_env())
    }

    /// Generate the full QR artifact for a product record.
    ///
    /// Encodes the record into the verification URL's `data=` token, renders
    /// that URL as a QR image, and attaches the mobile instructions.
    pub fn generate_for_record(
        &self,
        record: &ProductRecord,
        urls: &VerificationUrls,
    ) -> TraceResult<GeneratedQr> {
        let token = codec::encode_payload(record)?;
        let verification_url = urls.verify_url(&record.id, &token);
        let data_url = self.render_data_url(&verification_url)?;

        tracing::info!(
            product_id = %record.id,
            name = %record.name,
            farmer = %record.farmer,
            url = %verification_url,
            "QR code generated with full product data"
        );

        let payload_json = serde_json::to_string(record)
            .map_err(|e| TraceError::Serialization(e.to_string()))?;

        Ok(GeneratedQr {
            data_url,
            payload_json,
            verification_url,
            mobile_instructions: MobileInstructions::for_server(urls),
        })
    }

    /// Render an arbitrary URL as a QR data URL (connectivity-test codes)
    pub fn render_data_url(&self, contents: &str) -> TraceResult<String> {
        let png = self.render_png(contents)?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
    }

    /// Rasterize a QR symbol for `contents` into PNG bytes.
    ///
    /// Modules are scaled by an integral factor toward the configured width,
    /// with the configured quiet-zone margin on all sides. Dark modules are
    /// black on a white background.
    pub fn render_png(&self, contents: &str) -> TraceResult<Vec<u8>> {
        let code = QrCode::with_error_correction_level(contents.as_bytes(), self.config.ec_level)
            .map_err(|e| TraceError::QrRender(e.to_string()))?;

        let modules = code.width();
        let colors = code.to_colors();
        let margin = self.config.margin_modules;
        let total = modules as u32 + 2 * margin;
        let scale = (self.config.width / total).max(1);
        let dim = total * scale;

        let mut img = GrayImage::from_pixel(dim, dim, Luma([255u8]));
        for y in 0..modules {
            for x in 0..modules {
                if colors[y * modules + x] == Color::Dark {
                    let px = (x as u32 + margin) * scale;
                    let py = (y as u32 + margin) * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            img.put_pixel(px + dx, py + dy, Luma([0u8]));
                        }
                    }
                }
            }
        }

        let mut png = Vec::new();
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| TraceError::QrRender(e.to_string()))?;
        Ok(png)
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new(QrRenderConfig::default())
    }
}
