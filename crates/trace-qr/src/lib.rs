//! # trace-qr
//!
//! QR code rendering for the farmtrace traceability API.
//!
//! This crate provides:
//! - `QrRenderConfig` — rendering parameters, loadable from the environment
//! - `QrRenderer` — rasterizes a URL into a PNG data URL
//! - `GeneratedQr` — the full registration artifact (image, payload,
//!   verification URL, mobile instructions)
//!
//! Rendering is a pure function of the input string and the config; it may
//! be invoked concurrently without coordination.

pub mod config;
pub mod render;

// Re-exports for convenience
pub use config::QrRenderConfig;
pub use render::{GeneratedQr, MobileInstructions, QrRenderer};
