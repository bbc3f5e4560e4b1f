//! # trace-core
//!
//! Core types and the QR payload codec for the farmtrace traceability API.
//!
//! This crate provides:
//! - `ProductRecord` and `NewProductRequest` for the registration flow
//! - `encode_payload` / `decode_payload` for the base64-JSON QR payload
//! - `VerificationUrls` for building verification and health URLs
//! - `TraceError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use trace_core::{NewProductRequest, ProductRecord, VerificationUrls, codec};
//!
//! // Register a product
//! let record = ProductRecord::create(request);
//!
//! // Build the verification URL a QR code will carry
//! let urls = VerificationUrls::new("192.168.1.20", 3001);
//! let url = urls.verify_url(&record.id, &codec::encode_payload(&record)?);
//!
//! // Later, a scanning device hits /verify and the payload round-trips
//! let decoded = codec::decode_payload(&token)?;
//! ```

pub mod codec;
pub mod error;
pub mod product;
pub mod urls;

// Re-exports for convenience
pub use codec::{decode_payload, encode_payload};
pub use error::{TraceError, TraceResult};
pub use product::{NewProductRequest, ProductRecord};
pub use urls::VerificationUrls;
