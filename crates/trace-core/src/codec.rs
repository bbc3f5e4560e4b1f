//! # QR Payload Codec
//!
//! Encodes a product record into a URL-embeddable token and reconstructs it
//! on verification. The token is standard base64 over the record's JSON
//! serialization, carried in the `data=` query parameter of a verification
//! URL.
//!
//! No length limit is enforced; very large payloads degrade QR scannability
//! and that is accepted.

use crate::error::{TraceError, TraceResult};
use crate::product::ProductRecord;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Serialize a record to JSON and base64-encode it.
pub fn encode_payload(record: &ProductRecord) -> TraceResult<String> {
    let json = serde_json::to_string(record)
        .map_err(|e| TraceError::Serialization(e.to_string()))?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Decode a `data=` token back into a product record.
///
/// Returns a typed error on malformed base64, non-UTF-8 content, or invalid
/// JSON. Callers on the verification path match on the error and substitute
/// a placeholder record; the page never fails because of a bad token.
///
/// Any well-formed JSON object is accepted: missing fields default to empty
/// strings so the fields the payload does carry render verbatim.
pub fn decode_payload(token: &str) -> TraceResult<ProductRecord> {
    let bytes = BASE64
        .decode(token.as_bytes())
        .map_err(|e| TraceError::PayloadDecode(e.to_string()))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| TraceError::PayloadDecode(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| TraceError::PayloadParse(e.to_string()))
}
