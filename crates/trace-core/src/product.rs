//! # Product Types
//!
//! Product record types for farmtrace.
//! A record is created once at registration and never mutated; the only
//! durable copy is whatever ends up embedded in its QR payload.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Character set for the random id suffix (lowercase base-36)
const ID_SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random id suffix
const ID_SUFFIX_LEN: usize = 9;

/// Registration request body.
///
/// All fields are optional on the wire; absent fields default to the empty
/// string rather than being rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub farmer: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub harvest_date: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quality_certification: String,
}

/// A traceable product record.
///
/// Deserialization is lenient: a payload object may omit fields, which
/// default to empty strings, so the fields it does carry still render
/// verbatim on the verification page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecord {
    /// Generated identifier (`PRODUCT_<millis>_<suffix>`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Producing farmer
    pub farmer: String,

    /// Farm / region of origin
    pub origin: String,

    /// Harvest date as supplied by the caller
    pub harvest_date: String,

    /// Quantity (free-form, e.g. "100kg")
    pub quantity: String,

    /// Price (free-form)
    pub price: String,

    /// Quality certification (e.g. "Organic")
    pub quality_certification: String,

    /// Registration time, ISO-8601
    pub timestamp: String,

    /// Lifecycle status (always "created" — there is no update lifecycle)
    pub status: String,
}

impl ProductRecord {
    /// Create a record from a registration request.
    ///
    /// Assigns a fresh id, stamps the current time, and sets the status to
    /// `"created"`.
    pub fn create(request: NewProductRequest) -> Self {
        Self {
            id: generate_product_id(),
            name: request.name,
            farmer: request.farmer,
            origin: request.origin,
            harvest_date: request.harvest_date,
            quantity: request.quantity,
            price: request.price,
            quality_certification: request.quality_certification,
            timestamp: Utc::now().to_rfc3339(),
            status: "created".to_string(),
        }
    }

    /// Placeholder record shown on the verification page when the scanned
    /// URL carried no decodable payload.
    ///
    /// `timestamp` and `status` are filled only to satisfy the record
    /// shape; the verification page does not render them.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "Sample Product".to_string(),
            farmer: "Unknown Farmer".to_string(),
            origin: "Unknown Origin".to_string(),
            harvest_date: "Unknown Date".to_string(),
            quantity: "Unknown".to_string(),
            price: "Unknown".to_string(),
            quality_certification: "Unknown".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            status: "unverified".to_string(),
        }
    }
}

/// Generate a product id: `PRODUCT_<unix-millis>_<9-char random suffix>`.
///
/// Uniqueness is best-effort and never checked; the timestamp prefix plus a
/// 36^9 suffix space keeps collisions out of statistical reach.
pub fn generate_product_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_SUFFIX_CHARSET[rng.gen_range(0..ID_SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("PRODUCT_{}_{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_request() -> NewProductRequest {
        NewProductRequest {
            name: "Tomatoes".into(),
            farmer: "Alice".into(),
            origin: "Valley Farm".into(),
            harvest_date: "2024-05-01".into(),
            quantity: "100kg".into(),
            price: "50".into(),
            quality_certification: "Organic".into(),
        }
    }

    #[test]
    fn test_create_assigns_id_timestamp_status() {
        let record = ProductRecord::create(sample_request());
        assert!(record.id.starts_with("PRODUCT_"));
        assert_eq!(record.status, "created");
        assert_eq!(record.name, "Tomatoes");
        assert!(!record.timestamp.is_empty());
    }

    #[test]
    fn test_id_format() {
        let id = generate_product_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts[0], "PRODUCT");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_id_uniqueness_statistical() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_product_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_request_defaults_missing_fields() {
        let request: NewProductRequest =
            serde_json::from_str(r#"{"name":"Mangoes"}"#).unwrap();
        assert_eq!(request.name, "Mangoes");
        assert_eq!(request.farmer, "");
        assert_eq!(request.quality_certification, "");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ProductRecord::create(sample_request());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("harvestDate").is_some());
        assert!(json.get("qualityCertification").is_some());
        assert!(json.get("harvest_date").is_none());
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"id":"PRODUCT_9","farmer":"Bob"}"#).unwrap();
        assert_eq!(record.id, "PRODUCT_9");
        assert_eq!(record.farmer, "Bob");
        assert_eq!(record.timestamp, "");
        assert_eq!(record.status, "");
    }

    #[test]
    fn test_placeholder_fields() {
        let record = ProductRecord::placeholder("PRODUCT_123");
        assert_eq!(record.id, "PRODUCT_123");
        assert_eq!(record.name, "Sample Product");
        assert_eq!(record.farmer, "Unknown Farmer");
        assert_eq!(record.origin, "Unknown Origin");
        assert_eq!(record.harvest_date, "Unknown Date");
        assert_eq!(record.quantity, "Unknown");
    }
}
