//! # Trace Error Types
//!
//! Typed error handling for the farmtrace API.
//! All fallible operations return `Result<T, TraceError>`.

use thiserror::Error;

/// Core error type for all traceability operations
#[derive(Debug, Error)]
pub enum TraceError {
    /// Configuration errors (missing vars, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// QR payload was not valid base64
    #[error("Payload decode failed: {0}")]
    PayloadDecode(String),

    /// QR payload decoded but was not a valid product record
    #[error("Payload parse failed: {0}")]
    PayloadParse(String),

    /// QR image rendering failed
    #[error("QR render failed: {0}")]
    QrRender(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TraceError {
    /// Returns true if this error came from a malformed QR payload.
    ///
    /// Payload errors are absorbed by the verification page (placeholder
    /// substitution), never surfaced to the caller.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            TraceError::PayloadDecode(_) | TraceError::PayloadParse(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            TraceError::Configuration(_) => 500,
            TraceError::InvalidRequest(_) => 400,
            TraceError::PayloadDecode(_) => 400,
            TraceError::PayloadParse(_) => 400,
            TraceError::QrRender(_) => 500,
            TraceError::Serialization(_) => 500,
            TraceError::Internal(_) => 500,
        }
    }
}

/// Result type alias for traceability operations
pub type TraceResult<T> = Result<T, TraceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_errors_are_absorbable() {
        assert!(TraceError::PayloadDecode("bad base64".into()).is_payload_error());
        assert!(TraceError::PayloadParse("bad json".into()).is_payload_error());
        assert!(!TraceError::QrRender("png".into()).is_payload_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(TraceError::InvalidRequest("test".into()).status_code(), 400);
        assert_eq!(TraceError::QrRender("test".into()).status_code(), 500);
        assert_eq!(TraceError::PayloadDecode("test".into()).status_code(), 400);
    }
}
