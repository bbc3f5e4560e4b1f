//! # Request Handlers
//!
//! Axum request handlers for the farmtrace API.
//! Registration returns the QR artifact inline; verification always renders,
//! substituting a placeholder record when the payload token is absent or
//! malformed.

use crate::pages;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use trace_core::{codec, NewProductRequest, ProductRecord, TraceError};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Failure envelope: `{success:false, message, error}`
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Query parameters accepted by the verification page
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    /// Base64-encoded product payload
    #[serde(default)]
    pub data: Option<String>,
}

/// Map a `TraceError` to the failure envelope at its HTTP status.
///
/// Error detail is verbose in development and generic otherwise.
fn trace_error_to_response(
    state: &AppState,
    message: &str,
    err: TraceError,
) -> (StatusCode, Json<FailureResponse>) {
    let detail = if state.config.is_development() {
        err.to_string()
    } else {
        "Internal Server Error".to_string()
    };
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(FailureResponse::new(message).with_error(detail)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint, includes the advertised server identity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "FarmTrace API is running",
        "timestamp": Utc::now().to_rfc3339(),
        "server": {
            "host": state.config.host,
            "port": state.config.port,
            "localIP": state.urls.host,
            "accessUrls": [
                format!("http://localhost:{}", state.config.port),
                state.urls.base_url(),
            ]
        }
    }))
}

/// API metadata
pub async fn api_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "FarmTrace API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Supply chain transparency for agricultural produce",
        "endpoints": [
            "GET /api/farmer/products - Get all products",
            "POST /api/farmer/products - Create new product",
            "POST /api/qr/test - Generate connectivity-test QR code",
            "GET /verify/:productId - Product verification page"
        ]
    }))
}

/// Register a product and generate its QR code
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<NewProductRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<FailureResponse>)> {
    let record = ProductRecord::create(request);

    let qr = state
        .renderer
        .generate_for_record(&record, &state.urls)
        .map_err(|e| {
            error!("Error creating product: {}", e);
            trace_error_to_response(&state, "Failed to create product", e)
        })?;

    info!("Created product {}", record.id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Product created successfully",
            "data": {
                "product": record,
                "qrCode": qr.data_url,
                "verificationUrl": qr.verification_url,
                "mobileInstructions": qr.mobile_instructions,
            }
        })),
    ))
}

/// List products (placeholder; no persistence exists)
pub async fn list_products() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "data": [],
        "message": "Mock farmer products endpoint - blockchain integration pending"
    }))
}

/// Generate a connectivity-test QR code pointing at the health endpoint
pub async fn test_qr(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<FailureResponse>)> {
    let test_url = state.urls.health_url();

    let data_url = state.renderer.render_data_url(&test_url).map_err(|e| {
        error!("Error generating test QR code: {}", e);
        trace_error_to_response(&state, "Failed to generate test QR code", e)
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Test QR code generated",
        "data": {
            "qrCode": data_url,
            "testUrl": test_url,
            "instructions": [
                "Scan this QR code with your mobile device",
                "It should open the health check endpoint",
                "If it works, your network setup is correct"
            ]
        }
    })))
}

/// Verification page served to scanning devices.
///
/// Decode failures are absorbed here: the page always renders with HTTP 200,
/// falling back to a placeholder record when the `data` token is absent or
/// malformed.
pub async fn verify_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(params): Query<VerifyParams>,
) -> Html<String> {
    let record = match params.data.as_deref() {
        Some(token) => match codec::decode_payload(token) {
            Ok(record) => record,
            Err(err) => {
                warn!(%product_id, "Error decoding product data: {}", err);
                ProductRecord::placeholder(&product_id)
            }
        },
        None => ProductRecord::placeholder(&product_id),
    };

    Html(pages::verification_page(&record, &state.urls))
}

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}
