//! # Routes
//!
//! Axum router configuration for the farmtrace API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check with server identity
/// - GET  /api/ - API metadata
/// - POST /api/farmer/products - Register product, returns QR code
/// - GET  /api/farmer/products - List products (placeholder)
/// - POST /api/qr/test - Connectivity-test QR code
/// - GET  /verify/{product_id} - Verification page (optional ?data= payload)
/// - *    anything else - 404 {"error":"Route not found"}
pub fn create_router(state: AppState) -> Router {
    // Scanning devices arrive from arbitrary origins on the local network
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let farmer_routes = Router::new().route(
        "/products",
        post(handlers::create_product).get(handlers::list_products),
    );

    let qr_routes = Router::new().route("/test", post(handlers::test_qr));

    let api_routes = Router::new()
        .route("/", get(handlers::api_info))
        .nest("/farmer", farmer_routes)
        .nest("/qr", qr_routes);

    Router::new()
        .route("/health", get(handlers::health))
        // The nested "/" route only matches "/api"; register "/api/" explicitly
        // so the documented path resolves too.
        .route("/api/", get(handlers::api_info))
        .route("/verify/{product_id}", get(handlers::verify_product))
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
