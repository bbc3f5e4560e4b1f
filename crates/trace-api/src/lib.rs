//! # trace-api
//!
//! HTTP API layer for farmtrace-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for product registration and QR generation
//! - The HTML verification page served to scanning devices
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check with server identity |
//! | GET | `/api/` | API metadata |
//! | POST | `/api/farmer/products` | Register product, returns QR code |
//! | GET | `/api/farmer/products` | List products (placeholder) |
//! | POST | `/api/qr/test` | Connectivity-test QR code |
//! | GET | `/verify/{productId}` | Product verification page |

pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
