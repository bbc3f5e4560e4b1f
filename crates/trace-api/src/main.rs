//! # FarmTrace RS
//!
//! Produce-traceability API: register a product, hand back a QR code, and
//! serve the verification page a scanning device lands on.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export PORT=3001
//! export HOST=0.0.0.0
//! export QR_CODE_SIZE=300
//!
//! # Run the server
//! farmtrace
//! ```

use trace_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state (discovers the advertised local IP)
    let state = AppState::new();

    let addr = state.config.socket_addr();
    let base_url = state.urls.base_url();

    info!("Environment: {}", state.config.environment);
    info!("🌐 Local IP address: {}", state.urls.host);
    info!("🌐 Health check: {}/health", base_url);
    info!("📱 Mobile access: {}", base_url);
    info!("🔗 Local access: http://localhost:{}", state.config.port);
    info!("Mobile devices must be on the same WiFi network to reach scanned QR codes");

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 FarmTrace starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🌾 FarmTrace RS 🌾
  ━━━━━━━━━━━━━━━━━━
  Farm-to-consumer traceability
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
