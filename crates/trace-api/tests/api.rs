//! HTTP-level tests for the farmtrace API.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use trace_api::routes::create_router;
use trace_api::state::{AppConfig, AppState};
use trace_core::{codec, NewProductRequest, ProductRecord, VerificationUrls};

fn test_state() -> AppState {
    let config = AppConfig {
        host: "0.0.0.0".to_string(),
        port: 3001,
        environment: "test".to_string(),
    };
    AppState::with_urls(config, VerificationUrls::new("127.0.0.1", 3001))
}

fn server() -> TestServer {
    TestServer::new(create_router(test_state())).expect("failed to start test server")
}

fn tomatoes_request() -> Value {
    json!({
        "name": "Tomatoes",
        "farmer": "Alice",
        "origin": "Valley Farm",
        "harvestDate": "2024-05-01",
        "quantity": "100kg",
        "price": "50",
        "qualityCertification": "Organic"
    })
}

#[tokio::test]
async fn health_reports_server_identity() {
    let server = server();

    let res = server.get("/health").await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "FarmTrace API is running");
    assert_eq!(body["server"]["localIP"], "127.0.0.1");
    assert_eq!(body["server"]["port"], 3001);
    assert!(body["server"]["accessUrls"]
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u == "http://127.0.0.1:3001"));
}

#[tokio::test]
async fn api_info_lists_endpoints() {
    let server = server();

    let res = server.get("/api/").await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["name"], "FarmTrace API");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e.as_str().unwrap().contains("POST /api/farmer/products")));
}

#[tokio::test]
async fn create_product_returns_qr_artifact() {
    let server = server();

    let res = server
        .post("/api/farmer/products")
        .json(&tomatoes_request())
        .await;
    res.assert_status(StatusCode::CREATED);

    let body: Value = res.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Product created successfully");

    let data = &body["data"];
    assert_eq!(data["product"]["status"], "created");
    assert_eq!(data["product"]["name"], "Tomatoes");
    assert_eq!(data["product"]["qualityCertification"], "Organic");
    assert!(data["product"]["id"]
        .as_str()
        .unwrap()
        .starts_with("PRODUCT_"));

    assert!(data["verificationUrl"]
        .as_str()
        .unwrap()
        .starts_with("http://127.0.0.1:3001/verify/PRODUCT_"));
    assert!(data["qrCode"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert!(data["mobileInstructions"]["network"]
        .as_str()
        .unwrap()
        .contains("127.0.0.1"));
}

#[tokio::test]
async fn create_product_defaults_missing_fields() {
    let server = server();

    let res = server
        .post("/api/farmer/products")
        .json(&json!({ "name": "Mangoes" }))
        .await;
    res.assert_status(StatusCode::CREATED);

    let body: Value = res.json();
    assert_eq!(body["data"]["product"]["name"], "Mangoes");
    assert_eq!(body["data"]["product"]["farmer"], "");
    assert_eq!(body["data"]["product"]["status"], "created");
}

#[tokio::test]
async fn created_payload_round_trips_through_verify_url() {
    let server = server();

    let res = server
        .post("/api/farmer/products")
        .json(&tomatoes_request())
        .await;
    let body: Value = res.json();

    let url = body["data"]["verificationUrl"].as_str().unwrap();
    let token = url.split("?data=").nth(1).unwrap();

    let decoded = codec::decode_payload(token).unwrap();
    assert_eq!(decoded.name, "Tomatoes");
    assert_eq!(decoded.farmer, "Alice");
    assert_eq!(decoded.status, "created");
}

#[tokio::test]
async fn list_products_is_empty_placeholder() {
    let server = server();

    let res = server.get("/api/farmer/products").await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_qr_encodes_health_url() {
    let server = server();

    let res = server.post("/api/qr/test").await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["testUrl"], "http://127.0.0.1:3001/health");
    assert!(body["data"]["qrCode"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn verify_without_data_renders_placeholder() {
    let server = server();

    let res = server.get("/verify/PRODUCT_123").await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("PRODUCT_123"));
    assert!(html.contains("Unknown Farmer"));
    assert!(html.contains("Sample Product"));
}

#[tokio::test]
async fn verify_with_valid_data_renders_record() {
    let server = server();

    let record = ProductRecord::create(NewProductRequest {
        name: "Tomatoes".into(),
        farmer: "Alice".into(),
        origin: "Valley Farm".into(),
        harvest_date: "2024-05-01".into(),
        quantity: "100kg".into(),
        price: "50".into(),
        quality_certification: "Organic".into(),
    });
    let token = codec::encode_payload(&record).unwrap();

    let res = server
        .get(&format!("/verify/{}", record.id))
        .add_query_param("data", &token)
        .await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Alice"));
    assert!(html.contains("Valley Farm"));
    assert!(html.contains(&record.id));
}

#[tokio::test]
async fn verify_with_partial_payload_renders_supplied_fields() {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let server = server();

    // Registration-shaped payload: no timestamp or status
    let token = STANDARD.encode(
        json!({
            "id": "PRODUCT_9",
            "name": "Pears",
            "farmer": "Bob",
            "origin": "Hill Farm",
            "harvestDate": "2024-06-01",
            "quantity": "5kg",
            "price": "12",
            "qualityCertification": "Organic"
        })
        .to_string(),
    );

    let res = server
        .get("/verify/PRODUCT_9")
        .add_query_param("data", &token)
        .await;
    res.assert_status_ok();

    let html = res.text();
    assert!(html.contains("Bob"));
    assert!(html.contains("Pears"));
    assert!(html.contains("Hill Farm"));
    assert!(!html.contains("Unknown Farmer"));
}

#[tokio::test]
async fn verify_with_garbage_data_is_fail_soft() {
    let server = server();

    let res = server
        .get("/verify/PRODUCT_123")
        .add_query_param("data", "%%%not-base64%%%")
        .await;
    res.assert_status_ok();
    assert!(res.text().contains("Unknown Farmer"));
}

#[tokio::test]
async fn verify_with_non_json_payload_is_fail_soft() {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let server = server();
    let token = STANDARD.encode(b"not json at all");

    let res = server
        .get("/verify/PRODUCT_123")
        .add_query_param("data", &token)
        .await;
    res.assert_status_ok();
    assert!(res.text().contains("Unknown Farmer"));
}

#[tokio::test]
async fn unmatched_route_returns_404_envelope() {
    let server = server();

    let res = server.get("/nonexistent").await;
    res.assert_status(StatusCode::NOT_FOUND);

    let body: Value = res.json();
    assert_eq!(body["error"], "Route not found");
}
