mod common;

use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _store) = common::memory_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = common::create_test_server(common::create_test_state(Arc::new(
        common::FailingStore,
    )));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
    assert_eq!(json["checks"]["storage"]["message"], "Storage unavailable");
}
