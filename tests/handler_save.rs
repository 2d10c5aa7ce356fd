mod common;

use alias_shortener::infrastructure::persistence::InMemoryUrlRepository;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_save_with_requested_alias() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://example.com", "alias": "golang"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body, json!({"status": "OK", "alias": "golang"}));

    let stored = store.get("golang").unwrap();
    assert_eq!(stored.target_url, "https://example.com");
}

#[tokio::test]
async fn test_save_generates_alias() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://example.com/page"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "OK");

    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(store.get(alias).unwrap().target_url, "https://example.com/page");
}

#[tokio::test]
async fn test_save_empty_alias_generates() {
    let (server, _store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://example.com", "alias": ""}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["alias"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_save_duplicate_alias_conflicts() {
    let (server, store) = common::memory_server();

    server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://example.com", "alias": "golang"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://other.com", "alias": "golang"}))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "Error", "error": "URL already exists"})
    );
    assert_eq!(store.get("golang").unwrap().target_url, "https://example.com");
}

#[tokio::test]
async fn test_save_same_url_twice_gets_two_aliases() {
    let (server, store) = common::memory_server();

    for alias in ["first", "second"] {
        server
            .post("/api/v1/url")
            .add_header("Authorization", common::admin_auth())
            .json(&json!({"url": "https://example.com", "alias": alias}))
            .await
            .assert_status_ok();
    }

    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_save_missing_url_is_required() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"alias": "golang"}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "Error", "error": "field url is a required field"})
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_invalid_url() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "not a url"}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>()["error"],
        "field url is not a valid URL"
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_invalid_alias() {
    let (server, store) = common::memory_server();
    let too_long = "x".repeat(33);

    for alias in ["with/slash", "with space", "a?b", too_long.as_str()] {
        let response = server
            .post("/api/v1/url")
            .add_header("Authorization", common::admin_auth())
            .json(&json!({"url": "https://example.com", "alias": alias}))
            .await;

        assert_eq!(response.status_code(), 400, "alias {alias:?}");
        assert_eq!(
            response.json::<Value>()["error"],
            "field alias is not valid"
        );
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_reserved_alias() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://example.com", "alias": "health"}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>()["error"],
        "field alias is a reserved name"
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_malformed_json() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "Error", "error": "Failed to decode request body"})
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_without_json_content_type() {
    let (server, _store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .text(r#"{"url": "https://example.com"}"#)
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>()["error"],
        "Failed to decode request body"
    );
}

#[tokio::test]
async fn test_save_storage_failure_is_generic() {
    let server = common::create_test_server(common::create_test_state(Arc::new(
        common::FailingStore,
    )));

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://example.com", "alias": "golang"}))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "Error", "error": "Failed to add URL"})
    );
}

#[tokio::test]
async fn test_save_retries_generated_collision() {
    let store = Arc::new(InMemoryUrlRepository::new());
    let generator = Arc::new(common::ScriptedGenerator::new(&["taken1", "fresh2"]));
    let server = common::create_test_server(common::create_test_state_with_generator(
        store.clone(),
        generator,
    ));

    server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://first.com", "alias": "taken1"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::admin_auth())
        .json(&json!({"url": "https://second.com"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["alias"], "fresh2");
    assert_eq!(store.get("taken1").unwrap().target_url, "https://first.com");
    assert_eq!(store.get("fresh2").unwrap().target_url, "https://second.com");
}

#[tokio::test]
async fn test_save_requires_auth() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .json(&json!({"url": "https://example.com", "alias": "golang"}))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(
        response.header("www-authenticate"),
        "Basic realm=\"url-shortener\""
    );
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "Error", "error": "Unauthorized"})
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_rejects_wrong_password() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::basic_auth("admin", "wrong"))
        .json(&json!({"url": "https://example.com", "alias": "golang"}))
        .await;

    assert_eq!(response.status_code(), 401);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_accepts_extra_credential() {
    let (server, _store) = common::memory_server();

    let response = server
        .post("/api/v1/url")
        .add_header("Authorization", common::basic_auth("jt", "longPassword"))
        .json(&json!({"url": "https://example.com", "alias": "golang"}))
        .await;

    response.assert_status_ok();
}
