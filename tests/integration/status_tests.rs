//! Status lookup tests against a stubbed SendPulse API.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sendpulse_gateway::create_router;

use super::test_utils::{get, get_with_auth, mount_token_endpoint, send, test_state};

async fn mount_status_endpoint(server: &MockServer, email: &str, token: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/emails/{}", email)))
        .and(header("Authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn test_lookup_returns_first_record() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 1).await;
    mount_status_endpoint(
        &server,
        "a@b.com",
        "T",
        r#"[{"status":1,"status_explain":"active"}]"#,
        1,
    )
    .await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({"message": "", "status": 1, "status_explain": "active"})
    );
}

#[tokio::test]
async fn test_lookup_caches_token_for_bearer_check() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 1).await;
    mount_status_endpoint(
        &server,
        "a@b.com",
        "T",
        r#"[{"status":1,"status_explain":"active"}]"#,
        1,
    )
    .await;
    let state = test_state(&server.uri());
    let router = create_router(state.clone());

    let response = send(router.clone(), get("/api/v1/getStatus?email=a@b.com")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(state.tokens.current().await.as_deref(), Some("T"));

    let response = send(router, get_with_auth("/api/v1/", "Bearer T")).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_repeated_lookup_is_byte_identical() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 2).await;
    mount_status_endpoint(
        &server,
        "a@b.com",
        "T",
        r#"[{"status":1,"status_explain":"active"}]"#,
        2,
    )
    .await;
    let router = create_router(test_state(&server.uri()));

    let first = send(router.clone(), get("/api/v1/getStatus?email=a@b.com")).await;
    let second = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_empty_email_makes_no_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router.clone(), get("/api/v1/getStatus?email=")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({"message": "Empty user email!!!", "status": 0, "status_explain": ""})
    );

    let response = send(router, get("/api/v1/getStatus")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Empty user email!!!");
}

// =============================================================================
// Token Exchange Failures
// =============================================================================

#[tokio::test]
async fn test_token_endpoint_error_stops_before_lookup() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"message": "invalid_client"}), 1).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let state = test_state(&server.uri());
    let router = create_router(state.clone());

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "invalid_client");
    assert!(state.tokens.current().await.is_none());
}

#[tokio::test]
async fn test_undecodable_token_reply_includes_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.json()["message"].as_str().unwrap().to_string();
    assert!(message.ends_with("Server response: <html>bad gateway</html>"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_request() {
    // Nothing listens on port 1
    let router = create_router(test_state("http://127.0.0.1:1"));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert_eq!(body["status"], 0);
    assert_eq!(body["status_explain"], "");
}

// =============================================================================
// Status Lookup Failures
// =============================================================================

#[tokio::test]
async fn test_upstream_reported_error_is_surfaced() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 1).await;
    mount_status_endpoint(&server, "a@b.com", "T", r#"{"message":"user not found"}"#, 1).await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "user not found");
}

#[tokio::test]
async fn test_empty_array_is_bad_request() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 1).await;
    mount_status_endpoint(&server, "a@b.com", "T", "[]", 1).await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.json()["message"].as_str().unwrap().to_string();
    assert!(message.contains("empty array"));
    assert!(message.contains("[]"));
}

#[tokio::test]
async fn test_malformed_status_reply_includes_raw_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 1).await;
    mount_status_endpoint(&server, "a@b.com", "T", r#"{"unexpected":true}"#, 1).await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.json()["message"].as_str().unwrap().to_string();
    assert!(message.ends_with(r#"Server response: {"unexpected":true}"#));
}

// =============================================================================
// Query Handling
// =============================================================================

#[tokio::test]
async fn test_repeated_email_param_uses_first_value() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, json!({"access_token": "T"}), 1).await;
    mount_status_endpoint(
        &server,
        "a@b.com",
        "T",
        r#"[{"status":1,"status_explain":"active"}]"#,
        1,
    )
    .await;
    let router = create_router(test_state(&server.uri()));

    let response = send(router, get("/api/v1/getStatus?email=a@b.com&email=c@d.com")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({"message": "", "status": 1, "status_explain": "active"})
    );
}

#[tokio::test]
async fn test_null_token_reply_continues_with_empty_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/emails/a@b.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"message":"invalid token"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    let state = test_state(&server.uri());
    let router = create_router(state.clone());

    let response = send(router, get("/api/v1/getStatus?email=a@b.com")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "invalid token");
    assert_eq!(state.tokens.current().await.as_deref(), Some(""));
}
