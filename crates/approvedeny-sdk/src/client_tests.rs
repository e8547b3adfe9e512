//! Tests for the Approvedeny API client.

use super::*;
use crate::types::CreateCheckRequestPayload;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_API_KEY: &str = "test_api_key";

async fn test_client(server: &MockServer) -> Client {
    Client::with_config(ClientConfig::new(TEST_API_KEY).with_base_url(server.uri()))
        .expect("client should build")
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_client_with_valid_api_key() {
    let client = Client::new(TEST_API_KEY).unwrap();

    assert_eq!(client.api_key(), TEST_API_KEY);
    assert_eq!(client.base_url(), "https://api.approvedeny.com");
}

#[test]
fn test_new_client_with_empty_api_key() {
    let result = Client::new("");

    match result {
        Err(Error::Configuration { message }) => {
            assert_eq!(message, "API key required");
        }
        Err(other) => panic!("Expected configuration error, got: {:?}", other),
        Ok(_) => panic!("Expected configuration error, got a client"),
    }
}

#[test]
fn test_config_builder() {
    let config = ClientConfig::new(TEST_API_KEY)
        .with_base_url("http://localhost:8080")
        .with_timeout(Duration::from_secs(5))
        .with_user_agent("custom-agent/1.0");

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.user_agent, "custom-agent/1.0");
    assert!(config.validate().is_ok());
}

#[test]
fn test_debug_output_redacts_api_key() {
    let client = Client::new("super_secret_key").unwrap();
    let debug = format!("{:?}", client);

    assert!(!debug.contains("super_secret_key"));
    assert!(debug.contains("<REDACTED>"));
}

// ============================================================================
// GetCheckRequest
// ============================================================================

#[tokio::test]
async fn test_get_check_request_success() {
    let mock_server = MockServer::start().await;
    let check_request_id = "test_check_request_id";

    let response_body = json!({
        "status": "success",
        "message": "Check request retrieved",
        "data": { "id": check_request_id }
    });

    Mock::given(method("GET"))
        .and(path(format!("/v1/requests/{}", check_request_id)))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY)))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let response = client.get_check_request(check_request_id).await.unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.message, "Check request retrieved");
    assert_eq!(response.data, json!({ "id": check_request_id }));
}

#[tokio::test]
async fn test_get_check_request_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/requests/invalid_check_request_id"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Check request not found" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let error = client
        .get_check_request("invalid_check_request_id")
        .await
        .unwrap_err();

    // The server's message is surfaced verbatim: no wrapping, no status code.
    assert!(matches!(error, Error::Remote { .. }));
    assert_eq!(error.to_string(), "Check request not found");
}

// ============================================================================
// CreateCheckRequest
// ============================================================================

#[tokio::test]
async fn test_create_check_request_success() {
    let mock_server = MockServer::start().await;
    let check_id = "test_check_id";

    let payload = CreateCheckRequestPayload {
        description: "A test check request".to_string(),
        metadata: HashMap::from([("foo".to_string(), json!("bar"))]),
    };

    let response_body = json!({
        "status": "success",
        "message": "Check request created",
        "data": { "id": "test_check_request_id" }
    });

    Mock::given(method("POST"))
        .and(path(format!("/v1/checks/{}", check_id)))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY)))
        .and(body_json(json!({
            "description": "A test check request",
            "metadata": { "foo": "bar" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let response = client.create_check_request(check_id, &payload).await.unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.data, json!({ "id": "test_check_request_id" }));
}

#[tokio::test]
async fn test_create_check_request_rejected() {
    let mock_server = MockServer::start().await;

    let payload = CreateCheckRequestPayload {
        description: "A test check request".to_string(),
        metadata: HashMap::new(),
    };

    Mock::given(method("POST"))
        .and(path("/v1/checks/unknown_check_id"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "status": "error", "message": "Check not found" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let error = client
        .create_check_request("unknown_check_id", &payload)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Check not found");
}

// ============================================================================
// GetCheckRequestResponse
// ============================================================================

#[tokio::test]
async fn test_get_check_request_response_success() {
    let mock_server = MockServer::start().await;
    let check_request_id = "test_check_request_id";

    let response_body = json!({
        "status": "success",
        "message": "Check request response retrieved",
        "data": {
            "id": "res_789",
            "status": "approved",
            "metadata": {},
            "checkRequestId": check_request_id,
            "createdAt": "2024-01-15T10:05:00Z",
            "updatedAt": "2024-01-15T10:05:00Z"
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/v1/requests/{}/response", check_request_id)))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let response = client
        .get_check_request_response(check_request_id)
        .await
        .unwrap();

    let check_response: crate::types::CheckRequestResponse = response.data_as().unwrap();
    assert_eq!(check_response.status, "approved");
    assert_eq!(check_response.check_request_id, check_request_id);
}

// ============================================================================
// Pipeline failure modes
// ============================================================================

#[tokio::test]
async fn test_success_response_with_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/requests/some_id"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let error = client.get_check_request("some_id").await.unwrap_err();

    assert!(matches!(error, Error::Decoding(_)));
    assert!(!error.is_transient());
}

#[tokio::test]
async fn test_error_response_with_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/requests/some_id"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let error = client.get_check_request("some_id").await.unwrap_err();

    // A non-200 body that isn't the error shape is a decoding failure,
    // not a remote error.
    assert!(matches!(error, Error::Decoding(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Nothing listens on the discard port.
    let config = ClientConfig::new(TEST_API_KEY)
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(Duration::from_secs(1));
    let client = Client::with_config(config).unwrap();

    let error = client.get_check_request("some_id").await.unwrap_err();

    assert!(matches!(error, Error::Transport(_)));
    assert!(error.is_transient());
}
