//! Tests for the control API client.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::Client;
use crate::error::ApiError;
use crate::protocol::SignedProtocol;
use crate::types::Config;

fn bearer_client(server: &MockServer) -> crate::BearerClient {
    Client::bearer(Config::new(server.uri()), "api key").unwrap()
}

#[tokio::test]
async fn test_publish_sends_command_and_returns_empty_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Authorization", "apikey api key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "method": "publish",
            "params": { "channel": "chat", "data": { "content": "hello" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let result = client
        .publish("chat", json!({"content": "hello"}))
        .await
        .unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_broadcast_sends_channel_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "method": "broadcast",
            "params": { "channels": ["chat", "news"], "data": { "content": "hello" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let result = client
        .broadcast(&["chat", "news"], json!({"content": "hello"}))
        .await
        .unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_unsubscribe_and_disconnect_params() {
    let server = MockServer::start().await;

    Mock::given(body_json(json!({
        "method": "unsubscribe",
        "params": { "channel": "chat", "user": "1" }
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
    .expect(1)
    .mount(&server)
    .await;

    Mock::given(body_json(json!({
        "method": "disconnect",
        "params": { "user": "1" }
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
    .expect(1)
    .mount(&server)
    .await;

    let client = bearer_client(&server);
    client.unsubscribe("chat", "1").await.unwrap();
    client.disconnect("1").await.unwrap();
}

#[tokio::test]
async fn test_channels_takes_no_params() {
    let server = MockServer::start().await;

    Mock::given(body_json(json!({ "method": "channels", "params": {} })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "channels": ["chat"] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let result = client.channels().await.unwrap();

    assert_eq!(result["result"]["channels"], json!(["chat"]));
}

#[tokio::test]
async fn test_presence_and_info() {
    let server = MockServer::start().await;

    Mock::given(body_json(json!({
        "method": "presence",
        "params": { "channel": "chat" }
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "result": { "presence": {} }
    })))
    .expect(1)
    .mount(&server)
    .await;

    Mock::given(body_json(json!({ "method": "info", "params": {} })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "nodes": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    client.presence("chat").await.unwrap();
    client.info().await.unwrap();
}

#[tokio::test]
async fn test_error_envelope_in_200_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 108, "message": "not available" }
        })))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let result = client.history("chat").await;

    match result.unwrap_err() {
        ApiError::Response { code, message } => {
            assert_eq!(code, 108);
            assert_eq!(message, "not available");
        }
        other => panic!("expected Response error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_202_maps_to_accepted_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let result = client.publish("chat", json!({})).await.unwrap();

    assert_eq!(result, json!(true));
}

#[tokio::test]
async fn test_401_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = bearer_client(&server);
    let result = client.publish("chat", json!({})).await;

    match result.unwrap_err() {
        ApiError::Authentication(message) => assert_eq!(message, "invalid api key"),
        other => panic!("expected Authentication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_404_error_includes_request_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = Config::new(format!("{}/missing", server.uri()));
    let client = Client::bearer(config, "api key").unwrap();
    let result = client.publish("chat", json!({})).await;

    match result.unwrap_err() {
        ApiError::Server(message) => {
            assert!(message.contains("404 Not found"));
            assert!(message.contains("/missing"));
        }
        other => panic!("expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_400_and_407_and_unknown_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_string("malformed"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/proxy"))
        .respond_with(ResponseTemplate::new(407))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/boom"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let at = |p: &str| Client::bearer(Config::new(format!("{}{}", server.uri(), p)), "k").unwrap();

    match at("/bad").publish("c", json!({})).await.unwrap_err() {
        ApiError::Server(m) => assert_eq!(m, "Bad request: malformed"),
        other => panic!("unexpected: {:?}", other),
    }
    match at("/proxy").publish("c", json!({})).await.unwrap_err() {
        ApiError::Server(m) => assert_eq!(m, "Proxy Authentication Required"),
        other => panic!("unexpected: {:?}", other),
    }
    match at("/boom").publish("c", json!({})).await.unwrap_err() {
        ApiError::Server(m) => assert_eq!(m, "Unknown error (status code 500): internal"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_wrapped_as_http_error() {
    // Nothing listens on this port.
    let client = Client::bearer(Config::new("http://127.0.0.1:9"), "api key").unwrap();
    let result = client.publish("chat", json!({})).await;

    assert!(matches!(result.unwrap_err(), ApiError::Http(_)));
}

#[tokio::test]
async fn test_signed_protocol_envelope_and_project_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/proj"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "method": "publish", "error": null, "body": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::signed(Config::new(server.uri()), "proj", "secret").unwrap();
    let result = client
        .publish("chat", json!({"content": "hello"}))
        .await
        .unwrap();

    // Legacy responses are arrays of per-command envelopes, passed through.
    assert_eq!(
        result,
        json!([{ "method": "publish", "error": null, "body": null }])
    );

    let requests = server.received_requests().await.unwrap();
    let envelope: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let data = envelope["data"].as_str().unwrap();
    assert_eq!(
        data,
        r#"{"method":"publish","params":{"channel":"chat","data":{"content":"hello"}}}"#
    );
    assert_eq!(
        envelope["sign"].as_str().unwrap(),
        "8ec06ee29b46bdda38d8621abdcc4098"
    );
}

#[test]
fn test_signed_protocol_legacy_connection_token() {
    let protocol = SignedProtocol::new("proj", "secret");
    assert_eq!(
        protocol.token_for("42", 1_700_000_000, ""),
        "4b0b52c16a52c6e37930f0d6d51d6669"
    );
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.endpoint, "http://localhost:8000/api");
    assert_eq!(config.connect_timeout.as_secs(), 5);
    assert_eq!(config.timeout.as_secs(), 5);
    assert_eq!(config.keep_alive_timeout.as_secs(), 30);
}

#[test]
fn test_config_from_parts() {
    let config = Config::from_parts("https", "relay.example.com", 443);
    assert_eq!(config.endpoint, "https://relay.example.com:443");
}
