use std::time::Duration;

use completion_gateway::{
    CompletionProvider, HttpClientConfig, LlmError, OpenAiClient, OpenAiConfig, OpenRouterClient,
    OpenRouterConfig,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7 }
    })
}

fn openai_client_for(server: &MockServer, timeout: Option<Duration>) -> OpenAiClient {
    let mut http_config = HttpClientConfig::default();
    if let Some(timeout) = timeout {
        http_config = http_config.with_timeout(timeout);
    }

    let config = OpenAiConfig::new("sk-test".to_string())
        .with_base_url(format!("{}/v1", server.uri()))
        .with_model("gpt-4o-mini".to_string())
        .with_http_config(http_config);

    OpenAiClient::new(config).expect("client")
}

async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("mock server should record requests")
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("json body"))
        .collect()
}

#[tokio::test]
async fn openai_sends_prompt_as_user_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let client = openai_client_for(&server, None);
    let completion = client
        .complete(Some("Hello".to_string()))
        .await
        .expect("completion");

    assert_eq!(completion, "Hi there");

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["model"], "gpt-4o-mini");
    assert_eq!(
        bodies[0]["messages"],
        json!([{ "role": "user", "content": "Hello" }])
    );
}

#[tokio::test]
async fn absent_prompt_is_sent_as_null_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("?")))
        .mount(&server)
        .await;

    let client = openai_client_for(&server, None);
    client.complete(None).await.expect("completion");

    let bodies = request_bodies(&server).await;
    assert!(bodies[0]["messages"][0]["content"].is_null());
}

#[tokio::test]
async fn server_error_is_reported_without_retrying() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = openai_client_for(&server, None);
    let err = client
        .complete(Some("Hello".to_string()))
        .await
        .unwrap_err();

    match err {
        LlmError::Api {
            status_code,
            ref message,
            ..
        } => {
            assert_eq!(status_code, Some(503));
            assert!(message.contains("overloaded"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }

    assert_eq!(request_bodies(&server).await.len(), 1);
}

#[tokio::test]
async fn auth_failure_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let client = openai_client_for(&server, None);
    let err = client
        .complete(Some("Hello".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Incorrect API key provided"));
}

#[tokio::test]
async fn malformed_response_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = openai_client_for(&server, None);
    let err = client
        .complete(Some("Hello".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Parse { .. }));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("too late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = openai_client_for(&server, Some(Duration::from_millis(100)));
    let err = client
        .complete(Some("Hello".to_string()))
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn unreachable_provider_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        OpenAiConfig::new("sk-test".to_string()).with_base_url(format!("http://{addr}/v1"));
    let client = OpenAiClient::new(config).expect("client");

    let err = client
        .complete(Some("Hello".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Network { .. }));
}

#[tokio::test]
async fn openrouter_adds_attribution_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("Authorization", "Bearer or-key"))
        .and(header("HTTP-Referer", "https://example.com"))
        .and(header("X-Title", "Gateway"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("routed")))
        .expect(1)
        .mount(&server)
        .await;

    let config = OpenRouterConfig::new("or-key".to_string())
        .with_base_url(format!("{}/api/v1/", server.uri()))
        .with_http_referer("https://example.com".to_string())
        .with_x_title("Gateway".to_string());
    let client = OpenRouterClient::new(config).expect("client");

    let completion = client
        .complete(Some("Hello".to_string()))
        .await
        .expect("completion");
    assert_eq!(completion, "routed");

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies[0]["model"], "openai/gpt-4o-mini");
}
