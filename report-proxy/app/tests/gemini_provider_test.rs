use report_proxy::domain::ToolDirective;
use report_proxy::error::ProviderError;
use report_proxy::port::ContentProvider;
use report_proxy::provider::GeminiProvider;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

#[tokio::test]
async fn test_generate_sends_prompt_tools_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "secret-key"))
        .and(body_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }],
            "tools": [{ "googleSearch": {} }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hi" }] },
                "groundingMetadata": { "groundingChunks": [
                    { "web": { "uri": "https://zoo.example", "title": "Ichikawa Zoo" } }
                ] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&server.uri(), MODEL).expect("provider should build");
    let result = provider
        .generate("secret-key", "Hello", &[ToolDirective::web_search()])
        .await
        .expect("generation succeeds");

    assert_eq!(result.text, "Hi");
    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].uri, "https://zoo.example");
    assert_eq!(result.sources[0].title.as_deref(), Some("Ichikawa Zoo"));
}

#[tokio::test]
async fn test_generate_without_grounding_has_no_sources() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Plain" }] } }]
        })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&server.uri(), MODEL).unwrap();
    let result = provider.generate("k", "Hello", &[]).await.unwrap();

    assert_eq!(result.text, "Plain");
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn test_error_status_carries_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&server.uri(), MODEL).unwrap();
    let err = provider.generate("k", "Hello", &[]).await.unwrap_err();

    match err {
        ProviderError::Status { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Resource has been exhausted (e.g. check quota).");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&server.uri(), MODEL).unwrap();
    let err = provider.generate("k", "Hello", &[]).await.unwrap_err();

    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let provider = GeminiProvider::new(&uri, MODEL).unwrap();
    let err = provider.generate("k", "Hello", &[]).await.unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
