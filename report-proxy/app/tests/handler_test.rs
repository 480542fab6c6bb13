use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use report_proxy::app::router::{api_router, main_router};
use report_proxy::domain::{GenerationResult, Source, ToolDirective};
use report_proxy::port::ContentProvider;
use report_proxy::service::ReportService;
use report_proxy::test_support::StubProvider;
use serde_json::{Value, json};
use std::sync::Arc;

fn service_with(stub: &Arc<StubProvider>, api_key: Option<&str>) -> ReportService {
    let provider: Arc<dyn ContentProvider> = stub.clone();
    ReportService::new(provider, api_key.map(str::to_string))
}

fn create_test_server(stub: &Arc<StubProvider>, api_key: Option<&str>) -> TestServer {
    TestServer::new(api_router(service_with(stub, api_key))).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_returns_okay() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, None);

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "okay");
    assert!(body["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[tokio::test]
async fn test_generate_report_relays_provider_result() {
    let stub = Arc::new(StubProvider::replying(GenerationResult {
        text: "Hi".to_string(),
        sources: vec![],
    }));
    let server = create_test_server(&stub, Some("test-key"));

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "text": "Hi", "sources": [], "success": true }));
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn test_generate_report_keeps_empty_text_field() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "anything" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["text"], "");
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn test_generate_report_passes_sources_in_order() {
    let stub = Arc::new(StubProvider::replying(GenerationResult {
        text: "report".to_string(),
        sources: vec![
            Source {
                uri: "https://zoo.example/news".to_string(),
                title: Some("Zoo news".to_string()),
            },
            Source {
                uri: "https://zoo.example/news".to_string(),
                title: Some("Zoo news".to_string()),
            },
            Source {
                uri: "https://blog.example".to_string(),
                title: None,
            },
        ],
    }));
    let server = create_test_server(&stub, Some("test-key"));

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["sources"],
        json!([
            { "uri": "https://zoo.example/news", "title": "Zoo news" },
            { "uri": "https://zoo.example/news", "title": "Zoo news" },
            { "uri": "https://blog.example" }
        ])
    );
}

#[tokio::test]
async fn test_missing_prompt_is_rejected_without_provider_call() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    let response = server.post("/api/generate-report").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prompt is required");
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_empty_prompt_is_rejected_without_provider_call() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_non_json_body_is_an_invalid_request() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    let response = server.post("/api/generate-report").text("prompt=Hello").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prompt is required");
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_missing_credential_is_a_configuration_error() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, None);

    for prompt in ["Hello", "Another prompt"] {
        let response = server
            .post("/api/generate-report")
            .json(&json!({ "prompt": prompt }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "API Key not configured on server");
    }
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_missing_prompt_wins_over_missing_credential() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, None);

    let response = server.post("/api/generate-report").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_provider_failure_is_an_upstream_error() {
    let stub = Arc::new(StubProvider::new());
    stub.set_should_fail(true);
    let server = create_test_server(&stub, Some("test-key"));

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_json(&json!({
        "error": "Failed to generate report",
        "message": "Stub quota exceeded"
    }));
    // no retry
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn test_web_search_is_the_default_tool() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "Hello" }))
        .await
        .assert_status_ok();

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].api_key, "test-key");
    assert_eq!(calls[0].prompt, "Hello");
    assert_eq!(calls[0].tools, vec![ToolDirective::web_search()]);
}

#[tokio::test]
async fn test_caller_tools_are_forwarded_unchanged() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "Hello", "tools": [{ "urlContext": {} }] }))
        .await
        .assert_status_ok();

    server
        .post("/api/generate-report")
        .json(&json!({ "prompt": "Hello", "tools": [] }))
        .await
        .assert_status_ok();

    let calls = stub.calls();
    assert_eq!(calls[0].tools, vec![ToolDirective(json!({ "urlContext": {} }))]);
    assert!(calls[1].tools.is_empty());
}

#[tokio::test]
async fn test_unknown_api_route_returns_json_404() {
    let stub = Arc::new(StubProvider::new());
    let server = create_test_server(&stub, Some("test-key"));

    let response = server.get("/api/does-not-exist").await;
    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));

    let response = server.get("/api/generate-report").await;
    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_front_end_routes_fall_back_to_index() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), "<html>punch</html>").unwrap();
    std::fs::write(dist.path().join("app.js"), "console.log(1)").unwrap();

    let stub = Arc::new(StubProvider::new());
    let app = main_router(service_with(&stub, Some("test-key")), dist.path());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/app.js").await;
    response.assert_status_ok();
    response.assert_text("console.log(1)");

    let response = server.get("/daily-report").await;
    response.assert_status_ok();
    response.assert_text("<html>punch</html>");

    let response = server.get("/api/nope").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_cors_headers_are_present() {
    let dist = tempfile::tempdir().unwrap();
    let stub = Arc::new(StubProvider::new());
    let app = main_router(service_with(&stub, None), dist.path());
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://punch.example"),
        )
        .await;

    response.assert_status_ok();
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|value| value.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
}
