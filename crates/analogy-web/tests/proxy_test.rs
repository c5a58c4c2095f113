//! End-to-end tests for the generation proxy router.

use analogy_core::prompt::{CompletionPrompt, SamplingParams};
use analogy_core::provider::{CompletionProvider, OpenAiClient};
use analogy_core::{AnalogyError, AnalogyResult};
use analogy_web::{create_router, state::AppState, ALLOWED_HEADERS};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

const GUMP: &str = "Forrest Gump is like SpaceX because both are unlikely underdog stories that somehow reach escape velocity.";

/// Provider that records prompts and replies with fixed text.
#[derive(Default)]
struct RecordingProvider {
    prompts: Mutex<Vec<CompletionPrompt>>,
    fail_with: Option<String>,
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(&self, prompt: &CompletionPrompt) -> AnalogyResult<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        match &self.fail_with {
            Some(message) => Err(AnalogyError::upstream(Some(message.clone()))),
            None => Ok(GUMP.to_string()),
        }
    }
}

fn state_with(provider: Option<Arc<dyn CompletionProvider>>) -> AppState {
    AppState::new(provider, SamplingParams::default())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_cors(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
}

#[tokio::test]
async fn test_generates_analogy() {
    let provider = Arc::new(RecordingProvider::default());
    let app = create_router(state_with(Some(provider.clone())));

    let response = app
        .oneshot(post_json(
            "/generate-analogy",
            r#"{"thing1":"Forrest Gump","thing2":"SpaceX"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(body_json(response).await, serde_json::json!({ "analogy": GUMP }));

    let prompts = provider.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].user.contains("\"Forrest Gump\" and \"SpaceX\""));
}

#[tokio::test]
async fn test_hosted_function_path() {
    let app = create_router(state_with(Some(Arc::new(RecordingProvider::default()))));

    let response = app
        .oneshot(post_json(
            "/functions/v1/generate-analogy",
            r#"{"thing1":"cats","thing2":"routers"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_credential_wins_over_validation() {
    for body in [r#"{"thing1":"a","thing2":"b"}"#, r#"{}"#, "not json"] {
        let app = create_router(state_with(None));
        let response = app.oneshot(post_json("/generate-analogy", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "OpenAI API key is not configured" })
        );
    }
}

#[tokio::test]
async fn test_missing_field() {
    let provider = Arc::new(RecordingProvider::default());
    let app = create_router(state_with(Some(provider.clone())));

    let response = app
        .oneshot(post_json("/generate-analogy", r#"{"thing1":"Forrest Gump"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Both thing1 and thing2 are required" })
    );
    assert!(provider.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let app = create_router(state_with(Some(Arc::new(RecordingProvider::default()))));

    let response = app
        .oneshot(post_json("/generate-analogy", "{thing1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_oversized_body_is_json_error() {
    let provider = Arc::new(RecordingProvider::default());
    let app = create_router(state_with(Some(provider.clone())));
    let body = format!(
        r#"{{"thing1":"{}","thing2":"SpaceX"}}"#,
        "a".repeat(3 * 1024 * 1024)
    );

    let response = app
        .oneshot(post_json("/generate-analogy", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(provider.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_body_without_credential() {
    let app = create_router(state_with(None));
    let body = "a".repeat(3 * 1024 * 1024);

    let response = app
        .oneshot(post_json("/generate-analogy", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "OpenAI API key is not configured" })
    );
}

#[tokio::test]
async fn test_unknown_theme_still_serves_page() {
    for uri in ["/?theme=neon&analogy=A%20is%20like%20B", "/?theme="] {
        let app = create_router(state_with(None));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("theme-minimal"));
    }
}

#[tokio::test]
async fn test_upstream_failure_carries_message() {
    let provider = Arc::new(RecordingProvider {
        fail_with: Some("Rate limit reached".to_string()),
        ..Default::default()
    });
    let app = create_router(state_with(Some(provider)));

    let response = app
        .oneshot(post_json(
            "/generate-analogy",
            r#"{"thing1":"Forrest Gump","thing2":"SpaceX"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Rate limit reached"));
}

#[tokio::test]
async fn test_openai_error_payload_reaches_client() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429).json_body(serde_json::json!({
                "error": { "message": "You exceeded your current quota", "type": "insufficient_quota" }
            }));
        })
        .await;

    let client = OpenAiClient::new(&server.base_url(), "gpt-4o-mini", "sk-test", None).unwrap();
    let app = create_router(state_with(Some(Arc::new(client))));

    let response = app
        .oneshot(post_json(
            "/generate-analogy",
            r#"{"thing1":"Forrest Gump","thing2":"SpaceX"}"#,
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "OpenAI API error: You exceeded your current quota" })
    );
}

#[tokio::test]
async fn test_bare_options_request() {
    let app = create_router(state_with(None));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/generate-analogy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_browser_preflight() {
    let app = create_router(state_with(None));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/generate-analogy")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type, apikey")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_other_methods_rejected() {
    let app = create_router(state_with(Some(Arc::new(RecordingProvider::default()))));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/generate-analogy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&response);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Method not allowed" })
    );
}

#[tokio::test]
async fn test_page_and_health() {
    let app = create_router(state_with(None));
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/?theme=dark").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("theme-dark"));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
