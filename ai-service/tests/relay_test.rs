//! Integration tests for the POST /ai relay endpoint.

mod common;

use ai_service::services::providers::mock::MockTextProvider;
use common::{CapturingProvider, TestApp};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn missing_prompt_is_rejected_without_calling_provider() {
    let (provider, calls) = CapturingProvider::new("unused");
    let app = TestApp::spawn(Arc::new(provider)).await;

    for body in [json!({}), json!({ "prompt": null }), json!({ "prompt": "" })] {
        let response = app.post_ai(body).await;
        assert_eq!(response.status().as_u16(), 400);

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body, json!({ "error": "Prompt required" }));
    }

    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn valid_prompt_returns_generated_text_verbatim() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::new(true))).await;

    let response = app.post_ai(json!({ "prompt": "allocate 16 bytes" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({
            "text": "Mock response for: You are a memory allocator. Request: allocate 16 bytes"
        })
    );
}

#[tokio::test]
async fn prompt_is_substituted_into_template_exactly_once() {
    let (provider, calls) = CapturingProvider::new("ok");
    let app = TestApp::spawn(Arc::new(provider)).await;

    let response = app.post_ai(json!({ "prompt": "allocate 16 bytes" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        "You are a memory allocator. Request: allocate 16 bytes"
    );
}

#[tokio::test]
async fn provider_failure_surfaces_as_500_with_raw_message() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::new(false))).await;

    let response = app.post_ai(json!({ "prompt": "allocate 16 bytes" })).await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({ "error": "Provider not configured: Mock text provider not enabled" })
    );
}

#[tokio::test]
async fn repeated_prompts_make_independent_provider_calls() {
    let (provider, calls) = CapturingProvider::new("ok");
    let app = TestApp::spawn(Arc::new(provider)).await;

    for _ in 0..2 {
        let response = app.post_ai(json!({ "prompt": "allocate 16 bytes" })).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    assert_eq!(calls.lock().unwrap().len(), 2);
}
