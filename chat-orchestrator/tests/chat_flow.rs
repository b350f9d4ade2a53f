//! End-to-end orchestration tests against mock upstream services.
//!
//! Both collaborators are wiremock servers: the completion mock asserts
//! the exact prompts it receives, the retrieval mock asserts whether it
//! was consulted at all.

use chat_orchestrator::{
    ChatError, ChatOrchestrator, CompletionConfig, CompletionError, DocumentShape,
    OrchestratorConfig, RetrievalConfig, prompt,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn orchestrator(completion_uri: String, retrieval_uri: Option<String>) -> ChatOrchestrator {
    ChatOrchestrator::new(OrchestratorConfig {
        completion: CompletionConfig {
            endpoint: completion_uri,
            api_key: "test-key".into(),
            model: "test-model".into(),
            timeout_secs: Some(5),
        },
        retrieval: retrieval_uri.map(|endpoint| RetrievalConfig {
            endpoint,
            token: "deploy-token".into(),
            deployment_id: "dep-1".into(),
            timeout_secs: Some(5),
        }),
    })
    .unwrap()
}

/// Mounts a completion mock asserting the exact (system, user) pair.
async fn mount_completion(server: &MockServer, system: &str, user: &str, answer: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": answer } }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn auto_without_credentials_degrades_to_generic_prompt() {
    let completion = MockServer::start().await;
    mount_completion(&completion, prompt::DEFAULT_SYSTEM, "plain question", "hi").await;

    let orch = orchestrator(completion.uri(), None);
    let out = orch.answer("plain question").await.unwrap();

    assert_eq!(out.answer, "hi");
    assert!(out.context.is_empty());
    assert!(!out.search_mode);
}

#[tokio::test]
async fn search_with_failing_retrieval_still_answers() {
    let retrieval = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/lookup_matches"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&retrieval)
        .await;

    let completion = MockServer::start().await;
    mount_completion(&completion, prompt::DEFAULT_SYSTEM, "anything", "still fine").await;

    let orch = orchestrator(completion.uri(), Some(retrieval.uri()));
    let out = orch.answer("/search anything").await.unwrap();

    assert_eq!(out.answer, "still fine");
    assert!(out.context.is_empty());
    assert!(!out.search_mode);
}

#[tokio::test]
async fn invalid_completion_payload_is_fatal() {
    let completion = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&completion)
        .await;

    let orch = orchestrator(completion.uri(), None);
    let err = orch.answer("hello").await.unwrap_err();
    assert!(matches!(
        err,
        ChatError::Completion(CompletionError::InvalidResponseFormat(_))
    ));
}

#[tokio::test]
async fn direct_intent_never_consults_retrieval() {
    let retrieval = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/lookup_matches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": ["x"] })))
        .expect(0)
        .mount(&retrieval)
        .await;

    let completion = MockServer::start().await;
    mount_completion(&completion, prompt::DEFAULT_SYSTEM, "What is 2+2?", "4").await;

    let orch = orchestrator(completion.uri(), Some(retrieval.uri()));
    let out = orch.answer("/ask What is 2+2?").await.unwrap();

    assert_eq!(out.answer, "4");
    assert!(!out.search_mode);
}

#[tokio::test]
async fn search_injects_context_and_sets_search_mode() {
    let retrieval = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/lookup_matches"))
        .and(body_partial_json(json!({
            "deployment_id": "dep-1",
            "data": "capital of France"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [{ "text": "Paris is the capital." }]
        })))
        .expect(1)
        .mount(&retrieval)
        .await;

    let completion = MockServer::start().await;
    mount_completion(
        &completion,
        prompt::CONTEXT_SYSTEM,
        "Context:\nParis is the capital.\n\nQuestion: capital of France",
        "Paris.",
    )
    .await;

    let orch = orchestrator(completion.uri(), Some(retrieval.uri()));
    let out = orch.answer("/search capital of France").await.unwrap();

    assert_eq!(out.answer, "Paris.");
    assert!(out.search_mode);
    assert_eq!(out.context.len(), 1);
    assert_eq!(out.context[0].text, "Paris is the capital.");
    assert_eq!(out.context[0].shape, DocumentShape::FieldText);
}

#[tokio::test]
async fn consulted_but_empty_retrieval_is_not_search_mode() {
    let retrieval = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/lookup_matches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .expect(1)
        .mount(&retrieval)
        .await;

    let completion = MockServer::start().await;
    mount_completion(&completion, prompt::DEFAULT_SYSTEM, "anything new?", "no").await;

    let orch = orchestrator(completion.uri(), Some(retrieval.uri()));
    let out = orch.answer("anything new?").await.unwrap();

    assert!(!out.search_mode);
    assert!(out.context.is_empty());
}

#[tokio::test]
async fn identical_requests_yield_identical_answers() {
    let retrieval = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/lookup_matches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [{ "text": "stable snippet" }]
        })))
        .expect(2)
        .mount(&retrieval)
        .await;

    let completion = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "same answer" } }]
        })))
        .expect(2)
        .mount(&completion)
        .await;

    let orch = orchestrator(completion.uri(), Some(retrieval.uri()));
    let first = orch.answer("/search q").await.unwrap();
    let second = orch.answer("/search q").await.unwrap();

    assert_eq!(first.answer, second.answer);
    assert_eq!(first.search_mode, second.search_mode);
    assert_eq!(first.context.len(), second.context.len());
    assert_eq!(first.context[0].text, second.context[0].text);
}
