use std::time::Duration;

use pretty_assertions::assert_eq;
use prompttune_engine::{
    ComplexityLevel, GeminiClient, ModelClient, ModelSettings, OptimizeErrorKind, OptimizeRequest,
    PromptStyle,
};
use serde_json::json;
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn settings(base_url: &str) -> ModelSettings {
    ModelSettings {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
        ..ModelSettings::default()
    }
}

fn sample_request() -> OptimizeRequest {
    OptimizeRequest {
        input_prompt: "Kofe haqida blog post yoz".to_string(),
        style: PromptStyle::Professional,
        complexity: ComplexityLevel::Moderate,
    }
}

fn reply_text() -> String {
    json!({
        "originalAnalysis": {
            "grammarIssues": ["Yo'q"],
            "clarityScore": 72,
            "intentDetected": "Blog post so'rovi"
        },
        "variants": [
            {
                "title": "Yaxshilangan",
                "content": "birinchi variant",
                "reasoning": "toza va tuzatilgan",
                "tags": ["clean"]
            },
            {
                "title": "Kengaytirilgan",
                "content": "ikkinchi variant",
                "reasoning": "kontekst qo'shadi",
                "tags": ["context"]
            },
            {
                "title": "Tuzilgan",
                "content": "uchinchi variant",
                "reasoning": "freymvork ishlatadi",
                "tags": ["co-star"]
            }
        ]
    })
    .to_string()
}

fn envelope(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn optimize_parses_a_schema_conformant_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&reply_text())))
        .mount(&server)
        .await;

    let client = GeminiClient::new(settings(&server.uri()));
    let payload = client.optimize(&sample_request()).await.expect("optimize ok");

    assert_eq!(payload.original_analysis.clarity_score, 72.0);
    assert_eq!(payload.original_analysis.intent_detected, "Blog post so'rovi");
    assert_eq!(payload.original_analysis.grammar_issues, vec!["Yo'q"]);
    assert_eq!(payload.variants.len(), 3);
    assert_eq!(payload.variants[0].title, "Yaxshilangan");
    assert_eq!(payload.variants[2].tags, vec!["co-star"]);
}

#[tokio::test]
async fn optimize_fails_remote_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GeminiClient::new(settings(&server.uri()));
    let err = client.optimize(&sample_request()).await.unwrap_err();

    assert_eq!(err.kind, OptimizeErrorKind::Remote);
}

#[tokio::test]
async fn optimize_fails_remote_when_reply_has_no_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(settings(&server.uri()));
    let err = client.optimize(&sample_request()).await.unwrap_err();

    assert_eq!(err.kind, OptimizeErrorKind::Remote);
}

#[tokio::test]
async fn optimize_fails_malformed_when_text_is_not_the_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("bu JSON emas, oddiy matn")),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new(settings(&server.uri()));
    let err = client.optimize(&sample_request()).await.unwrap_err();

    assert_eq!(err.kind, OptimizeErrorKind::MalformedResponse);
}

#[tokio::test]
async fn optimize_fails_malformed_when_a_required_field_is_missing() {
    let server = MockServer::start().await;
    // variants present, originalAnalysis missing its clarityScore.
    let text = json!({
        "originalAnalysis": { "grammarIssues": [], "intentDetected": "x" },
        "variants": []
    })
    .to_string();
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&text)))
        .mount(&server)
        .await;

    let client = GeminiClient::new(settings(&server.uri()));
    let err = client.optimize(&sample_request()).await.unwrap_err();

    assert_eq!(err.kind, OptimizeErrorKind::MalformedResponse);
}

#[tokio::test]
async fn optimize_tolerates_a_short_variant_list() {
    let server = MockServer::start().await;
    let text = json!({
        "originalAnalysis": {
            "grammarIssues": ["Yo'q"],
            "clarityScore": 50,
            "intentDetected": "x"
        },
        "variants": [
            { "title": "t", "content": "c", "reasoning": "r", "tags": [] }
        ]
    })
    .to_string();
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&text)))
        .mount(&server)
        .await;

    let client = GeminiClient::new(settings(&server.uri()));
    let payload = client.optimize(&sample_request()).await.expect("optimize ok");

    assert_eq!(payload.variants.len(), 1);
}

#[tokio::test]
async fn missing_api_key_fails_without_touching_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut settings = settings(&server.uri());
    settings.api_key = None;
    let client = GeminiClient::new(settings);
    let err = client.optimize(&sample_request()).await.unwrap_err();

    assert_eq!(err.kind, OptimizeErrorKind::Configuration);
}
