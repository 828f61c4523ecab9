//! Gemini analyzer integration tests against a mock HTTP server

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fieldvolt::application::ports::{AnalysisError, Analyzer};
use fieldvolt::domain::diagnosis::{AnalysisPrompt, PromptTemplate};
use fieldvolt::infrastructure::GeminiAnalyzer;

const MODEL_PATH: &str = "/gemini-3-flash-preview:generateContent";

fn prompt(transcript: &str) -> AnalysisPrompt {
    AnalysisPrompt::build(&PromptTemplate::default(), transcript)
}

fn candidate_response(payload: serde_json::Value) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": payload.to_string() }]
            }
        }]
    })
}

#[tokio::test]
async fn analyze_parses_schema_valid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(json!({
            "summary": "Overloaded circuit likely",
            "causes": ["Overload", "Short circuit"],
            "steps": ["Test voltage", "Inspect breaker"],
            "estimatedCost": "$150-$250"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    let analysis = analyzer
        .analyze(&prompt("Main breaker tripping, 240V present"))
        .await
        .unwrap();

    assert_eq!(analysis.summary, "Overloaded circuit likely");
    assert_eq!(analysis.causes, vec!["Overload", "Short circuit"]);
    assert_eq!(analysis.steps.len(), 2);
    assert_eq!(analysis.estimated_cost.as_deref(), Some("$150-$250"));
}

#[tokio::test]
async fn request_carries_prompt_and_structured_output_config() {
    let server = MockServer::start().await;

    // The request must ask for JSON output and carry the regulatory framing
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(json!({
            "summary": "s", "causes": ["c"], "steps": ["t"]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    analyzer.analyze(&prompt("panel hum")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("master electrician"));
    assert!(text.contains("Problem description: panel hum"));
}

#[tokio::test]
async fn schema_violating_response_is_an_error_not_a_partial_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(json!({
            "summary": "Something is wrong",
            "causes": [],
            "steps": ["Check it"]
        }))))
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    let err = analyzer.analyze(&prompt("outlet dead")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::SchemaViolation("causes")));
}

#[tokio::test]
async fn non_json_candidate_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "probably the breaker" }] }
            }]
        })))
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    let err = analyzer.analyze(&prompt("outlet dead")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::ParseError(_)));
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("bad-key", server.uri());
    let err = analyzer.analyze(&prompt("x")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::InvalidApiKey));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    let err = analyzer.analyze(&prompt("x")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::RateLimited));
}

#[tokio::test]
async fn api_error_in_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "message": "model is overloaded" }
        })))
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    let err = analyzer.analyze(&prompt("x")).await.unwrap_err();

    match err {
        AnalysisError::ApiError(message) => assert!(message.contains("overloaded")),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_candidates_are_an_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let analyzer = GeminiAnalyzer::with_base_url("test-key", server.uri());
    let err = analyzer.analyze(&prompt("x")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::EmptyResponse));
}
