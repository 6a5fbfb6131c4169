//! Gateway tests driving the real router with stub collaborators.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::embedding::{EmbedderConfig, SentenceEmbedder};
use crate::gateway::{HandlerState, create_router_with_state};
use crate::regressor::ScoreRegressor;
use crate::scoring::Evaluator;
use crate::tagger::RuleTagger;

fn test_router() -> Router {
    let evaluator = Evaluator::new(
        Arc::new(SentenceEmbedder::load(EmbedderConfig::stub()).unwrap()),
        RuleTagger::new(),
        Arc::new(ScoreRegressor::stub()),
    );
    create_router_with_state(HandlerState::new(Arc::new(evaluator)))
}

async fn post_evaluate(router: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn ready_reports_stub_collaborators() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["components"]["embedder_mode"], "stub");
    assert_eq!(json["components"]["regressor_mode"], "stub");
}

#[tokio::test]
async fn batch_request_returns_wrapped_ordered_results() {
    let (status, json) = post_evaluate(
        test_router(),
        serde_json::json!({
            "answer": "a linear model",
            "responses": ["First answer here.", "Second answer here."]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["response"], "First answer here.");
    assert_eq!(results[1]["response"], "Second answer here.");
}

#[tokio::test]
async fn single_request_returns_bare_object() {
    let (status, json) = post_evaluate(
        test_router(),
        serde_json::json!({
            "answer": "a linear model",
            "response": "Foo"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("results").is_none(), "single mode must not wrap");

    let object = json.as_object().expect("bare result object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "grammar_score",
            "keyword_score",
            "predicted_score",
            "response",
            "semantic_score"
        ]
    );
    assert_eq!(json["response"], "Foo");
}

#[tokio::test]
async fn empty_body_fields_default_to_empty_strings() {
    let (status, json) = post_evaluate(test_router(), serde_json::json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], "");
    assert_eq!(json["semantic_score"], 0.0);
    assert_eq!(json["keyword_score"], 0.0);
    assert_eq!(json["grammar_score"], 0.0);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
