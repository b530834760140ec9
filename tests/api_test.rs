mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use quizfunnel::names;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");
    let resp = common::app().oneshot(req).await.expect("router should respond");
    let status = resp.status();
    let body = common::body_string(resp).await;
    (status, serde_json::from_str(&body).expect("response should be json"))
}

#[tokio::test]
async fn intake_requires_all_fields() {
    let (status, body) = post_json(
        names::API_INTAKE_URL,
        json!({ "email": "ada@example.com", "name": "Ada" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email, name, and answer are required");
}

#[tokio::test]
async fn intake_without_webhook_is_a_configuration_error() {
    let (status, body) = post_json(
        names::API_INTAKE_URL,
        json!({ "email": "ada@example.com", "name": "Ada", "answer": "beginner" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn subscribe_validates_before_calling_out() {
    let (status, body) = post_json(names::API_SUBSCRIBE_URL, json!({ "email": "ada@example.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email and first name are required");

    let (status, body) = post_json(
        names::API_SUBSCRIBE_URL,
        json!({ "email": "ada@example", "firstName": "Ada", "path": "A", "result": "r" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
}

#[tokio::test]
async fn subscribe_without_credentials_is_a_configuration_error() {
    let (status, body) = post_json(
        names::API_SUBSCRIBE_URL,
        json!({
            "email": "ada@example.com",
            "firstName": "Ada",
            "path": "A",
            "result": "You have the drive, you need a clear system",
            "answers": { "Q1A": "just_starting" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn api_routes_skip_the_htmx_check() {
    // plain JSON callers never send HX-Request
    let (status, _) = post_json(names::API_INTAKE_URL, json!({})).await;
    assert_ne!(status, StatusCode::FORBIDDEN);
}
