//! tests/hello.rs
//! Verifies the contract of GET /api/hello: status 200, a constant JSON
//! body, and identical output on repeated calls.

mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_200_with_static_greeting() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type: &str = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/json"));

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, json!({ "message": "Hello from FastAPI backend232" }));
}

#[tokio::test]
async fn ignores_query_string_and_headers() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/hello?foo=bar&baz=42", base_url))
        .header("X-Request-Id", "ignored")
        .header("Accept", "text/plain")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, json!({ "message": "Hello from FastAPI backend232" }));
}

#[tokio::test]
async fn repeated_calls_return_identical_output() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let mut bodies: Vec<String> = Vec::new();

    for _ in 0..3 {
        let resp: reqwest::Response = client
            .get(format!("{}/api/hello", base_url))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::OK);
        bodies.push(resp.text().await.unwrap());
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}
