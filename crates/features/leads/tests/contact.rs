#![cfg(feature = "server")]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use phub_domain::config::{ApiConfig, LeadsConfig};
use phub_kernel::server::ApiState;
use phub_leads::api::leads_router;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(phub_leads::init(&LeadsConfig::default()))
        .build()
        .expect("state");

    let (router, _doc) = leads_router().with_state(state).split_for_parts();
    router
}

fn post_contact(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 4096).await.expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn valid_submission_is_accepted_with_a_reference() {
    let request = post_contact(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "We run a cigar lounge and need compliant texting."
    }));

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["reference"].as_str().map(str::len), Some(12));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let request = post_contact(json!({
        "name": "   ",
        "email": "ada@example.com",
        "message": "hello"
    }));

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().expect("error string").contains("name"));
}

#[tokio::test]
async fn mail_address_without_at_sign_is_rejected() {
    let request = post_contact(json!({
        "name": "Ada",
        "email": "not-an-address",
        "message": "hello"
    }));

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn optional_fields_are_accepted() {
    let request = post_contact(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "phone": "+1 555 0100",
        "company": "Lovelace Cigars",
        "message": "Call me back."
    }));

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
