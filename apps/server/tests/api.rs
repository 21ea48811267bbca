use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use phub::domain::Hub;
use phub::domain::constants::HUB_HEADER;
use phub_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    Server::builder().build().expect("server").into_router().expect("router")
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let request = Request::builder().uri("/health").body(Body::empty()).expect("request");
    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], json!("up"));
}

#[tokio::test]
async fn hub_identity_follows_the_host_header() {
    let request = Request::builder()
        .uri("/hub")
        .header("host", "www.percymd.com")
        .body(Body::empty())
        .expect("request");

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(HUB_HEADER).unwrap(), "percymd");

    let body = body_json(response).await;
    assert_eq!(body["name"], json!("percymd"));
    assert_eq!(body["domain"], json!("percymd.com"));
    assert!(body["theme"]["primary"].as_str().is_some());
}

#[tokio::test]
async fn unknown_host_serves_the_default_hub() {
    let request = Request::builder()
        .uri("/hub/content/hero")
        .header("host", "localhost:4710")
        .body(Body::empty())
        .expect("request");

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(HUB_HEADER).unwrap(), Hub::DEFAULT.name());
}

#[tokio::test]
async fn content_endpoint_serves_tenant_copy() {
    let request = Request::builder()
        .uri("/hub/content/hero")
        .header("host", "percytech.com")
        .body(Body::empty())
        .expect("request");

    let response = app().oneshot(request).await.expect("response");
    let body = body_json(response).await;
    assert_eq!(
        body["fixed_text"],
        json!(phub::features::content::hero_for(Hub::PercyTech).fixed_text)
    );
}

#[tokio::test]
async fn contact_submission_round_trips() {
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("host", "gnymble.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Looking for compliant texting."
            })
            .to_string(),
        ))
        .expect("request");

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["reference"].as_str().is_some());
}
