#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use axum::{Router, middleware::from_fn_with_state};
use phub_domain::Hub;
use phub_domain::config::HubConfig;
use phub_domain::constants::HUB_HEADER;
use phub_resolver::{ResolvedHub, Resolver, middleware::resolve_request};
use tower::ServiceExt;

async fn whoami(hub: ResolvedHub) -> String {
    hub.0.name().to_owned()
}

fn app(config: &HubConfig) -> Router {
    let resolver = Resolver::from_config(config);
    Router::new()
        .route("/whoami", get(whoami))
        .layer(from_fn_with_state(resolver, resolve_request))
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn host_header_selects_the_hub() {
    let app = app(&HubConfig::default());
    let request = Request::builder()
        .uri("/whoami")
        .header("host", "www.percymd.com")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.headers().get(HUB_HEADER).unwrap(), "percymd");
    assert_eq!(body_string(response).await, "percymd");
}

#[tokio::test]
async fn unknown_host_falls_back_to_default() {
    let app = app(&HubConfig::default());
    let request = Request::builder()
        .uri("/whoami")
        .header("host", "localhost:4710")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.headers().get(HUB_HEADER).unwrap(), Hub::DEFAULT.name());
}

#[tokio::test]
async fn dev_override_wins_in_development() {
    let config = HubConfig {
        default: Hub::Gnymble,
        development: true,
        dev_override: Some(Hub::PercyText),
    };
    let app = app(&config);
    let request = Request::builder()
        .uri("/whoami")
        .header("host", "percytech.com")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.headers().get(HUB_HEADER).unwrap(), "percytext");
}

#[tokio::test]
async fn extractor_degrades_to_default_without_middleware() {
    let app = Router::new().route("/whoami", get(whoami));
    let request = Request::builder().uri("/whoami").body(Body::empty()).expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(body_string(response).await, Hub::DEFAULT.name());
}
