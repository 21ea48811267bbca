use crate::hub_info;
use anyhow::{Context, Result};
use axum::Router;
use axum::middleware::from_fn_with_state;
use phub::features::resolver::Resolver;
use phub::features::resolver::middleware::resolve_request;
use phub::kernel::prelude::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

pub fn init(state: ApiState) -> Result<Router> {
    let api = ApiDoc::openapi();

    let resolver = state
        .try_get_slice::<Resolver>()
        .context("Resolver slice must be registered before building the router")?
        .clone();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(phub::server::router::system_router())
        .merge(phub::server::router::content_router())
        .merge(phub::server::router::leads_router())
        .merge(hub_info::hub_info_router())
        .layer(from_fn_with_state(resolver, resolve_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Merge all routes and then apply the state to the final router
    Ok(Router::new().merge(openapi_routes).merge(scalar_routes))
}
