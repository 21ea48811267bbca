//! Axum integration: the resolver slice, request middleware, and extractor.

use crate::env::HostEnv;
use crate::resolve::resolve;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::{HeaderValue, Response};
use axum::middleware::Next;
use phub_domain::Hub;
use phub_domain::config::HubConfig;
use phub_domain::constants::HUB_HEADER;
use phub_domain::registry::{FeatureSlice, InitializedSlice};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, warn};

/// Resolver feature state, built once from configuration.
#[derive(Debug, Clone)]
pub struct ResolverInner {
    pub default: Hub,
    pub dev_override: Option<Hub>,
    pub development: bool,
}

/// Resolver feature slice handle.
#[derive(Debug, Clone)]
pub struct Resolver {
    inner: Arc<ResolverInner>,
}

impl Resolver {
    #[must_use]
    pub fn new(inner: ResolverInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    #[must_use]
    pub fn from_config(config: &HubConfig) -> Self {
        if config.dev_override.is_some() && !config.development {
            warn!("hub.dev_override is set but hub.development is false; override ignored");
        }

        Self::new(ResolverInner {
            default: config.default,
            dev_override: config.dev_override,
            development: config.development,
        })
    }

    /// Resolve a hub for the given host header value.
    #[must_use]
    pub fn resolve_host(&self, host: Option<&str>) -> Hub {
        let env = RequestEnv { host, development: self.inner.development };
        resolve(&env, self.inner.dev_override, self.inner.default).hub
    }
}

impl std::ops::Deref for Resolver {
    type Target = ResolverInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Resolver {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the resolver feature from hub configuration.
#[must_use]
pub fn init(config: &HubConfig) -> InitializedSlice {
    let resolver = Resolver::from_config(config);
    info!(default = %resolver.default, development = resolver.development, "Resolver slice initialized");
    InitializedSlice::new(resolver)
}

/// The hub resolved for the current request.
///
/// Total extractor: when the middleware did not run, this degrades to the
/// platform default instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHub(pub Hub);

impl Default for ResolvedHub {
    fn default() -> Self {
        Self(Hub::DEFAULT)
    }
}

impl<S> FromRequestParts<S> for ResolvedHub
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().copied().unwrap_or_default())
    }
}

/// Request middleware: resolves the hub from the `Host` header, exposes it as
/// a request extension, and mirrors it onto the `x-hub` response header (the
/// HTTP analogue of the document-level attribute).
pub async fn resolve_request(
    State(resolver): State<Resolver>,
    mut request: Request,
    next: Next,
) -> Response<axum::body::Body> {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let hub = resolver.resolve_host(host.as_deref());
    request.extensions_mut().insert(ResolvedHub(hub));

    let mut response = next.run(request).await;
    response.headers_mut().insert(HUB_HEADER, HeaderValue::from_static(hub.name()));
    response
}

/// Host-header-backed environment adapter for one request.
#[derive(Debug)]
struct RequestEnv<'a> {
    host: Option<&'a str>,
    development: bool,
}

impl HostEnv for RequestEnv<'_> {
    fn hostname(&self) -> Option<String> {
        self.host.map(str::to_owned)
    }

    fn is_development(&self) -> bool {
        self.development
    }
}
