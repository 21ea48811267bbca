//! # Hub Resolver
//!
//! Determines which hub is "current" for a session or request and makes that
//! determination available without threading it through every call site.
//!
//! Resolution precedence, applied once per session:
//! 1. an explicit override (development builds only),
//! 2. the request hostname matched against known hub domains,
//! 3. the configured default hub.
//!
//! A hostname matching no hub domain is normal operation (local environments,
//! health probes), never an error: resolution silently falls through to the
//! default. The environment is injected through [`HostEnv`] so the decision
//! logic stays unit-testable without a live request context.

mod env;
mod resolve;
mod session;

#[cfg(feature = "server")]
pub mod middleware;

pub use crate::env::{HostEnv, StaticEnv};
pub use crate::resolve::{Resolution, ResolutionSource, match_hostname, resolve};
pub use crate::session::{DocumentSink, HubScope, HubSession, InMemoryDocument};

#[cfg(feature = "server")]
pub use crate::middleware::{Resolver, ResolvedHub};
