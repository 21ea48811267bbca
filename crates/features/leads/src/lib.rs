//! # Contact-submission boundary
//!
//! Accepts contact submissions over HTTP, tags each one with the resolved
//! hub's numeric id, and hands back a reference id the caller can quote.
//! Persistence and delivery to the outside provider live elsewhere; this
//! slice owns only the boundary contract.

#[cfg(feature = "server")]
pub mod api;

mod error;

pub use crate::error::LeadError;

use phub_domain::config::LeadsConfig;
use phub_domain::registry::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Leads feature state, built once from configuration.
#[derive(Debug, Clone)]
pub struct LeadsInner {
    /// Downstream endpoint submissions would be forwarded to, when configured.
    pub forward_endpoint: Option<String>,
}

/// Leads feature slice handle.
#[derive(Debug, Clone)]
pub struct Leads {
    inner: Arc<LeadsInner>,
}

impl Leads {
    #[must_use]
    pub fn new(inner: LeadsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Leads {
    type Target = LeadsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Leads {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the leads feature from configuration.
#[must_use]
pub fn init(config: &LeadsConfig) -> InitializedSlice {
    match &config.forward_endpoint {
        Some(endpoint) => {
            tracing::info!(endpoint = %endpoint, "Leads slice initialized with forward endpoint");
        }
        None => tracing::info!("Leads slice initialized (submissions logged only)"),
    }

    InitializedSlice::new(Leads::new(LeadsInner {
        forward_endpoint: config.forward_endpoint.clone(),
    }))
}
