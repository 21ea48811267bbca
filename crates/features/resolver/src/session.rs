//! Session-scoped resolution state and the document tagging scope.

use crate::env::HostEnv;
use crate::resolve::{Resolution, resolve};
use parking_lot::RwLock;
use phub_domain::Hub;
use phub_domain::constants::HUB_ATTRIBUTE;
use std::sync::OnceLock;
use tracing::debug;

/// One session's resolution state: `unresolved` until the first
/// [`HubSession::resolve_with`], then `resolved(hub)` for the session's
/// lifetime. There is no way back; a new session restarts resolution.
#[derive(Debug, Default)]
pub struct HubSession {
    resolved: OnceLock<Resolution>,
}

impl HubSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve this session's hub, transitioning `unresolved -> resolved`
    /// exactly once. Subsequent calls return the first outcome unchanged,
    /// whatever environment they pass.
    pub fn resolve_with<E: HostEnv>(
        &self,
        env: &E,
        dev_override: Option<Hub>,
        default: Hub,
    ) -> Resolution {
        *self.resolved.get_or_init(|| {
            let resolution = resolve(env, dev_override, default);
            debug!(hub = %resolution.hub, source = ?resolution.source, "session hub resolved");
            resolution
        })
    }

    /// The resolved hub, if the transition has happened.
    #[must_use]
    pub fn current(&self) -> Option<Hub> {
        self.resolved.get().map(|r| r.hub)
    }
}

/// Receiver for the document-level hub attribute (`data-hub`).
///
/// The browser equivalent is an attribute on the document root that styling
/// layers key off; on the server it backs rendered responses and tests.
pub trait DocumentSink {
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
}

/// Scoped acquisition of the document hub attribute: set on construction,
/// removed on drop, mirroring mount/unmount of the provider.
#[derive(Debug)]
pub struct HubScope<'a, D: DocumentSink> {
    sink: &'a D,
    hub: Hub,
}

impl<'a, D: DocumentSink> HubScope<'a, D> {
    pub fn enter(sink: &'a D, hub: Hub) -> Self {
        sink.set_attribute(HUB_ATTRIBUTE, hub.name());
        Self { sink, hub }
    }

    #[must_use]
    pub const fn hub(&self) -> Hub {
        self.hub
    }
}

impl<D: DocumentSink> Drop for HubScope<'_, D> {
    fn drop(&mut self) {
        self.sink.remove_attribute(HUB_ATTRIBUTE);
    }
}

/// Thread-safe in-memory document, used in tests and server-side rendering.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    attributes: RwLock<Vec<(String, String)>>,
}

impl InMemoryDocument {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl DocumentSink for InMemoryDocument {
    fn set_attribute(&self, name: &str, value: &str) {
        let mut attributes = self.attributes.write();
        attributes.retain(|(n, _)| n != name);
        attributes.push((name.to_owned(), value.to_owned()));
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.write().retain(|(n, _)| n != name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn session_transitions_exactly_once() {
        let session = HubSession::new();
        assert_eq!(session.current(), None);

        let env = StaticEnv::with_hostname("percymd.com");
        let first = session.resolve_with(&env, None, Hub::DEFAULT);
        assert_eq!(first.hub, Hub::PercyMd);

        // A different environment cannot re-resolve the same session.
        let other = StaticEnv::with_hostname("percytech.com");
        let second = session.resolve_with(&other, None, Hub::DEFAULT);
        assert_eq!(second, first);
        assert_eq!(session.current(), Some(Hub::PercyMd));
    }

    #[test]
    fn scope_sets_and_clears_document_attribute() {
        let document = InMemoryDocument::default();
        {
            let scope = HubScope::enter(&document, Hub::PercyText);
            assert_eq!(scope.hub(), Hub::PercyText);
            assert_eq!(document.attribute(HUB_ATTRIBUTE).as_deref(), Some("percytext"));
        }
        assert_eq!(document.attribute(HUB_ATTRIBUTE), None);
    }

    #[test]
    fn scope_overwrites_previous_attribute() {
        let document = InMemoryDocument::default();
        document.set_attribute(HUB_ATTRIBUTE, "stale");
        let _scope = HubScope::enter(&document, Hub::Gnymble);
        assert_eq!(document.attribute(HUB_ATTRIBUTE).as_deref(), Some("gnymble"));
    }
}
