//! Injectable host-environment adapter.

/// Where the resolver learns about its surroundings.
///
/// Production implementations read the request context; tests use
/// [`StaticEnv`]. Keeping this behind a trait keeps hostname-sniffing out of
/// the decision logic.
pub trait HostEnv {
    /// The hostname the current request/session arrived on, if any.
    fn hostname(&self) -> Option<String>;

    /// Whether this is a development build; gates override affordances.
    fn is_development(&self) -> bool;
}

/// Fixed environment, for tests and single-tenant deployments.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    pub hostname: Option<String>,
    pub development: bool,
}

impl StaticEnv {
    #[must_use]
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self { hostname: Some(hostname.into()), development: false }
    }
}

impl HostEnv for StaticEnv {
    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }

    fn is_development(&self) -> bool {
        self.development
    }
}
