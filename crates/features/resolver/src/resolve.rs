//! Pure resolution decision logic.

use crate::env::HostEnv;
use phub_domain::Hub;
use tracing::debug;

/// How a hub ended up selected, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Explicit override from configuration (development builds).
    Override,
    /// Request hostname matched a hub domain or hub-named subdomain.
    Hostname,
    /// Nothing matched; the configured default applied.
    Default,
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub hub: Hub,
    pub source: ResolutionSource,
}

/// Resolve the active hub for the given environment.
///
/// `dev_override` wins only when the environment reports a development build;
/// otherwise the hostname is consulted, and an unmatched or absent hostname
/// falls through to `default` silently.
pub fn resolve<E: HostEnv>(env: &E, dev_override: Option<Hub>, default: Hub) -> Resolution {
    if env.is_development()
        && let Some(hub) = dev_override
    {
        return Resolution { hub, source: ResolutionSource::Override };
    }

    if let Some(hostname) = env.hostname() {
        if let Some(hub) = match_hostname(&hostname) {
            return Resolution { hub, source: ResolutionSource::Hostname };
        }
        debug!(%hostname, "hostname matched no hub domain, using default");
    }

    Resolution { hub: default, source: ResolutionSource::Default }
}

/// Match a hostname against the hub registry.
///
/// A host matches a hub when, after stripping any port and lowercasing, it is
/// the hub's canonical domain, a subdomain of it (including `www.`), or its
/// first DNS label is a hub name (e.g. `gnymble.localhost`).
#[must_use]
pub fn match_hostname(hostname: &str) -> Option<Hub> {
    let host = hostname.rsplit_once(':').map_or(hostname, |(h, _)| h);
    let host = host.trim().to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }

    for hub in Hub::all() {
        let domain = hub.domain();
        if host == domain || host.strip_suffix(domain).is_some_and(|rest| rest.ends_with('.')) {
            return Some(hub);
        }
    }

    // Developer convenience: hub-named subdomains of any host.
    host.split('.').next().and_then(Hub::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn canonical_domain_matches() {
        assert_eq!(match_hostname("gnymble.com"), Some(Hub::Gnymble));
        assert_eq!(match_hostname("percymd.com"), Some(Hub::PercyMd));
    }

    #[test]
    fn subdomain_and_port_are_tolerated() {
        assert_eq!(match_hostname("www.percytech.com"), Some(Hub::PercyTech));
        assert_eq!(match_hostname("app.gnymble.com:8443"), Some(Hub::Gnymble));
        assert_eq!(match_hostname("GNYMBLE.COM"), Some(Hub::Gnymble));
    }

    #[test]
    fn hub_named_first_label_matches() {
        assert_eq!(match_hostname("percytext.localhost"), Some(Hub::PercyText));
        assert_eq!(match_hostname("gnymble.dev.internal:3000"), Some(Hub::Gnymble));
    }

    #[test]
    fn unknown_hosts_do_not_match() {
        assert_eq!(match_hostname("localhost"), None);
        assert_eq!(match_hostname("example.com"), None);
        assert_eq!(match_hostname("notgnymble.com"), None);
        assert_eq!(match_hostname(""), None);
    }

    #[test]
    fn override_wins_in_development_only() {
        let dev = StaticEnv { hostname: Some("gnymble.com".into()), development: true };
        let prod = StaticEnv { hostname: Some("gnymble.com".into()), development: false };

        let resolved = resolve(&dev, Some(Hub::PercyMd), Hub::DEFAULT);
        assert_eq!(resolved.hub, Hub::PercyMd);
        assert_eq!(resolved.source, ResolutionSource::Override);

        let resolved = resolve(&prod, Some(Hub::PercyMd), Hub::DEFAULT);
        assert_eq!(resolved.hub, Hub::Gnymble);
        assert_eq!(resolved.source, ResolutionSource::Hostname);
    }

    #[test]
    fn unmatched_hostname_falls_back_silently() {
        let env = StaticEnv::with_hostname("localhost:3000");
        let resolved = resolve(&env, None, Hub::PercyText);
        assert_eq!(resolved.hub, Hub::PercyText);
        assert_eq!(resolved.source, ResolutionSource::Default);
    }

    #[test]
    fn absent_hostname_falls_back() {
        let env = StaticEnv::default();
        let resolved = resolve(&env, None, Hub::DEFAULT);
        assert_eq!(resolved.source, ResolutionSource::Default);
    }
}
