//! Facade crate for `PercyHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `phub` with the `server` feature flag for the HTTP surface.
//! - Call `phub::init` (server) to register feature slices; extend as new slices appear.

pub use phub_domain as domain;
#[cfg(feature = "server")]
use phub_domain::config::ApiConfig;
pub use phub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use phub_content::api::content_router;
        pub use phub_kernel::server::router::system_router;
        pub use phub_leads::api::leads_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use phub_content as content;
    pub use phub_leads as leads;
    pub use phub_resolver as resolver;
    pub use phub_theming as theming;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "content",
        "theming",
        "resolver",
        "leads",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// Content and theming validate their static stores here; a malformed block
/// or partial theme aborts startup instead of degrading at request time.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Content store (validated)
    slices.push(features::content::init()?);

    // Theming adapter (validated)
    slices.push(features::theming::init()?);

    // Hub resolver
    slices.push(features::resolver::middleware::init(&config.hub));

    // Contact boundary
    slices.push(features::leads::init(&config.leads));

    Ok(slices)
}
