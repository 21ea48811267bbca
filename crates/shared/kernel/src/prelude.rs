//! Convenience re-exports for slice crates and applications.

pub use crate::config::{ConfigError, load_config};
pub use phub_domain::config::ApiConfig;
pub use phub_domain::hub::Hub;
pub use phub_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
