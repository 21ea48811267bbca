use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors raised while loading and deserializing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config sources: {0}")]
    Build(#[source] config::ConfigError),
    #[error("config does not match the expected structure: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from a file (e.g. `server.toml`); defaults to
///    `"server"` in the working directory when no path is given.
/// 2. **Environment overrides**: variables prefixed with `PHUB__`, nested keys
///    separated by double underscores (`PHUB__HUB__DEFAULT` maps to
///    `hub.default`).
///
/// # Errors
/// Returns [`ConfigError::Build`] when the file is missing or an override is
/// malformed, and [`ConfigError::Deserialize`] when the merged settings do not
/// match `T`.
///
/// # Example
/// ```rust
/// use phub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix("PHUB").separator("__").convert_case(config::Case::Snake));

    builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, Default, serde::Deserialize)]
    #[serde(default)]
    struct TestConfig {
        port: u16,
        name: String,
    }

    #[test]
    fn loads_from_toml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("server.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "port = 9000\nname = \"percyhub\"").expect("write config");

        let cfg: TestConfig = load_config(Some(&path)).expect("load");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.name, "percyhub");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result: Result<TestConfig, _> = load_config(Some("/definitely/not/here"));
        assert!(matches!(result, Err(ConfigError::Build(_))));
    }
}
