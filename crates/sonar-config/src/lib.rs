//! sonar-chat configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::SonarConfig;

use sonar_common::ConfigError;
use std::path::Path;

/// Environment variable that overrides `search.endpoint`.
pub const ENDPOINT_ENV: &str = "SONAR_ENDPOINT";

/// Load config from an explicit path, or from the platform default path
/// when none is given. Environment overrides are applied last and the
/// result is validated.
pub fn load_config(path: Option<&Path>) -> Result<SonarConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Apply `SONAR_*` environment overrides.
pub fn apply_env_overrides(config: &mut SonarConfig) {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            tracing::debug!("endpoint overridden by {ENDPOINT_ENV}");
            config.search.endpoint = endpoint.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nclear_command = \"/reset\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.ui.clear_command, "/reset");
    }

    #[test]
    fn load_config_missing_explicit_path_errors() {
        let result = load_config(Some(Path::new("/tmp/sonar_missing_override.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
