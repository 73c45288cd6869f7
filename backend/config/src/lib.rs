//! `venturemind-config`: VentureMind client configuration management.
//!
//! Provides:
//! - Typed config schema (API endpoints, voice, logging)
//! - YAML read/write with atomic backup rotation
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation with per-field reports

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use defaults::apply_all_defaults;
pub use env::{
    collect_referenced_vars, contains_env_var_reference, resolve_env_vars, resolve_env_vars_with,
    MissingEnvVarError,
};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use schema::{ApiConfig, ClientConfig, LoggingConfig, VoiceConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport, LOG_LEVELS};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load, apply env substitution, apply defaults, and validate a config file.
///
/// This is the main entry point for loading a config at runtime. Validation
/// errors are logged and returned as an error; warnings are only logged.
pub async fn load_and_prepare(path: &Path) -> Result<ClientConfig> {
    let config = prepare(load_config(path).await?)?;
    ensure_valid(&config, path)?;
    Ok(config)
}

/// Apply env substitution and defaults to a freshly parsed config.
pub fn prepare(raw_config: ClientConfig) -> Result<ClientConfig> {
    let value: Value =
        serde_json::to_value(&raw_config).context("Failed to serialize config for processing")?;
    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;

    let config: ClientConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;
    Ok(apply_all_defaults(config))
}

/// Validate a prepared config, logging every finding and failing on errors.
pub fn ensure_valid(config: &ClientConfig, path: &Path) -> Result<()> {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        bail!(
            "{} config error(s) in {}; first: {}",
            report.errors.len(),
            path.display(),
            report.errors[0]
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepares_missing_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_and_prepare(&dir.path().join("config.yaml")).await.unwrap();
        assert_eq!(cfg.chat_url(), Some(defaults::DEFAULT_CHAT_URL));
        assert!(cfg.voice_enabled());
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        tokio::fs::write(&path, "logging:\n  level: loud\n").await.unwrap();
        let err = load_and_prepare(&path).await.unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}
