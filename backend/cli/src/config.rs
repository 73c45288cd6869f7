use std::path::{Path, PathBuf};

use anyhow::Result;
use venturemind_config::{ClientConfig, config_dir, config_file_path, load_config, prepare};

/// The `--config` flag wins; otherwise `<config dir>/config.yaml`.
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => config_file_path(&config_dir()),
    }
}

/// Load and prepare the config without rejecting invalid values, so the
/// `config` command can still report them.
pub async fn load(path: &Path) -> Result<ClientConfig> {
    prepare(load_config(path).await?)
}

pub fn log_dir(config: &ClientConfig) -> Option<PathBuf> {
    config
        .logging
        .as_ref()
        .and_then(|l| l.dir.as_deref())
        .filter(|d| !d.trim().is_empty())
        .map(PathBuf::from)
}

pub fn json_logs(config: &ClientConfig) -> bool {
    config.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
}
