//! Config validation: schema checks with user-friendly error messages.

use crate::schema::ClientConfig;
use thiserror::Error;

/// Log levels accepted by the subscriber's filter.
/// Log levels accepted in `logging.level` and on the command line.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &ClientConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_api(config, &mut report);
    validate_logging(config, &mut report);
    report
}

/// Endpoints must be absolute http(s) URLs.
fn validate_api(config: &ClientConfig, report: &mut ValidationReport) {
    let Some(api) = &config.api else { return };
    let endpoints = [
        ("api.chatUrl", &api.chat_url),
        ("api.authUrl", &api.auth_url),
        ("api.historyUrl", &api.history_url),
    ];
    for (path, url) in endpoints {
        let Some(url) = url else { continue };
        let url = url.trim();
        if url.is_empty() {
            report.error(path, "URL cannot be empty");
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            report.error(path, format!("URL must start with http:// or https://, got '{url}'"));
        } else if url.starts_with("http://") && !is_loopback(url) {
            report.warn(path, "Plain http to a remote host sends bearer tokens unencrypted");
        }
    }
}

fn is_loopback(url: &str) -> bool {
    let rest = url.trim_start_matches("http://");
    if rest.starts_with("[::1]") {
        return true;
    }
    let host = rest.split(['/', ':']).next().unwrap_or_default();
    matches!(host, "localhost" | "127.0.0.1")
}

fn validate_logging(config: &ClientConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            report.error(
                "logging.level",
                format!("Unknown log level '{level}'; expected one of {}", LOG_LEVELS.join(", ")),
            );
        }
    }
    if logging.dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
        report.error("logging.dir", "Log directory cannot be empty; omit it to disable file logging");
    }
}
