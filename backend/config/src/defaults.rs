//! Config defaults: applies sensible default values to parsed config.

use crate::schema::{ApiConfig, ClientConfig, LoggingConfig, VoiceConfig};

/// Default chat endpoint of a locally running assistant backend.
pub const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:8000/api/chat";

/// Default auth base URL.
pub const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:8000/auth";

/// Default history base URL.
pub const DEFAULT_HISTORY_URL: &str = "http://127.0.0.1:8000/history";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: ClientConfig) -> ClientConfig {
    let config = apply_api_defaults(config);
    let config = apply_voice_defaults(config);
    apply_logging_defaults(config)
}

fn apply_api_defaults(mut config: ClientConfig) -> ClientConfig {
    let api = config.api.get_or_insert_with(ApiConfig::default);
    api.chat_url.get_or_insert_with(|| DEFAULT_CHAT_URL.to_string());
    api.auth_url.get_or_insert_with(|| DEFAULT_AUTH_URL.to_string());
    api.history_url.get_or_insert_with(|| DEFAULT_HISTORY_URL.to_string());
    config
}

/// Replies are spoken unless turned off.
fn apply_voice_defaults(mut config: ClientConfig) -> ClientConfig {
    let voice = config.voice.get_or_insert_with(VoiceConfig::default);
    voice.enabled.get_or_insert(true);
    config
}

fn apply_logging_defaults(mut config: ClientConfig) -> ClientConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    logging.level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    logging.json.get_or_insert(false);
    config
}
