//! Structured logging for the VentureMind client.
//!
//! Installs the console/NDJSON subscriber and scrubs credentials and contact
//! details from text before it is logged.

pub mod logger;
pub mod redact;

pub use logger::{LogGuard, LoggerOptions, init_logger};
pub use redact::redact_sensitive_data;
