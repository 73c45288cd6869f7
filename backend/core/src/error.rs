use thiserror::Error;

/// Top-level error type for the VentureMind client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid assistant payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("assistant API error ({status}): {detail}")]
    Api { status: u16, detail: String },
}
