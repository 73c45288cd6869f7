//! Chat API envelope: what the client sends and what the assistant returns.

use serde::{Deserialize, Serialize};
use venturemind_markdown::{render_markdown, speech_text};

use crate::error::ClientError;
use crate::pack::{CompetitorRow, DomainCheck, StartupPack};

/// Body posted to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Builds a request from user input. Blank input sends nothing.
    pub fn from_input(input: &str) -> Option<Self> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }
        Some(Self {
            message: message.to_string(),
        })
    }
}

/// Successful chat response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply_markdown: String,
    #[serde(default)]
    pub startup_pack: Option<StartupPack>,
    #[serde(default)]
    pub domains: Vec<DomainCheck>,
    #[serde(default)]
    pub competitor_matrix: Vec<CompetitorRow>,
}

impl ChatReply {
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Rebuilds a reply from a stored history record: the pack comes back,
    /// the markdown does not.
    pub fn from_history(detail: &HistoryDetail) -> Self {
        Self {
            startup_pack: Some(detail.full_json.clone()),
            ..Self::default()
        }
    }

    /// HTML for the chat surface.
    pub fn html(&self) -> String {
        render_markdown(&self.reply_markdown)
    }

    /// Plain text for speech output.
    pub fn speech(&self) -> String {
        speech_text(&self.reply_markdown)
    }
}

/// Body of a non-success response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Parses an error body, falling back to an empty one when the server
    /// sent something that is not JSON.
    pub fn parse_lossy(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Text shown to the user in place of a reply.
    pub fn display_text(&self) -> &str {
        self.detail.as_deref().filter(|d| !d.is_empty()).unwrap_or("Error")
    }

    pub fn into_error(self, status: u16) -> ClientError {
        let detail = self.display_text().to_string();
        ClientError::Api { status, detail }
    }
}

/// One stored startup pack, as returned by the history detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDetail {
    pub id: i64,
    pub idea: String,
    pub full_json: StartupPack,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_input_sends_nothing() {
        assert!(ChatRequest::from_input("   \n").is_none());
        assert_eq!(
            ChatRequest::from_input("  pet bakery ").unwrap().message,
            "pet bakery"
        );
    }

    #[test]
    fn test_reply_renders_markdown() {
        let reply = ChatReply::from_json(
            r###"{"reply_markdown": "## Hi\n- **a**", "startup_pack": null}"###,
        )
        .unwrap();
        assert_eq!(reply.html(), "<h2>Hi</h2><ul><li>**a**</li></ul>");
        assert_eq!(reply.speech(), " Hi\n- a");
        assert!(reply.startup_pack.is_none());
    }

    #[test]
    fn test_reply_rejects_malformed_json() {
        let err = ChatReply::from_json("{not json").unwrap_err();
        assert!(matches!(err, ClientError::InvalidPayload(_)));
    }

    #[test]
    fn test_error_body_fallbacks() {
        assert_eq!(ErrorBody::parse_lossy("<html>502</html>").display_text(), "Error");
        assert_eq!(ErrorBody::parse_lossy(r#"{"detail": ""}"#).display_text(), "Error");

        let body = ErrorBody::parse_lossy(r#"{"detail": "Startup idea is empty."}"#);
        assert_eq!(body.display_text(), "Startup idea is empty.");
        let err = body.into_error(400);
        assert_eq!(err.to_string(), "assistant API error (400): Startup idea is empty.");
    }

    #[test]
    fn test_from_history_keeps_pack_only() {
        let detail: HistoryDetail = serde_json::from_value(json!({
            "id": 7,
            "idea": "Solar kiosks",
            "full_json": { "startup_summary": "Kiosks" },
            "created_at": "2024-05-01 10:00:00"
        }))
        .unwrap();

        let reply = ChatReply::from_history(&detail);
        assert_eq!(reply.reply_markdown, "");
        assert_eq!(reply.html(), "");
        assert_eq!(
            reply.startup_pack.unwrap().startup_summary.as_deref(),
            Some("Kiosks")
        );
    }
}
