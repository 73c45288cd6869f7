//! Chat transcript
//!
//! The ordered turns of one conversation and the bubble markup each turn
//! renders to. Turns are only ever appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use venturemind_markdown::{escape, render_markdown};

use crate::reply::{ChatReply, HistoryDetail};

/// Label shown above every assistant bubble.
pub const ASSISTANT_LABEL: &str = "VentureMind.AI";

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// Turn content: plain text is escaped on display, markup is trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TurnBody {
    Text(String),
    Markup(String),
}

/// One conversational turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub speaker: Speaker,
    pub at: DateTime<Utc>,
    pub body: TurnBody,
}

impl ChatTurn {
    pub fn new(speaker: Speaker, body: TurnBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            at: Utc::now(),
            body,
        }
    }

    /// Chat bubble markup for this turn.
    pub fn to_html(&self) -> String {
        let body = match &self.body {
            TurnBody::Text(text) => escape(text),
            TurnBody::Markup(html) => html.clone(),
        };
        match self.speaker {
            Speaker::User => format!("<div class=\"msg msg-user\"><div>{body}</div></div>"),
            Speaker::Assistant => format!(
                "<div class=\"msg msg-ai glass-bubble\"><div class=\"msg-label\">{ASSISTANT_LABEL}</div><div>{body}</div></div>"
            ),
        }
    }
}

/// Append-only conversation log. Turns keep call order; nothing is merged or
/// deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatTurn {
        self.push(ChatTurn::new(Speaker::User, TurnBody::Text(text.into())))
    }

    /// Appends an assistant reply, rendering its markdown.
    pub fn push_reply(&mut self, reply: &ChatReply) -> &ChatTurn {
        let html = render_markdown(&reply.reply_markdown);
        self.push(ChatTurn::new(Speaker::Assistant, TurnBody::Markup(html)))
    }

    /// Appends an assistant-side error shown in place of a reply.
    pub fn push_error(&mut self, text: impl Into<String>) -> &ChatTurn {
        self.push(ChatTurn::new(Speaker::Assistant, TurnBody::Text(text.into())))
    }

    /// Appends the user turn that marks a reloaded history item.
    pub fn push_history(&mut self, detail: &HistoryDetail) -> &ChatTurn {
        self.push_user(format!("(History) {}", detail.idea))
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, turn: ChatTurn) -> &ChatTurn {
        debug!(turn_id = %turn.id, speaker = ?turn.speaker, index = self.turns.len(), "Appending turn");
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }
}
