//! Chat message types for Palaver.
//!
//! A conversation is an ordered sequence of `ChatMessage` values, one per
//! turn. `TurnPayload` is the reduced `{role, content}` form sent over the
//! wire to the agent endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Role of a message in the conversation.
///
/// The client only ever produces user turns and renders assistant turns;
/// no other roles exist in this contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in the current conversation.
///
/// Messages are append-only: once created, `id`, `role`, `content`, and
/// `created_at` never change. The UUIDv7 id is time-sortable, so sorting by
/// id matches append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    /// UTF-8 text; assistant content may contain Markdown markup.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message from already-trimmed input text.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// The `{role, content}` reduction of a turn sent to the agent endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPayload {
    pub role: MessageRole,
    pub content: String,
}

impl From<&ChatMessage> for TurnPayload {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_message_role_rejects_system() {
        assert!("system".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_chat_message_ids_sort_in_append_order() {
        let first = ChatMessage::user("one");
        let second = ChatMessage::assistant("two");
        assert!(first.id < second.id, "UUIDv7 ids must be time-ordered");
    }

    #[test]
    fn test_turn_payload_wire_shape() {
        let msg = ChatMessage::user("what's trending on Steam?");
        let payload = TurnPayload::from(&msg);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            "{\"role\":\"user\",\"content\":\"what's trending on Steam?\"}"
        );
    }
}
