//! In-memory conversation store.
//!
//! The transcript holds the current session's messages in append order.
//! There is no persistence: the transcript is created empty when the
//! session starts and dropped with the process.

use palaver_types::message::ChatMessage;

/// Append-only, ordered store of the current conversation.
///
/// Insertion order is display order; no reordering by timestamp or role
/// ever happens. There is no edit or delete operation.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the sequence. Never fails.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// The current ordered sequence of messages.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the transcript.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has any messages yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_types::message::MessageRole;

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::user("first"));
        transcript.append(ChatMessage::assistant("second"));
        transcript.append(ChatMessage::user("third"));

        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[test]
    fn test_roles_do_not_reorder() {
        // Two assistant messages around a user message must stay put.
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::assistant("a"));
        transcript.append(ChatMessage::user("b"));
        transcript.append(ChatMessage::assistant("c"));

        let roles: Vec<MessageRole> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant
            ]
        );
    }
}
