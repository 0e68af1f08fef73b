use std::fmt;

use chrono::{DateTime, Utc};

/// Who wrote a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// Identifier unique within one log, increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMessage {
    id: MessageId,
    author: Author,
    text: String,
    created_at: DateTime<Utc>,
}

impl ConversationMessage {
    #[cfg(test)]
    pub(crate) fn id(&self) -> MessageId {
        self.id
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Append-only, insertion-ordered message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<ConversationMessage>,
    next_id: u64,
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }
}

impl ConversationLog {
    pub fn push(&mut self, author: Author, text: impl Into<String>) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;

        self.messages.push(ConversationMessage {
            id,
            author,
            text: text.into(),
            created_at: Utc::now(),
        });

        id
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops every message. Identifiers keep increasing afterwards.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
