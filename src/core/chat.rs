//! Chat demo conversation
//!
//! There is no model behind the chat. A sent message is answered with a canned
//! reply after [`REPLY_DELAY_MS`]. The conversation hands out a [`ReplyTicket`]
//! for the pending reply, and only the ticket still in flight can deliver it,
//! so a timer that fires after the page is gone appends nothing.

use chrono::{DateTime, Utc};
use derive_more::Display;
use uuid::Uuid;

/// Delay before the canned reply shows up
pub const REPLY_DELAY_MS: u32 = 1500;

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MessageRole {
    #[display("user")]
    User,
    #[display("assistant")]
    Assistant,
}

/// A single chat message
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content.into())
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

/// Characters that start inline markup in the middle of a line
const MARKDOWN_INLINE: &[char] = &['\\', '`', '*', '_', '~', '[', ']', '<', '>', '&', '|', '#'];

/// Escape `text` so markdown renders it as written, on a single line
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '\r' | '\n' => escaped.push(' '),
            c if MARKDOWN_INLINE.contains(&c) => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// The placeholder answer. Markdown, with the query escaped.
pub fn canned_reply(query: &str) -> String {
    let query = escape_markdown(query);
    format!(
        "Thank you for your question about \"{query}\". This is a demonstration of the \
         Nyaya AI interface. In the full version, I would provide detailed legal information \
         with citations to relevant Indian laws, acts, and judgments.\n\n\
         **Note:** Nyaya AI provides legal information, not legal advice. Please consult a \
         qualified legal professional for specific matters."
    )
}

/// Greeting shown above the empty chat, by local hour (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good morning",
        12..18 => "Good afternoon",
        _ => "Good evening",
    }
}

/// A one-click starter question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestedQuery {
    pub icon: &'static str,
    pub label: &'static str,
    pub query: &'static str,
}

pub const SUGGESTED_QUERIES: &[SuggestedQuery] = &[
    SuggestedQuery {
        icon: "file-text",
        label: "Contracts",
        query: "What are the essential elements of a valid contract under Indian law?",
    },
    SuggestedQuery {
        icon: "users",
        label: "Rights",
        query: "What are my fundamental rights under the Indian Constitution?",
    },
    SuggestedQuery {
        icon: "gavel",
        label: "Property",
        query: "How does property inheritance work under Hindu Succession Act?",
    },
    SuggestedQuery {
        icon: "book-open",
        label: "Business",
        query: "What are the compliance requirements for starting a company in India?",
    },
];

/// Reasons a message is not sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("a reply is still pending")]
    ReplyPending,
}

/// Handle on the reply owed for one user message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyTicket {
    id: Uuid,
    query: String,
}

impl ReplyTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Whether the conversation has started
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatPhase {
    Empty,
    Conversing,
}

/// Append-only message list with at most one reply in flight
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: Option<ReplyTicket>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn phase(&self) -> ChatPhase {
        if self.messages.is_empty() {
            ChatPhase::Empty
        } else {
            ChatPhase::Conversing
        }
    }

    pub fn pending(&self) -> Option<&ReplyTicket> {
        self.pending.as_ref()
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Append the user's message and open a ticket for its reply.
    ///
    /// The text is stored exactly as given; blank input is refused.
    pub fn submit(&mut self, text: &str) -> Result<ReplyTicket, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.pending.is_some() {
            return Err(ChatError::ReplyPending);
        }

        self.messages.push(ChatMessage::user(text));
        let ticket = ReplyTicket {
            id: Uuid::new_v4(),
            query: text.to_string(),
        };
        self.pending = Some(ticket.clone());
        Ok(ticket)
    }

    /// Append the canned reply for `ticket` if it is still the one in flight
    pub fn deliver(&mut self, ticket: &ReplyTicket) -> Option<&ChatMessage> {
        if self.pending.as_ref() != Some(ticket) {
            return None;
        }
        self.pending = None;
        self.messages
            .push(ChatMessage::assistant(canned_reply(&ticket.query)));
        self.messages.last()
    }

    /// Forget the in-flight reply
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_appends_exact_user_message() {
        let mut chat = Conversation::new();
        let ticket = chat.submit("What is Section 420?").unwrap();

        assert_eq!(chat.len(), 1);
        let msg = &chat.messages()[0];
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "What is Section 420?");
        assert_eq!(ticket.query(), "What is Section 420?");
        assert!(chat.is_waiting());
    }

    #[test]
    fn test_deliver_appends_one_reply_quoting_query() {
        let mut chat = Conversation::new();
        let ticket = chat.submit("What is Section 420?").unwrap();

        let reply = chat.deliver(&ticket).unwrap();
        assert_eq!(reply.role, MessageRole::Assistant);
        assert!(reply.content.contains("\"What is Section 420?\""));
        assert_eq!(chat.len(), 2);
        assert!(!chat.is_waiting());

        // A second delivery of the same ticket is a no-op
        assert!(chat.deliver(&ticket).is_none());
        assert_eq!(chat.len(), 2);
    }

    #[test]
    fn test_reply_escapes_markup_in_query() {
        assert_eq!(escape_markdown("What is Section 420?"), "What is Section 420?");
        assert_eq!(escape_markdown("*a* `b`"), "\\*a\\* \\`b\\`");
        assert_eq!(escape_markdown("line\n\n# two"), "line  \\# two");

        let reply = canned_reply("Section 420\n\n# IPC");
        assert_eq!(reply.matches("\n\n").count(), 1);
        assert!(reply.contains("Section 420  \\# IPC"));
    }

    #[test]
    fn test_blank_messages_rejected() {
        let mut chat = Conversation::new();
        assert_eq!(chat.submit(""), Err(ChatError::EmptyMessage));
        assert_eq!(chat.submit("  \n\t"), Err(ChatError::EmptyMessage));
        assert!(chat.is_empty());
        assert_eq!(chat.phase(), ChatPhase::Empty);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let mut chat = Conversation::new();
        chat.submit("  hello \n").unwrap();
        assert_eq!(chat.messages()[0].content, "  hello \n");
    }

    #[test]
    fn test_single_reply_in_flight() {
        let mut chat = Conversation::new();
        let first = chat.submit("first").unwrap();
        assert_eq!(chat.submit("second"), Err(ChatError::ReplyPending));
        assert_eq!(chat.len(), 1);

        chat.deliver(&first);
        assert!(chat.submit("second").is_ok());
        assert_eq!(chat.len(), 3);
    }

    #[test]
    fn test_cancelled_ticket_delivers_nothing() {
        let mut chat = Conversation::new();
        let ticket = chat.submit("hello").unwrap();
        chat.cancel();

        assert!(chat.deliver(&ticket).is_none());
        assert_eq!(chat.len(), 1);
        assert!(chat.pending().is_none());
    }

    #[test]
    fn test_stale_ticket_cannot_answer_newer_query() {
        let mut chat = Conversation::new();
        let stale = chat.submit("old").unwrap();
        chat.cancel();
        let fresh = chat.submit("new").unwrap();

        assert!(chat.deliver(&stale).is_none());
        let reply = chat.deliver(&fresh).unwrap();
        assert!(reply.content.contains("\"new\""));
    }

    #[test]
    fn test_message_list_is_append_only() {
        let mut chat = Conversation::new();
        let mut seen: Vec<ChatMessage> = Vec::new();

        for text in ["one", "two", "three"] {
            let ticket = chat.submit(text).unwrap();
            chat.deliver(&ticket);

            assert!(chat.len() >= seen.len());
            assert_eq!(&chat.messages()[..seen.len()], seen.as_slice());
            seen = chat.messages().to_vec();
        }
        assert_eq!(chat.len(), 6);
        assert_eq!(chat.phase(), ChatPhase::Conversing);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("x");
        let b = ChatMessage::user("x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn test_canned_reply_has_disclaimer() {
        let reply = canned_reply("bail");
        assert!(reply.starts_with("Thank you for your question about \"bail\"."));
        assert!(reply.contains("**Note:**"));
        assert!(reply.contains("\n\n"));
    }

    #[test]
    fn test_suggested_queries() {
        let labels: Vec<_> = SUGGESTED_QUERIES.iter().map(|q| q.label).collect();
        assert_eq!(labels, ["Contracts", "Rights", "Property", "Business"]);
        assert!(SUGGESTED_QUERIES.iter().all(|q| !q.query.trim().is_empty()));
    }
}
