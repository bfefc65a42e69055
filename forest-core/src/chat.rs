//! Append-only chat thread for the analysis assistant widget.
//!
//! The thread is seeded with three fixed messages when an analysis arrives
//! for a freshly fetched record, then grows by one user message and one
//! assistant reply per round trip. Messages are never edited or removed for
//! the lifetime of a seeded session; a new analysis starts a new session.

/// Fixed apology appended when the chat backend is unreachable or errors.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request. Please try again.";

const GREETING: &str =
    "Hello! I'm your Forest Analysis Assistant. I've analyzed the forest data for your selected location.";
const INVITE: &str =
    "You can ask me questions about this data or forest conservation in general. How can I help you?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

/// Ordered message thread plus the in-flight flag for the reply spinner.
#[derive(Debug, Clone, Default)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    pending: bool,
    next_id: u64,
}

impl ChatThread {
    pub fn new() -> Self {
        ChatThread::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn is_seeded(&self) -> bool {
        !self.messages.is_empty()
    }

    fn push(&mut self, text: &str, sender: Sender) -> u64 {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text: text.to_string(),
            sender,
        });
        self.next_id
    }

    /// Start a session for a new analysis: greeting, the analysis text
    /// verbatim, and the invitation to ask questions.
    pub fn seed(&mut self, analysis: &str) {
        self.messages.clear();
        self.pending = false;
        self.push(GREETING, Sender::Assistant);
        self.push(analysis, Sender::Assistant);
        self.push(INVITE, Sender::Assistant);
    }

    /// Append the user's message optimistically and flag the reply as
    /// pending. Blank input is ignored.
    pub fn push_user(&mut self, text: &str) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.pending = true;
        Some(self.push(trimmed, Sender::User))
    }

    /// Append the assistant's reply and clear the pending flag.
    pub fn apply_reply(&mut self, text: &str) {
        self.push(text, Sender::Assistant);
        self.pending = false;
    }

    /// Append the fixed fallback apology and clear the pending flag.
    pub fn apply_failure(&mut self) {
        self.push(FALLBACK_REPLY, Sender::Assistant);
        self.pending = false;
    }
}
