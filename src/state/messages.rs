//! Toast notification queue.
//!
//! DESIGN
//! ======
//! The queue only tracks which messages are visible. Expiry timers live in
//! the component layer, which calls [`MessagesState::remove`] when a
//! message's duration elapses; a duration of `0` keeps it until dismissed.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::config;

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Warning,
    Info,
    Success,
}

impl MessageKind {
    /// CSS modifier used by the toast component.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "message--error",
            Self::Warning => "message--warning",
            Self::Info => "message--info",
            Self::Success => "message--success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub content: String,
    /// Milliseconds before auto-dismiss; `0` means sticky.
    pub duration_ms: u32,
}

/// Visible toasts in display order.
#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub items: Vec<Message>,
    next_id: u64,
}

impl MessagesState {
    /// Queue a message and return its id.
    pub fn push(&mut self, kind: MessageKind, content: impl Into<String>, duration_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Message {
            id,
            kind,
            content: content.into(),
            duration_ms,
        });
        id
    }

    pub fn error(&mut self, content: impl Into<String>) -> u64 {
        self.push(MessageKind::Error, content, config::DEFAULT_MESSAGE_DURATION_MS)
    }

    pub fn warning(&mut self, content: impl Into<String>) -> u64 {
        self.push(MessageKind::Warning, content, config::DEFAULT_MESSAGE_DURATION_MS)
    }

    pub fn info(&mut self, content: impl Into<String>) -> u64 {
        self.push(MessageKind::Info, content, config::DEFAULT_MESSAGE_DURATION_MS)
    }

    pub fn success(&mut self, content: impl Into<String>) -> u64 {
        self.push(MessageKind::Success, content, config::DEFAULT_MESSAGE_DURATION_MS)
    }

    /// Drop the message with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|m| m.id != id);
    }
}
