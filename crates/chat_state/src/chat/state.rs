//! Chat state record.

use chat_core::{Message, Session};
use serde::{Deserialize, Serialize};

/// State behind the two-pane chat view: the session list, the currently
/// selected conversation, and the in-progress input/edit buffers.
///
/// The three loading flags belong to three independent in-flight
/// operations and are never inferred from each other. A single error
/// slot is kept, last-write-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatState {
    /// Selected session id; `None` means the "new chat" state.
    pub current_session_id: Option<String>,
    /// Messages of the selected session only; replaced wholesale on
    /// selection change or reload.
    pub current_messages: Vec<Message>,

    /// The user's sessions, in server-returned order (newly created
    /// ones are prepended locally for immediate feedback).
    pub user_sessions: Vec<Session>,

    pub is_loading_sessions: bool,
    pub is_sending_message: bool,
    pub is_loading_messages: bool,

    /// Draft of the message being typed.
    pub input_message: String,

    /// Rename-in-progress buffer; non-empty only while a title edit is
    /// underway.
    pub editing_session_id: Option<String>,
    pub editing_session_title: String,

    pub error: Option<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given session is the selected one.
    pub fn is_current(&self, session_id: &str) -> bool {
        self.current_session_id.as_deref() == Some(session_id)
    }

    /// Look up a session in the list by id.
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.user_sessions.iter().find(|s| s.id == session_id)
    }
}
