//! Chat actions - everything that may mutate the chat state.

use chat_core::{Message, Session};
use serde::{Deserialize, Serialize};

/// Actions applied through [`super::reduce`].
///
/// The first group is synchronous UI intents; the rest are the
/// pending/fulfilled/rejected phases of the six asynchronous
/// operations, dispatched by the action layer around each network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    // ========== UI intents ==========
    SetInputMessage(String),
    ClearError,
    SelectSession(String),
    ClearCurrentSession,
    /// Optimistic local echo of user input or the assistant reply.
    AppendMessage(Message),
    StartEditingSession {
        session_id: String,
        current_title: String,
    },
    CancelEditingSession,
    UpdateEditingTitle(String),

    // ========== List sessions ==========
    SessionsLoadStarted,
    SessionsLoaded(Vec<Session>),
    SessionsLoadFailed(String),

    // ========== Load one session's messages ==========
    SessionLoadStarted,
    SessionLoaded {
        session: Session,
        messages: Vec<Message>,
    },
    SessionLoadFailed(String),

    // ========== Send message ==========
    SendStarted,
    SendFinished {
        /// Session id carried by the response; adopted as current when
        /// present (covers the no-session-yet case).
        session_id: Option<String>,
    },
    SendFailed(String),

    // ========== Create session ==========
    SessionCreateStarted,
    SessionCreated(Session),
    SessionCreateFailed(String),

    // ========== Rename session ==========
    TitleUpdateStarted,
    TitleUpdated(Session),
    TitleUpdateFailed(String),

    // ========== Delete session ==========
    SessionDeleteStarted,
    SessionDeleted(String),
    SessionDeleteFailed(String),
}

impl ChatAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetInputMessage(_) => "set_input_message",
            Self::ClearError => "clear_error",
            Self::SelectSession(_) => "select_session",
            Self::ClearCurrentSession => "clear_current_session",
            Self::AppendMessage(_) => "append_message",
            Self::StartEditingSession { .. } => "start_editing_session",
            Self::CancelEditingSession => "cancel_editing_session",
            Self::UpdateEditingTitle(_) => "update_editing_title",
            Self::SessionsLoadStarted => "sessions_load_started",
            Self::SessionsLoaded(_) => "sessions_loaded",
            Self::SessionsLoadFailed(_) => "sessions_load_failed",
            Self::SessionLoadStarted => "session_load_started",
            Self::SessionLoaded { .. } => "session_loaded",
            Self::SessionLoadFailed(_) => "session_load_failed",
            Self::SendStarted => "send_started",
            Self::SendFinished { .. } => "send_finished",
            Self::SendFailed(_) => "send_failed",
            Self::SessionCreateStarted => "session_create_started",
            Self::SessionCreated(_) => "session_created",
            Self::SessionCreateFailed(_) => "session_create_failed",
            Self::TitleUpdateStarted => "title_update_started",
            Self::TitleUpdated(_) => "title_updated",
            Self::TitleUpdateFailed(_) => "title_update_failed",
            Self::SessionDeleteStarted => "session_delete_started",
            Self::SessionDeleted(_) => "session_deleted",
            Self::SessionDeleteFailed(_) => "session_delete_failed",
        }
    }

    /// Check if this is the rejected phase of an async operation.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::SessionsLoadFailed(_)
                | Self::SessionLoadFailed(_)
                | Self::SendFailed(_)
                | Self::SessionCreateFailed(_)
                | Self::TitleUpdateFailed(_)
                | Self::SessionDeleteFailed(_)
        )
    }
}
