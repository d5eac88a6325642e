//! Chat reducer - applies an action to the chat state.

use super::actions::ChatAction;
use super::state::ChatState;

/// Apply one action to the state.
///
/// This is the single mutation entry point; each call is a discrete,
/// non-preemptible transition applied in event order.
pub fn reduce(state: &mut ChatState, action: ChatAction) {
    tracing::debug!(action = action.name(), "applying chat action");

    match action {
        // ========== UI intents ==========
        ChatAction::SetInputMessage(text) => {
            state.input_message = text;
        }
        ChatAction::ClearError => {
            state.error = None;
        }
        ChatAction::SelectSession(session_id) => {
            state.current_session_id = Some(session_id);
            // Placeholder until the load completes.
            state.current_messages.clear();
        }
        ChatAction::ClearCurrentSession => {
            state.current_session_id = None;
            state.current_messages.clear();
        }
        ChatAction::AppendMessage(message) => {
            state.current_messages.push(message);
        }
        ChatAction::StartEditingSession {
            session_id,
            current_title,
        } => {
            state.editing_session_id = Some(session_id);
            state.editing_session_title = current_title;
        }
        ChatAction::CancelEditingSession => {
            state.editing_session_id = None;
            state.editing_session_title.clear();
        }
        ChatAction::UpdateEditingTitle(title) => {
            state.editing_session_title = title;
        }

        // ========== List sessions ==========
        ChatAction::SessionsLoadStarted => {
            state.is_loading_sessions = true;
            state.error = None;
        }
        ChatAction::SessionsLoaded(sessions) => {
            state.is_loading_sessions = false;
            state.user_sessions = sessions;
        }
        ChatAction::SessionsLoadFailed(error) => {
            state.is_loading_sessions = false;
            state.error = Some(error);
        }

        // ========== Load one session's messages ==========
        ChatAction::SessionLoadStarted => {
            state.is_loading_messages = true;
            state.error = None;
        }
        ChatAction::SessionLoaded { session, messages } => {
            state.is_loading_messages = false;
            state.current_messages = messages;
            state.current_session_id = Some(session.id);
        }
        ChatAction::SessionLoadFailed(error) => {
            state.is_loading_messages = false;
            state.error = Some(error);
        }

        // ========== Send message ==========
        ChatAction::SendStarted => {
            state.is_sending_message = true;
            state.error = None;
        }
        ChatAction::SendFinished { session_id } => {
            state.is_sending_message = false;
            state.input_message.clear();
            // Adopt the id when the send created a new session.
            if let Some(session_id) = session_id {
                state.current_session_id = Some(session_id);
            }
        }
        ChatAction::SendFailed(error) => {
            // The optimistic user echo stays in current_messages.
            state.is_sending_message = false;
            state.error = Some(error);
        }

        // ========== Create session ==========
        ChatAction::SessionCreateStarted => {
            state.is_loading_sessions = true;
            state.error = None;
        }
        ChatAction::SessionCreated(session) => {
            state.is_loading_sessions = false;
            state.current_session_id = Some(session.id.clone());
            state.user_sessions.insert(0, session);
            state.current_messages.clear();
        }
        ChatAction::SessionCreateFailed(error) => {
            state.is_loading_sessions = false;
            state.error = Some(error);
        }

        // ========== Rename session ==========
        ChatAction::TitleUpdateStarted => {
            state.error = None;
        }
        ChatAction::TitleUpdated(session) => {
            if let Some(entry) = state
                .user_sessions
                .iter_mut()
                .find(|existing| existing.id == session.id)
            {
                *entry = session;
            }
            // Cleared unconditionally, even when the session vanished
            // from the list in the meantime.
            state.editing_session_id = None;
            state.editing_session_title.clear();
        }
        ChatAction::TitleUpdateFailed(error) => {
            // The edit buffer is kept so the user can retry.
            state.error = Some(error);
        }

        // ========== Delete session ==========
        ChatAction::SessionDeleteStarted => {
            state.error = None;
        }
        ChatAction::SessionDeleted(session_id) => {
            state.user_sessions.retain(|s| s.id != session_id);
            if state.is_current(&session_id) {
                state.current_session_id = None;
                state.current_messages.clear();
            }
        }
        ChatAction::SessionDeleteFailed(error) => {
            state.error = Some(error);
        }
    }
}
