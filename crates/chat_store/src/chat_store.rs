//! Chat store.
//!
//! Owns the chat state and runs the six asynchronous operations,
//! wrapping each single-shot client call in its pending and
//! fulfilled/rejected transitions.

use std::sync::Arc;

use chat_core::{Message, Sender};
use chat_state::{reduce, ChatAction, ChatState};
use chrono::Utc;
use soliris_client::SolirisApi;
use tokio::sync::RwLock;

pub struct ChatStore<C: SolirisApi> {
    client: Arc<C>,
    state: Arc<RwLock<ChatState>>,
}

impl<C: SolirisApi> ChatStore<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(ChatState::new())),
        }
    }

    /// Snapshot of the current chat state.
    pub async fn snapshot(&self) -> ChatState {
        self.state.read().await.clone()
    }

    // ========== UI intents ==========

    pub async fn set_input_message(&self, text: &str) {
        self.apply(ChatAction::SetInputMessage(text.to_string()))
            .await;
    }

    pub async fn clear_error(&self) {
        self.apply(ChatAction::ClearError).await;
    }

    pub async fn select_session(&self, session_id: &str) {
        self.apply(ChatAction::SelectSession(session_id.to_string()))
            .await;
    }

    pub async fn clear_current_session(&self) {
        self.apply(ChatAction::ClearCurrentSession).await;
    }

    pub async fn start_editing_session(&self, session_id: &str, current_title: &str) {
        self.apply(ChatAction::StartEditingSession {
            session_id: session_id.to_string(),
            current_title: current_title.to_string(),
        })
        .await;
    }

    pub async fn cancel_editing_session(&self) {
        self.apply(ChatAction::CancelEditingSession).await;
    }

    pub async fn update_editing_title(&self, title: &str) {
        self.apply(ChatAction::UpdateEditingTitle(title.to_string()))
            .await;
    }

    // ========== Async operations ==========

    /// Reload the user's session list.
    pub async fn load_user_sessions(&self) {
        self.apply(ChatAction::SessionsLoadStarted).await;
        match self.client.list_sessions().await {
            Ok(sessions) => self.apply(ChatAction::SessionsLoaded(sessions)).await,
            Err(err) => {
                self.apply(ChatAction::SessionsLoadFailed(err.to_string()))
                    .await
            }
        }
    }

    /// Load a session's messages and make it current.
    ///
    /// A completion that arrives after the user has selected a
    /// different session still applies: the fulfilled transition adopts
    /// the response's session id whatever is selected by then.
    pub async fn load_session(&self, session_id: &str) {
        self.apply(ChatAction::SessionLoadStarted).await;
        match self.client.load_conversation(session_id).await {
            Ok(conversation) => {
                self.apply(ChatAction::SessionLoaded {
                    session: conversation.session,
                    messages: conversation.messages,
                })
                .await
            }
            Err(err) => {
                self.apply(ChatAction::SessionLoadFailed(err.to_string()))
                    .await
            }
        }
    }

    /// Send a message, echoing it locally before the request goes out.
    ///
    /// The echo is not rolled back when the send fails; the user sees
    /// their message with an error banner and can retry.
    pub async fn send_message(&self, message: &str, session_id: Option<&str>) {
        {
            let mut state = self.state.write().await;
            reduce(&mut state, ChatAction::SendStarted);
            let echo =
                Message::provisional(Utc::now().timestamp_millis(), message, Sender::User);
            reduce(&mut state, ChatAction::AppendMessage(echo));
        }

        match self.client.send_message(message, session_id).await {
            Ok(response) => {
                let mut state = self.state.write().await;
                let reply = Message::provisional(
                    Utc::now().timestamp_millis() + 1,
                    response.response,
                    Sender::Assistant,
                );
                reduce(&mut state, ChatAction::AppendMessage(reply));
                reduce(
                    &mut state,
                    ChatAction::SendFinished {
                        session_id: response.session_id,
                    },
                );
            }
            Err(err) => self.apply(ChatAction::SendFailed(err.to_string())).await,
        }
    }

    /// Create a session and select it.
    pub async fn create_new_session(&self, title: &str) {
        self.apply(ChatAction::SessionCreateStarted).await;
        match self.client.create_session(title).await {
            Ok(session) => self.apply(ChatAction::SessionCreated(session)).await,
            Err(err) => {
                self.apply(ChatAction::SessionCreateFailed(err.to_string()))
                    .await
            }
        }
    }

    /// Rename a session; the edit buffer clears only on success.
    pub async fn update_session_title(&self, session_id: &str, title: &str) {
        self.apply(ChatAction::TitleUpdateStarted).await;
        match self.client.rename_session(session_id, title).await {
            Ok(session) => self.apply(ChatAction::TitleUpdated(session)).await,
            Err(err) => {
                self.apply(ChatAction::TitleUpdateFailed(err.to_string()))
                    .await
            }
        }
    }

    /// Delete a session, clearing the selection when it was current.
    pub async fn delete_session(&self, session_id: &str) {
        self.apply(ChatAction::SessionDeleteStarted).await;
        match self.client.delete_session(session_id).await {
            Ok(()) => {
                self.apply(ChatAction::SessionDeleted(session_id.to_string()))
                    .await
            }
            Err(err) => {
                self.apply(ChatAction::SessionDeleteFailed(err.to_string()))
                    .await
            }
        }
    }

    async fn apply(&self, action: ChatAction) {
        let mut state = self.state.write().await;
        reduce(&mut state, action);
    }
}
