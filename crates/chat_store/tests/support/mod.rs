//! Scripted SolirisApi implementation for store tests.
//!
//! Each method consumes a pre-loaded result; calling an operation that
//! was not scripted panics, which doubles as an assertion that
//! validation failures never reach the network.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chat_core::{Message, Sender, Session, User};
use chrono::Utc;
use soliris_client::api::models::{
    AuthResponse, ConversationResponse, RegisterRequest, SendMessageResponse, TokenPair,
};
use soliris_client::{ApiError, SolirisApi};

type Slot<T> = Mutex<Option<Result<T, ApiError>>>;

#[derive(Default)]
pub struct StubApi {
    pub login_response: Slot<AuthResponse>,
    pub register_response: Slot<AuthResponse>,
    pub logout_response: Slot<()>,
    pub profile_response: Slot<User>,
    pub list_sessions_response: Slot<Vec<Session>>,
    pub create_session_response: Slot<Session>,
    pub rename_session_response: Slot<Session>,
    pub delete_session_response: Slot<()>,
    pub load_conversation_response: Slot<ConversationResponse>,
    pub send_message_response: Slot<SendMessageResponse>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(self, result: Result<AuthResponse, ApiError>) -> Self {
        *self.login_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_register(self, result: Result<AuthResponse, ApiError>) -> Self {
        *self.register_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_logout(self, result: Result<(), ApiError>) -> Self {
        *self.logout_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_profile(self, result: Result<User, ApiError>) -> Self {
        *self.profile_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_list_sessions(self, result: Result<Vec<Session>, ApiError>) -> Self {
        *self.list_sessions_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_create_session(self, result: Result<Session, ApiError>) -> Self {
        *self.create_session_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_rename_session(self, result: Result<Session, ApiError>) -> Self {
        *self.rename_session_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_delete_session(self, result: Result<(), ApiError>) -> Self {
        *self.delete_session_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_load_conversation(self, result: Result<ConversationResponse, ApiError>) -> Self {
        *self.load_conversation_response.lock().unwrap() = Some(result);
        self
    }

    pub fn with_send_message(self, result: Result<SendMessageResponse, ApiError>) -> Self {
        *self.send_message_response.lock().unwrap() = Some(result);
        self
    }

    fn take<T>(slot: &Slot<T>, operation: &str) -> Result<T, ApiError> {
        slot.lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| panic!("unexpected {operation} call"))
    }
}

#[async_trait]
impl SolirisApi for StubApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        Self::take(&self.login_response, "login")
    }

    async fn register(&self, _form: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        Self::take(&self.register_response, "register")
    }

    async fn logout(&self, _refresh_token: &str) -> Result<(), ApiError> {
        Self::take(&self.logout_response, "logout")
    }

    async fn profile(&self) -> Result<User, ApiError> {
        Self::take(&self.profile_response, "profile")
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        Self::take(&self.list_sessions_response, "list_sessions")
    }

    async fn create_session(&self, _title: &str) -> Result<Session, ApiError> {
        Self::take(&self.create_session_response, "create_session")
    }

    async fn rename_session(&self, _session_id: &str, _title: &str) -> Result<Session, ApiError> {
        Self::take(&self.rename_session_response, "rename_session")
    }

    async fn delete_session(&self, _session_id: &str) -> Result<(), ApiError> {
        Self::take(&self.delete_session_response, "delete_session")
    }

    async fn load_conversation(&self, _session_id: &str) -> Result<ConversationResponse, ApiError> {
        Self::take(&self.load_conversation_response, "load_conversation")
    }

    async fn send_message(
        &self,
        _message: &str,
        _session_id: Option<&str>,
    ) -> Result<SendMessageResponse, ApiError> {
        Self::take(&self.send_message_response, "send_message")
    }
}

// ========== Fixture helpers ==========

pub fn sample_user() -> User {
    User {
        id: 1,
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Souza".to_string(),
        is_active: true,
    }
}

pub fn auth_response() -> AuthResponse {
    AuthResponse {
        user: sample_user(),
        tokens: TokenPair {
            access: "acc-1".to_string(),
            refresh: "ref-1".to_string(),
        },
    }
}

pub fn session(id: &str, title: &str) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        active: true,
        message_count: 0,
    }
}

pub fn server_message(id: i64, content: &str, sender: Sender, order: i32) -> Message {
    Message {
        id,
        content: content.to_string(),
        sender,
        timestamp: Utc::now(),
        order,
    }
}

pub fn conversation(session_id: &str, messages: Vec<Message>) -> ConversationResponse {
    let total = messages.len() as u32;
    ConversationResponse {
        session: session(session_id, "Conversa"),
        messages,
        total_messages: total,
    }
}

pub fn send_response(reply: &str, session_id: Option<&str>) -> SendMessageResponse {
    SendMessageResponse {
        response: reply.to_string(),
        session_id: session_id.map(str::to_string),
        request_id: Some("req-1".to_string()),
    }
}
