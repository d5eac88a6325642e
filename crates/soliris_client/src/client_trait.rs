use async_trait::async_trait;
use chat_core::{Session, User};

use crate::api::models::{
    AuthResponse, ConversationResponse, RegisterRequest, SendMessageResponse,
};
use crate::error::ApiError;

/// Remote service boundary.
///
/// One method per route; every call is single-shot, with no automatic
/// retry or cancellation. The store layer depends on this trait so it
/// can be exercised against a scripted implementation in tests.
#[async_trait]
pub trait SolirisApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;

    async fn register(&self, form: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError>;

    async fn profile(&self) -> Result<User, ApiError>;

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError>;

    async fn create_session(&self, title: &str) -> Result<Session, ApiError>;

    async fn rename_session(&self, session_id: &str, title: &str) -> Result<Session, ApiError>;

    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError>;

    async fn load_conversation(&self, session_id: &str) -> Result<ConversationResponse, ApiError>;

    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<SendMessageResponse, ApiError>;
}
