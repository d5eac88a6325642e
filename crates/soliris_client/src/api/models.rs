//! Request and response payloads for the SOLIRIS API.

use chat_core::{Message, Session, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Envelope returned by both login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: TokenPair,
}

/// The session listing comes back either as a bare array or wrapped in
/// a paginated `{results: [...]}` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SessionList {
    Paginated { results: Vec<Session> },
    Plain(Vec<Session>),
}

impl SessionList {
    pub fn into_vec(self) -> Vec<Session> {
        match self {
            SessionList::Plain(sessions) => sessions,
            SessionList::Paginated { results } => results,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionTitlePayload {
    pub titulo: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationResponse {
    #[serde(rename = "sessao")]
    pub session: Session,
    #[serde(rename = "mensagens")]
    pub messages: Vec<Message>,
    #[serde(rename = "total_mensagens")]
    pub total_messages: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub response: String,
    pub session_id: Option<String>,
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION_JSON: &str = r#"{
        "id": "s1",
        "titulo": "Conversa",
        "data_criacao": "2024-05-01T12:00:00Z",
        "data_atualizacao": "2024-05-01T12:00:00Z",
        "ativa": true,
        "quantidade_mensagens": 0
    }"#;

    #[test]
    fn session_list_accepts_bare_array() {
        let list: SessionList = serde_json::from_str(&format!("[{SESSION_JSON}]")).unwrap();
        assert_eq!(list.into_vec().len(), 1);
    }

    #[test]
    fn session_list_accepts_paginated_envelope() {
        let list: SessionList =
            serde_json::from_str(&format!(r#"{{"results": [{SESSION_JSON}]}}"#)).unwrap();
        let sessions = list.into_vec();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "s1");
    }

    #[test]
    fn send_message_request_omits_absent_session_id() {
        let request = SendMessageRequest {
            message: "hi".to_string(),
            session_id: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("session_id").is_none());
    }

    #[test]
    fn auth_response_envelope_decodes() {
        let response: AuthResponse = serde_json::from_str(
            r#"{
                "user": {"id": 1, "username": "ana", "email": "ana@example.com"},
                "tokens": {"access": "a", "refresh": "r"}
            }"#,
        )
        .unwrap();
        assert_eq!(response.user.username, "ana");
        assert_eq!(response.tokens.access, "a");
    }
}
