use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message.
///
/// Ids are numeric and locally provisional until the server confirms
/// them; `order` is server-assigned, with 0 used as the local
/// placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "conteudo")]
    pub content: String,
    #[serde(rename = "remetente")]
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "ordem")]
    pub order: i32,
}

impl Message {
    /// Build a locally-constructed message with a provisional id.
    ///
    /// Used for the optimistic user echo and the assistant reply before
    /// the server's authoritative copy is loaded; `order` is left at the
    /// 0 placeholder for the backend to correct on reload.
    pub fn provisional(id: i64, content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            order: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_uses_lowercase_wire_values() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn deserializes_wire_names() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": 12,
                "conteudo": "Olá",
                "remetente": "assistant",
                "timestamp": "2024-05-01T12:00:00Z",
                "ordem": 3
            }"#,
        )
        .unwrap();
        assert_eq!(message.sender, Sender::Assistant);
        assert_eq!(message.content, "Olá");
        assert_eq!(message.order, 3);
    }

    #[test]
    fn provisional_message_has_order_zero() {
        let message = Message::provisional(42, "hi", Sender::User);
        assert_eq!(message.id, 42);
        assert_eq!(message.order, 0);
        assert_eq!(message.sender, Sender::User);
    }
}
