use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A conversation session as returned by the service.
///
/// Ids are server-assigned strings; the wire format uses the service's
/// Portuguese field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "data_criacao")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "data_atualizacao")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "ativa", default = "default_active")]
    pub active: bool,
    #[serde(rename = "quantidade_mensagens", default)]
    pub message_count: u32,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let session: Session = serde_json::from_str(
            r#"{
                "id": "abc",
                "titulo": "Primeira conversa",
                "data_criacao": "2024-05-01T12:00:00Z",
                "data_atualizacao": "2024-05-01T12:30:00Z",
                "ativa": true,
                "quantidade_mensagens": 4
            }"#,
        )
        .unwrap();
        assert_eq!(session.id, "abc");
        assert_eq!(session.title, "Primeira conversa");
        assert_eq!(session.message_count, 4);
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let session = Session {
            id: "abc".to_string(),
            title: "Nova conversa".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            active: true,
            message_count: 0,
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["titulo"], "Nova conversa");
        assert!(value.get("title").is_none());
    }
}
