use serde_json::Value;
use thiserror::Error;

/// Message surfaced when the transport fails or a body cannot be read.
pub const COMMUNICATION_ERROR: &str = "Erro de comunicação";

/// Failure modes of a SOLIRIS API call.
///
/// The `Display` output is the user-facing message the state layer
/// stores in its error field, so every variant renders something a
/// person can read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service rejected a specific field (e.g. `username: ["..."]`).
    #[error("{message}")]
    Validation { field: String, message: String },

    /// Non-2xx response with a message taken from the body, or a
    /// generic `Erro HTTP {status}` when the body carried none.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response.
    #[error("Erro de comunicação")]
    Transport { detail: String },

    /// A 2xx response whose body could not be decoded.
    #[error("Erro de comunicação")]
    MalformedResponse,
}

/// Field keys probed before any other when scanning a validation body.
/// The order matches what the service most commonly rejects.
const KNOWN_FIELDS: &[&str] = &["username", "email", "password", "titulo"];

impl ApiError {
    /// Decode a non-success response body into an error.
    ///
    /// Probes, in order: a top-level `error` string, a top-level
    /// `detail` string, then per-field validation arrays. Anything else
    /// falls back to a generic message embedding the status code.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        if let Some(Value::Object(map)) = body {
            for key in ["error", "detail"] {
                if let Some(Value::String(message)) = map.get(key) {
                    return ApiError::Http {
                        status,
                        message: message.clone(),
                    };
                }
            }

            let field_error = |field: &str, value: &Value| {
                value
                    .as_array()
                    .and_then(|items| items.first())
                    .and_then(Value::as_str)
                    .map(|message| ApiError::Validation {
                        field: field.to_string(),
                        message: message.to_string(),
                    })
            };

            for key in KNOWN_FIELDS {
                if let Some(value) = map.get(*key) {
                    if let Some(err) = field_error(key, value) {
                        return err;
                    }
                }
            }
            for (key, value) in &map {
                if let Some(err) = field_error(key, value) {
                    return err;
                }
            }
        }

        ApiError::Http {
            status,
            message: format!("Erro HTTP {status}"),
        }
    }

    /// Status code for HTTP-level failures, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            detail: err.to_string(),
        }
    }
}
