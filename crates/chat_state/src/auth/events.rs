//! Auth events - what can drive an authentication transition.

use chat_core::User;
use serde::{Deserialize, Serialize};

/// Events consumed by the [`super::AuthMachine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEvent {
    /// A login or register request is about to be sent.
    LoginStarted,

    /// The service accepted the credentials.
    LoginSucceeded { user: User },

    /// The service rejected the attempt, or validation failed before
    /// any request went out.
    LoginFailed { error: String },

    /// A profile fetch repopulated the user record.
    ProfileLoaded { user: User },

    /// The user signed out.
    LoggedOut,

    /// The error banner was dismissed.
    ErrorCleared,
}

impl AuthEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginStarted => "login_started",
            Self::LoginSucceeded { .. } => "login_succeeded",
            Self::LoginFailed { .. } => "login_failed",
            Self::ProfileLoaded { .. } => "profile_loaded",
            Self::LoggedOut => "logged_out",
            Self::ErrorCleared => "error_cleared",
        }
    }
}
