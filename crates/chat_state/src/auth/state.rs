//! Auth states - the phases of the authentication lifecycle.

use chat_core::User;
use serde::{Deserialize, Serialize};

/// Phase of the authentication lifecycle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    /// No credential; login and register are available.
    Anonymous,

    /// A login or register request is in flight.
    Authenticating,

    /// A credential is held. The user record may still be absent when
    /// the phase was restored from a persisted credential at boot.
    Authenticated,

    /// The last login or register attempt failed.
    AuthFailed,
}

impl Default for AuthPhase {
    fn default() -> Self {
        AuthPhase::Anonymous
    }
}

impl AuthPhase {
    /// Check if a login attempt may start from this phase.
    pub fn accepts_login(&self) -> bool {
        matches!(self, Self::Anonymous | Self::AuthFailed)
    }

    /// Get a human-readable description of the current phase.
    pub fn description(&self) -> &str {
        match self {
            Self::Anonymous => "Signed out",
            Self::Authenticating => "Signing in",
            Self::Authenticated => "Signed in",
            Self::AuthFailed => "Sign-in failed",
        }
    }
}

/// Full authentication state: phase plus the user record and the last
/// error message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial shape for a process with no persisted credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Initial shape derived from the token store at boot.
    ///
    /// A persisted credential restores the authenticated phase, but the
    /// user record stays empty until a profile fetch or a fresh login
    /// repopulates it.
    pub fn bootstrap(has_credential: bool) -> Self {
        Self {
            phase: if has_credential {
                AuthPhase::Authenticated
            } else {
                AuthPhase::Anonymous
            },
            user: None,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Authenticating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_anonymous() {
        let state = AuthState::default();
        assert_eq!(state.phase, AuthPhase::Anonymous);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn bootstrap_with_credential_is_authenticated_without_user() {
        let state = AuthState::bootstrap(true);
        assert!(state.is_authenticated());
        assert!(state.user.is_none());
    }

    #[test]
    fn bootstrap_without_credential_is_anonymous() {
        assert_eq!(AuthState::bootstrap(false), AuthState::anonymous());
    }

    #[test]
    fn login_allowed_from_anonymous_and_failed() {
        assert!(AuthPhase::Anonymous.accepts_login());
        assert!(AuthPhase::AuthFailed.accepts_login());
        assert!(!AuthPhase::Authenticating.accepts_login());
        assert!(!AuthPhase::Authenticated.accepts_login());
    }
}
