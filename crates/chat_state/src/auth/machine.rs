//! Auth transitions - FSM transition logic for the authentication
//! lifecycle.

use super::events::AuthEvent;
use super::state::{AuthPhase, AuthState};

/// Represents an applied transition.
#[derive(Debug, Clone)]
pub struct AuthTransition {
    /// The phase before the transition.
    pub from: AuthPhase,
    /// The phase after the transition.
    pub to: AuthPhase,
    /// The event that triggered the transition.
    pub event: AuthEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for the authentication lifecycle.
#[derive(Debug, Clone)]
pub struct AuthMachine {
    /// Current state.
    state: AuthState,
    /// Transition history (limited).
    history: Vec<AuthTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for AuthMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthMachine {
    /// Create a new machine in the anonymous state.
    pub fn new() -> Self {
        Self::with_state(AuthState::anonymous())
    }

    /// Create a machine with a specific initial state.
    pub fn with_state(state: AuthState) -> Self {
        Self {
            state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a machine bootstrapped from the token store.
    pub fn bootstrap(has_credential: bool) -> Self {
        Self::with_state(AuthState::bootstrap(has_credential))
    }

    /// Get the current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[AuthTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    ///
    /// Events that do not apply in the current phase leave the state
    /// untouched rather than failing; the transition's `changed` flag
    /// tells the two cases apart.
    pub fn handle_event(&mut self, event: AuthEvent) -> AuthTransition {
        let old_state = self.state.clone();
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        tracing::debug!(
            event = event.name(),
            from = ?old_state.phase,
            to = ?new_state.phase,
            changed,
            "auth transition"
        );
        self.state = new_state;

        let transition = AuthTransition {
            from: old_state.phase,
            to: self.state.phase,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    fn compute_next_state(state: &AuthState, event: &AuthEvent) -> AuthState {
        use AuthEvent::*;
        use AuthPhase::*;

        match (state.phase, event) {
            (Anonymous | AuthFailed, LoginStarted) => AuthState {
                phase: Authenticating,
                user: state.user.clone(),
                error: None,
            },

            (Authenticating, LoginSucceeded { user }) => AuthState {
                phase: Authenticated,
                user: Some(user.clone()),
                error: None,
            },

            // Validation failures are reported without a preceding
            // LoginStarted, so a failure applies from the idle phases
            // too.
            (Anonymous | AuthFailed | Authenticating, LoginFailed { error }) => AuthState {
                phase: AuthFailed,
                user: state.user.clone(),
                error: Some(error.clone()),
            },

            (Authenticated, ProfileLoaded { user }) => AuthState {
                phase: Authenticated,
                user: Some(user.clone()),
                error: state.error.clone(),
            },

            // Logout resets everything regardless of the prior phase;
            // the store layer clears both persisted credentials.
            (_, LoggedOut) => AuthState::anonymous(),

            (_, ErrorCleared) => AuthState {
                error: None,
                ..state.clone()
            },

            // No transition for anything else.
            _ => state.clone(),
        }
    }
}
