//! Authentication state machine
//!
//! Event-driven FSM covering the login/register/logout lifecycle.

mod events;
mod machine;
mod state;

pub use events::AuthEvent;
pub use machine::{AuthMachine, AuthTransition};
pub use state::{AuthPhase, AuthState};
