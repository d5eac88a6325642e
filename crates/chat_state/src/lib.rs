//! chat_state - State machines for the SOLIRIS client
//!
//! This crate provides the two state containers behind the UI:
//! - `auth` - event-driven FSM for the authentication lifecycle
//! - `chat` - chat/session record mutated through a reducer

pub mod auth;
pub mod chat;

// Re-export commonly used types
pub use auth::{AuthEvent, AuthMachine, AuthPhase, AuthState, AuthTransition};
pub use chat::{reduce, ChatAction, ChatState};
