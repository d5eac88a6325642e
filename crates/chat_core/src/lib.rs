//! chat_core - Core types and configuration for the SOLIRIS chat client
//!
//! This crate provides the foundational types used across all client crates:
//! - `user` - the authenticated user identity record
//! - `session` - conversation session records
//! - `message` - chat messages and their sender
//! - `config` - runtime configuration (API base URL)

pub mod config;
pub mod message;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use config::Config;
pub use message::{Message, Sender};
pub use session::Session;
pub use user::User;
