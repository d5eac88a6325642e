//! soliris_client - HTTP client for the SOLIRIS feedback backend
//!
//! Covers the full API surface (auth, sessions, conversation) plus the
//! persisted credential store that every authenticated call reads from.

pub mod api;
pub mod auth;
pub mod client_trait;
pub mod error;

pub use api::client::SolirisClient;
pub use auth::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use chat_core::Config;
pub use client_trait::SolirisApi;
pub use error::ApiError;
