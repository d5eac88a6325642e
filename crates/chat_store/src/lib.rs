//! chat_store - Async action layer for the SOLIRIS client
//!
//! Each store owns its state behind `Arc<RwLock<_>>`, runs the
//! asynchronous operations against the remote service, and applies the
//! resulting transitions. Operations are single-shot: no retry, no
//! cancellation, and no deduplication of same-kind in-flight calls -
//! completions apply in arrival order.

mod auth_store;
mod chat_store;

pub use auth_store::{
    AuthStore, RegisterForm, MSG_FILL_ALL_FIELDS, MSG_FILL_REQUIRED_FIELDS,
    MSG_PASSWORDS_DO_NOT_MATCH, MSG_PASSWORD_TOO_SHORT,
};
pub use chat_store::ChatStore;
