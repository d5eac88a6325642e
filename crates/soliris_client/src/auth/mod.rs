//! Credential persistence for the SOLIRIS client.

mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
