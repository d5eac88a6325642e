//! Session token store.
//!
//! Holds the access/refresh credential pair. The file-backed store
//! outlives the process; what it holds at boot decides whether the
//! client starts authenticated. No validation of token structure is
//! performed here.

use std::fs::{create_dir_all, read_to_string, remove_file, write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

const ACCESS_TOKEN_FILE: &str = ".access_token";
const REFRESH_TOKEN_FILE: &str = ".refresh_token";

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TokenStoreError>;

/// Persisted holder for the current credential pair.
pub trait TokenStore: Send + Sync {
    /// Currently stored access credential, if any.
    fn access_token(&self) -> Option<String>;

    /// Currently stored refresh credential, if any.
    fn refresh_token(&self) -> Option<String>;

    /// Persist a new credential pair, replacing any previous one.
    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()>;

    /// Remove both credentials together.
    fn clear(&self) -> Result<()>;
}

/// File-backed token store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn read_token(&self, file_name: &str) -> Option<String> {
        let path = self.base_dir.join(file_name);
        let content = read_to_string(path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn remove_token(&self, file_name: &str) -> Result<()> {
        let path = self.base_dir.join(file_name);
        if path.exists() {
            remove_file(path)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        self.read_token(ACCESS_TOKEN_FILE)
    }

    fn refresh_token(&self) -> Option<String> {
        self.read_token(REFRESH_TOKEN_FILE)
    }

    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        create_dir_all(&self.base_dir)?;
        write(self.base_dir.join(ACCESS_TOKEN_FILE), access)?;
        write(self.base_dir.join(REFRESH_TOKEN_FILE), refresh)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.remove_token(ACCESS_TOKEN_FILE)?;
        self.remove_token(REFRESH_TOKEN_FILE)?;
        Ok(())
    }
}

/// In-memory token store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: RwLock<TokenPairSlot>,
}

#[derive(Debug, Default)]
struct TokenPairSlot {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already holding a credential pair.
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        Self {
            inner: RwLock::new(TokenPairSlot {
                access: Some(access.to_string()),
                refresh: Some(refresh.to_string()),
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.inner.read().expect("token store lock").access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.read().expect("token store lock").refresh.clone()
    }

    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let mut slot = self.inner.write().expect("token store lock");
        slot.access = Some(access.to_string());
        slot.refresh = Some(refresh.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.inner.write().expect("token store lock");
        slot.access = None;
        slot.refresh = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_tokens() {
        let dir = tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path());

        assert!(store.access_token().is_none());
        store.set_tokens("access-1", "refresh-1").expect("set");
        assert_eq!(store.access_token().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempdir().expect("tempdir");
        {
            let store = FileTokenStore::new(dir.path());
            store.set_tokens("access-1", "refresh-1").expect("set");
        }
        let reopened = FileTokenStore::new(dir.path());
        assert_eq!(reopened.access_token().as_deref(), Some("access-1"));
    }

    #[test]
    fn file_store_trims_whitespace() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join(ACCESS_TOKEN_FILE), "  token-value \n").expect("write");

        let store = FileTokenStore::new(dir.path());
        assert_eq!(store.access_token().as_deref(), Some("token-value"));
    }

    #[test]
    fn clear_removes_both_credentials() {
        let dir = tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path());
        store.set_tokens("access-1", "refresh-1").expect("set");

        store.clear().expect("clear");
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());

        // Clearing an already-empty store is fine.
        store.clear().expect("clear again");
    }

    #[test]
    fn memory_store_round_trips_tokens() {
        let store = MemoryTokenStore::with_tokens("a", "r");
        assert_eq!(store.access_token().as_deref(), Some("a"));
        store.clear().expect("clear");
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
