//! Credential storage backends.
//!
//! Durable client-side state is exactly two values: the token string and
//! the serialized user object. The user stays serialized here so a
//! corrupt user document can be detected (and healed) at hydration time
//! without failing the load itself.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SessionError, SessionResult};

/// The two persisted session values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token
    pub token: String,
    /// User document, serialized as JSON
    pub user: String,
}

/// Durable storage for session credentials.
pub trait CredentialStore: Send + Sync {
    /// Load the stored session, `None` when nothing is stored.
    fn load(&self) -> SessionResult<Option<StoredSession>>;

    /// Persist the session.
    fn save(&self, session: &StoredSession) -> SessionResult<()>;

    /// Remove any stored session.
    fn clear(&self) -> SessionResult<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed credential store (one JSON file in the config dir).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn default_location() -> SessionResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| SessionError::storage("No config directory available"))?;
        Ok(Self::new(base.join("jobboard").join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> SessionResult<Option<StoredSession>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session: StoredSession = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, raw)?;
        debug!("Persisted session credentials to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory credential store for tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<StoredSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-existing credentials.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> SessionResult<Option<StoredSession>> {
        Ok(self.lock().clone())
    }

    fn save(&self, session: &StoredSession) -> SessionResult<()> {
        *self.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.lock() = None;
        Ok(())
    }
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<StoredSession>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> StoredSession {
        StoredSession {
            token: "tok-123".into(),
            user: r#"{"_id":"u1"}"#.into(),
        }
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());

        store.save(&sample_session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample_session()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/session.json"));
        store.save(&sample_session()).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.save(&sample_session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample_session()));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
