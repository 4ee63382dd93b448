//! Durable session store for the job-board client.
//!
//! Holds the current user and authentication flag, persisted as two
//! values (token string, serialized user) through a storage backend.
//! Hydration is self-healing: corrupt or partial stored state clears
//! itself instead of surfacing an error.

pub mod error;
pub mod storage;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use storage::{CredentialStore, FileStore, MemoryStore, StoredSession};
pub use store::{SessionEvent, SessionStore};
