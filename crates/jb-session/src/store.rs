//! The session store.

use std::sync::RwLock;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use jb_client::{SessionHooks, TokenProvider};
use jb_models::{User, UserUpdate};

use crate::error::SessionResult;
use crate::storage::{CredentialStore, StoredSession};

/// Session lifecycle events, consumed by the navigation shell.
///
/// `LoggedOut` covers both explicit logout and 401 invalidation; the
/// shell reacts by returning to the root route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
}

#[derive(Default)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
    authenticated: bool,
}

/// Process-wide session: current user, auth flag, and bearer token,
/// kept consistent with durable storage.
pub struct SessionStore {
    state: RwLock<SessionState>,
    store: Box<dyn CredentialStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Create the store and hydrate from durable storage.
    ///
    /// A missing token or an unparseable user document is treated as
    /// "not authenticated" and the stored state is cleared. This is
    /// self-healing, not an error surfaced to the caller.
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        let (events, _) = broadcast::channel(16);
        let session = Self {
            state: RwLock::new(SessionState::default()),
            store,
            events,
        };
        session.hydrate();
        session
    }

    fn hydrate(&self) {
        let stored = match self.store.load() {
            Ok(Some(stored)) if !stored.token.is_empty() => stored,
            Ok(Some(_)) => {
                debug!("Stored session has no token, clearing it");
                self.clear_storage();
                return;
            }
            Ok(None) => return,
            Err(e) => {
                debug!("Session hydrate failed, clearing stored credentials: {}", e);
                self.clear_storage();
                return;
            }
        };

        match serde_json::from_str::<User>(&stored.user) {
            Ok(user) => {
                let mut state = self.write();
                state.user = Some(user);
                state.token = Some(stored.token);
                state.authenticated = true;
            }
            Err(e) => {
                debug!("Stored user is corrupt, clearing session: {}", e);
                self.clear_storage();
            }
        }
    }

    fn clear_storage(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear session storage: {}", e);
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// The current user, if authenticated.
    pub fn current_user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().authenticated
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Subscribe to session lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Persist credentials, then update in-memory state.
    pub fn login(&self, user: User, token: &str) -> SessionResult<()> {
        let stored = StoredSession {
            token: token.to_string(),
            user: serde_json::to_string(&user)?,
        };
        self.store.save(&stored)?;

        {
            let mut state = self.write();
            state.user = Some(user);
            state.token = Some(token.to_string());
            state.authenticated = true;
        }
        let _ = self.events.send(SessionEvent::LoggedIn);
        Ok(())
    }

    /// Clear durable storage and in-memory state.
    pub fn logout(&self) -> SessionResult<()> {
        self.store.clear()?;

        {
            let mut state = self.write();
            *state = SessionState::default();
        }
        let _ = self.events.send(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Merge a partial update into the current user, durably and in
    /// memory. A no-op when nobody is logged in.
    ///
    /// Persists before touching memory, like `login`, so a failed save
    /// never leaves memory ahead of storage.
    pub fn update_user(&self, update: &UserUpdate) -> SessionResult<()> {
        let merged = {
            let state = self.read();
            let Some(user) = state.user.as_ref() else {
                return Ok(());
            };
            let mut user = user.clone();
            user.apply(update);
            user
        };

        self.persist_user(merged)
    }

    /// Replace the current user with a server-confirmed document,
    /// durably and in memory. A no-op when nobody is logged in.
    pub fn set_user(&self, user: User) -> SessionResult<()> {
        if self.read().user.is_none() {
            return Ok(());
        }
        self.persist_user(user)
    }

    fn persist_user(&self, user: User) -> SessionResult<()> {
        if let Some(token) = self.read().token.clone() {
            let stored = StoredSession {
                token,
                user: serde_json::to_string(&user)?,
            };
            self.store.save(&stored)?;
        }

        let mut state = self.write();
        if state.user.is_some() {
            state.user = Some(user);
        }
        Ok(())
    }
}

impl TokenProvider for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

impl SessionHooks for SessionStore {
    fn on_unauthorized(&self) {
        if let Err(e) = self.logout() {
            warn!("Failed to invalidate session after 401: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use jb_models::Role;

    fn sample_user() -> User {
        User {
            id: "u1".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            role: Role::Jobseeker,
            avatar: None,
            resume: None,
            company_name: None,
            company_logo: None,
            company_description: None,
        }
    }

    #[test]
    fn test_login_sets_state_and_persists_both_values() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session.login(sample_user(), "tok-123").unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().id, "u1");
        assert_eq!(session.token().as_deref(), Some("tok-123"));

        let stored = session.store.load().unwrap().unwrap();
        assert_eq!(stored.token, "tok-123");
        assert!(stored.user.contains("\"_id\":\"u1\""));
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session.login(sample_user(), "tok-123").unwrap();
        let mut events = session.subscribe();

        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(session.token().is_none());
        assert!(session.store.load().unwrap().is_none());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::LoggedOut);
    }

    #[test]
    fn test_hydrates_from_stored_credentials() {
        let stored = StoredSession {
            token: "tok-123".into(),
            user: serde_json::to_string(&sample_user()).unwrap(),
        };
        let session = SessionStore::new(Box::new(MemoryStore::with_session(stored)));

        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn test_corrupt_stored_user_self_heals() {
        let stored = StoredSession {
            token: "tok-123".into(),
            user: "{not json".into(),
        };
        let session = SessionStore::new(Box::new(MemoryStore::with_session(stored)));

        assert!(!session.is_authenticated());
        assert!(session.store.load().unwrap().is_none());
    }

    #[test]
    fn test_missing_token_means_not_authenticated() {
        let stored = StoredSession {
            token: String::new(),
            user: serde_json::to_string(&sample_user()).unwrap(),
        };
        let session = SessionStore::new(Box::new(MemoryStore::with_session(stored)));
        assert!(!session.is_authenticated());
        // The stale user blob is cleared, not left behind.
        assert!(session.store.load().unwrap().is_none());
    }

    #[test]
    fn test_update_user_roundtrip() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session.login(sample_user(), "tok-123").unwrap();

        session
            .update_user(&UserUpdate {
                name: Some("Ada L.".into()),
                ..Default::default()
            })
            .unwrap();

        // In-memory state reflects the change immediately.
        assert_eq!(session.current_user().unwrap().name, "Ada L.");

        // And so does durable storage.
        let stored = session.store.load().unwrap().unwrap();
        let user: User = serde_json::from_str(&stored.user).unwrap();
        assert_eq!(user.name, "Ada L.");
    }

    #[test]
    fn test_set_user_replaces_session_user_and_persists() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session.login(sample_user(), "tok-123").unwrap();

        let mut confirmed = sample_user();
        confirmed.name = "Ada L.".into();
        confirmed.avatar = Some("https://cdn.example.com/a.png".into());
        session.set_user(confirmed).unwrap();

        let user = session.current_user().unwrap();
        assert_eq!(user.name, "Ada L.");
        assert_eq!(user.avatar.as_deref(), Some("https://cdn.example.com/a.png"));

        let stored = session.store.load().unwrap().unwrap();
        assert!(stored.user.contains("Ada L."));
    }

    #[test]
    fn test_set_user_without_session_is_noop() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session.set_user(sample_user()).unwrap();
        assert!(session.current_user().is_none());
        assert!(session.store.load().unwrap().is_none());
    }

    /// Store whose saves always fail, for write-order checks.
    struct BrokenStore;

    impl CredentialStore for BrokenStore {
        fn load(&self) -> crate::error::SessionResult<Option<StoredSession>> {
            Ok(None)
        }

        fn save(&self, _session: &StoredSession) -> crate::error::SessionResult<()> {
            Err(crate::error::SessionError::storage("disk full"))
        }

        fn clear(&self) -> crate::error::SessionResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_save_leaves_memory_untouched() {
        let broken = SessionStore {
            state: RwLock::new(SessionState {
                user: Some(sample_user()),
                token: Some("tok-123".into()),
                authenticated: true,
            }),
            store: Box::new(BrokenStore),
            events: broadcast::channel(16).0,
        };

        let err = broken.update_user(&UserUpdate {
            name: Some("Ada L.".into()),
            ..Default::default()
        });
        assert!(err.is_err());
        // Memory still shows the last persisted state.
        assert_eq!(broken.current_user().unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn test_update_user_without_session_is_noop() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session
            .update_user(&UserUpdate {
                name: Some("Nobody".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_unauthorized_hook_logs_out() {
        let session = SessionStore::new(Box::new(MemoryStore::new()));
        session.login(sample_user(), "tok-123").unwrap();

        session.on_unauthorized();

        assert!(!session.is_authenticated());
        assert!(session.store.load().unwrap().is_none());
    }
}
