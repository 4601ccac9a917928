mod filesystem;
mod storage;

pub use filesystem::FilesystemSessionStore;
pub use storage::SessionStore;

use crate::error::Result;
use crate::models::{AuthSession, Usuario};
use std::sync::{Arc, RwLock};

/// Shared handle over the current session. Every consumer holds a clone of
/// the same cell, so a `set` or `clear` is observed by all of them on their
/// next read. Mutations write through to the backing store before they are
/// published.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    current: Arc<RwLock<Option<AuthSession>>>,
}

impl Session {
    /// Empty session over the given store. Nothing is read from disk.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Bootstrap from whatever the store has persisted. Missing or corrupt
    /// data yields an empty session.
    pub fn initialize(store: Arc<dyn SessionStore>) -> Self {
        let restored = store.load();
        Self {
            store,
            current: Arc::new(RwLock::new(restored)),
        }
    }

    /// Persist and publish a new token/profile pair. The in-memory value is
    /// only replaced once the store write succeeded, so a failed save leaves
    /// the previous session intact rather than half-replaced.
    pub fn set(&self, token: String, usuario: Usuario) -> Result<()> {
        let session = AuthSession { token, usuario };
        self.store.save(&session)?;
        *self.current.write().expect("session lock poisoned") = Some(session);
        Ok(())
    }

    /// Drop the session, in memory and on disk. Idempotent and infallible:
    /// a failed store removal still leaves the in-memory session empty, and
    /// the next `load` treats leftover records as it would any stale data.
    pub fn clear(&self) {
        let _ = self.store.clear();
        *self.current.write().expect("session lock poisoned") = None;
    }

    /// Synchronous snapshot of the in-memory value. No I/O.
    pub fn current(&self) -> Option<AuthSession> {
        self.current.read().expect("session lock poisoned").clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn usuario(&self) -> Option<Usuario> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.usuario.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .expect("session lock poisoned")
            .is_some()
    }
}

/// Session restored from the default filesystem store.
pub fn load_session() -> Session {
    Session::initialize(Arc::new(FilesystemSessionStore::new()))
}
