use crate::error::Result;
use crate::models::AuthSession;

/// Trait for session storage backends
pub trait SessionStore: Send + Sync {
    /// Read the persisted session, if a usable one exists. Corrupt or
    /// partial data is treated as absent, never as an error.
    fn load(&self) -> Option<AuthSession>;

    /// Persist the token and profile together.
    fn save(&self, session: &AuthSession) -> Result<()>;

    /// Remove both persisted records. Removing an already-empty store
    /// succeeds.
    fn clear(&self) -> Result<()>;
}
