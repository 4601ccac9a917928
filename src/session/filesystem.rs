use super::storage::SessionStore;
use crate::error::Result;
use crate::models::AuthSession;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "current_user.json";

/// Stores the session as two records under the cache directory: the bare
/// token and the serialized profile. Both are written together and removed
/// together.
pub struct FilesystemSessionStore;

impl FilesystemSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn get_cache_dir(&self) -> PathBuf {
        let home = env::var("HOME").expect("HOME environment variable not set");
        let cache_dir = Path::new(&home).join(".cache").join("tienda");
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).expect("Failed to create cache directory");
        }
        cache_dir
    }
}

impl SessionStore for FilesystemSessionStore {
    fn load(&self) -> Option<AuthSession> {
        let cache_dir = self.get_cache_dir();

        let token = fs::read_to_string(cache_dir.join(TOKEN_FILE))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let usuario = fs::read_to_string(cache_dir.join(USER_FILE))
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok());

        match (token, usuario) {
            (Some(token), Some(usuario)) => Some(AuthSession { token, usuario }),
            (None, None) => None,
            _ => {
                // One record without the other is unusable; drop the leftover
                // so the next load starts clean.
                let _ = fs::remove_file(cache_dir.join(TOKEN_FILE));
                let _ = fs::remove_file(cache_dir.join(USER_FILE));
                None
            }
        }
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        let cache_dir = self.get_cache_dir();
        fs::write(cache_dir.join(TOKEN_FILE), &session.token)?;
        let content = serde_json::to_string_pretty(&session.usuario)?;
        fs::write(cache_dir.join(USER_FILE), content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let cache_dir = self.get_cache_dir();
        for name in [TOKEN_FILE, USER_FILE] {
            let path = cache_dir.join(name);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

impl Default for FilesystemSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
