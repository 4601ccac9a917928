use std::fs;
use std::sync::{Arc, Mutex, OnceLock};
use tempfile::TempDir;
use tienda::models::{Rol, Usuario};
use tienda::session::{FilesystemSessionStore, Session, SessionStore};

// HOME is process-global, so tests that repoint it must not interleave.
fn home_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn test_usuario() -> Usuario {
    Usuario {
        id: 1,
        nombre: "Ana".to_string(),
        email: Some("a@b.com".to_string()),
        rol: Rol::Admin,
        activo: Some(true),
        created_at: None,
    }
}

fn cache_dir(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join(".cache").join("tienda")
}

#[test]
fn test_set_publishes_token_and_user_together() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let session = Session::new(Arc::new(FilesystemSessionStore::new()));
    assert!(session.current().is_none());

    session.set("tok123".to_string(), test_usuario()).unwrap();

    let current = session.current().unwrap();
    assert_eq!(current.token, "tok123");
    assert_eq!(current.usuario.id, 1);
    assert_eq!(current.usuario.rol, Rol::Admin);

    // Both records land on disk.
    assert!(cache_dir(&temp_dir).join("token").exists());
    assert!(cache_dir(&temp_dir).join("current_user.json").exists());
}

#[test]
fn test_round_trip_survives_restart() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let session = Session::new(Arc::new(FilesystemSessionStore::new()));
    session.set("tok123".to_string(), test_usuario()).unwrap();
    let before = session.current().unwrap();

    // Simulated restart: a fresh handle over the same store.
    let restarted = Session::initialize(Arc::new(FilesystemSessionStore::new()));
    assert_eq!(restarted.current().unwrap(), before);
}

#[test]
fn test_clear_is_idempotent() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let session = Session::new(Arc::new(FilesystemSessionStore::new()));
    session.set("tok123".to_string(), test_usuario()).unwrap();

    session.clear();
    assert!(session.current().is_none());
    assert!(!cache_dir(&temp_dir).join("token").exists());
    assert!(!cache_dir(&temp_dir).join("current_user.json").exists());

    // Clearing an already-empty session is a no-op, not an error.
    session.clear();
    assert!(session.current().is_none());
}

#[test]
fn test_initialize_with_empty_store_is_empty() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let session = Session::initialize(Arc::new(FilesystemSessionStore::new()));
    assert!(session.current().is_none());
}

#[test]
fn test_corrupt_profile_treated_as_absent() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let dir = cache_dir(&temp_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("token"), "tok123").unwrap();
    fs::write(dir.join("current_user.json"), "{not json").unwrap();

    let session = Session::initialize(Arc::new(FilesystemSessionStore::new()));
    assert!(session.current().is_none());
}

#[test]
fn test_unknown_role_in_profile_treated_as_absent() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let dir = cache_dir(&temp_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("token"), "tok123").unwrap();
    fs::write(
        dir.join("current_user.json"),
        r#"{"id": 1, "nombre": "Ana", "rol": "superuser"}"#,
    )
    .unwrap();

    let session = Session::initialize(Arc::new(FilesystemSessionStore::new()));
    assert!(session.current().is_none());
}

#[test]
fn test_orphan_token_is_dropped_on_load() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let dir = cache_dir(&temp_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("token"), "tok123").unwrap();

    let store = FilesystemSessionStore::new();
    assert!(store.load().is_none());
    // The leftover record is removed so the next load starts clean.
    assert!(!dir.join("token").exists());
}

#[test]
fn test_set_after_clear_recovers() {
    let _guard = home_lock().lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let session = Session::new(Arc::new(FilesystemSessionStore::new()));
    session.set("first".to_string(), test_usuario()).unwrap();
    session.clear();
    session.set("second".to_string(), test_usuario()).unwrap();

    let current = session.current().unwrap();
    assert_eq!(current.token, "second");
    assert_eq!(current.usuario.nombre, "Ana");
}
