use std::fmt;

#[derive(Debug)]
pub enum TiendaError {
    /// Login rejected by the backend; the session is left untouched.
    InvalidCredentials(String),
    /// Registration payload rejected by the backend.
    ValidationError {
        status: u16,
        message: String,
    },
    /// The backend answered 401 on an authenticated call; the session has
    /// already been cleared by the time this surfaces.
    SessionExpired,
    ApiError {
        status: u16,
        message: String,
    },
    NetworkError(reqwest::Error),
    SessionError(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for TiendaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiendaError::InvalidCredentials(msg) => {
                write!(f, "Invalid credentials: {}", msg)
            }
            TiendaError::ValidationError { status, message } => {
                write!(f, "Validation error (status {}): {}", status, message)
            }
            TiendaError::SessionExpired => write!(f, "Session expired, please log in again"),
            TiendaError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TiendaError::NetworkError(e) => write!(f, "Network error: {}", e),
            TiendaError::SessionError(msg) => write!(f, "Session error: {}", msg),
            TiendaError::IoError(e) => write!(f, "IO error: {}", e),
            TiendaError::JsonError(e) => write!(f, "JSON error: {}", e),
            TiendaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TiendaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TiendaError::NetworkError(e) => Some(e),
            TiendaError::IoError(e) => Some(e),
            TiendaError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TiendaError {
    fn from(err: reqwest::Error) -> Self {
        TiendaError::NetworkError(err)
    }
}

impl From<std::io::Error> for TiendaError {
    fn from(err: std::io::Error) -> Self {
        TiendaError::IoError(err)
    }
}

impl From<serde_json::Error> for TiendaError {
    fn from(err: serde_json::Error) -> Self {
        TiendaError::JsonError(err)
    }
}

impl From<anyhow::Error> for TiendaError {
    fn from(err: anyhow::Error) -> Self {
        TiendaError::Other(err.to_string())
    }
}

impl From<String> for TiendaError {
    fn from(msg: String) -> Self {
        TiendaError::Other(msg)
    }
}

impl From<&str> for TiendaError {
    fn from(msg: &str) -> Self {
        TiendaError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TiendaError>;
