use serde::{Deserialize, Serialize};

use super::usuario::Usuario;

/// The client-held credential pair. Token and profile travel together so a
/// session can never be half-set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub usuario: Usuario,
}
