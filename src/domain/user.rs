// src/domain/user.rs
use serde::{Deserialize, Serialize};

/// An account allowed to open a dashboard session.
/// Passwords are stored as SHA-256 hex digests, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}
