// src/services/auth_service.rs
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DomainError, User};
use crate::error::AppResult;
use crate::repositories::{SessionRepository, UserRepository};

/// Outcome of a credential check. Invalid credentials are a normal outcome,
/// not an error - the handler maps them to 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session established; carries the token for the cookie.
    Success { token: String },
    InvalidCredentials,
}

/// Username/password login and session lifecycle.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { users, sessions }
    }

    /// Check credentials and open a session.
    ///
    /// Blank username or password is a validation failure (400). An unknown
    /// username and a wrong password are indistinguishable to the caller.
    pub fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(
                DomainError::Validation("Username and password required".to_string()).into(),
            );
        }

        let user = match self.users.get_by_username(username)? {
            Some(user) => user,
            None => return Ok(LoginOutcome::InvalidCredentials),
        };

        if user.password_hash != hash_password(password) {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        let token = Uuid::new_v4().to_string();
        self.sessions.insert(&token, user.id)?;
        Ok(LoginOutcome::Success { token })
    }

    /// True iff the token belongs to an active session.
    pub fn is_authenticated(&self, token: &str) -> AppResult<bool> {
        Ok(self.sessions.get_user_id(token)?.is_some())
    }

    /// Close the session. Unknown tokens are a no-op.
    pub fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.delete(token)?;
        Ok(())
    }

    /// Create a user account with a hashed password, returning its id.
    /// Used for the optional admin seed at startup.
    pub fn register_user(&self, username: &str, password: &str) -> AppResult<i64> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(
                DomainError::Validation("Username and password required".to_string()).into(),
            );
        }
        self.users.insert(username, &hash_password(password))
    }

    /// Look up a user without touching sessions (used by the seed logic to
    /// stay idempotent across restarts).
    pub fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        self.users.get_by_username(username)
    }
}

/// SHA-256 hex digest of the password.
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
