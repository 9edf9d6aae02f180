// src/repositories/session_repository.rs
//
// Login session persistence

use chrono::Utc;
use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

pub trait SessionRepository: Send + Sync {
    fn insert(&self, token: &str, user_id: i64) -> AppResult<()>;
    /// The user the token belongs to, or None for unknown tokens.
    fn get_user_id(&self, token: &str) -> AppResult<Option<i64>>;
    /// Returns true iff a session was actually removed.
    fn delete(&self, token: &str) -> AppResult<bool>;
}

pub struct SqliteSessionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SessionRepository for SqliteSessionRepository {
    fn insert(&self, token: &str, user_id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO sessions (token, user_id, created_at) VALUES (?1, ?2, ?3)",
            params![token, user_id, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn get_user_id(&self, token: &str) -> AppResult<Option<i64>> {
        let conn = self.pool.get()?;

        match conn.query_row(
            "SELECT user_id FROM sessions WHERE token = ?1",
            params![token],
            |row| row.get(0),
        ) {
            Ok(user_id) => Ok(Some(user_id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn delete(&self, token: &str) -> AppResult<bool> {
        let conn = self.pool.get()?;
        let removed = conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
        Ok(removed > 0)
    }
}
