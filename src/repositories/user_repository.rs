// src/repositories/user_repository.rs
//
// User account persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::User;
use crate::error::{AppError, AppResult};

pub trait UserRepository: Send + Sync {
    fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;
    /// Insert a user, returning the assigned id.
    fn insert(&self, username: &str, password_hash: &str) -> AppResult<i64>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
        Ok(User {
            id: row.get("id")?,
            username: row.get("username")?,
            password_hash: row.get("password_hash")?,
        })
    }
}

impl UserRepository for SqliteUserRepository {
    fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let conn = self.pool.get()?;

        let mut stmt =
            conn.prepare("SELECT id, username, password_hash FROM users WHERE username = ?1")?;

        match stmt.query_row(params![username], Self::row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn insert(&self, username: &str, password_hash: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;
        Ok(conn.last_insert_rowid())
    }
}
