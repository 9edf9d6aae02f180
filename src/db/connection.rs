// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool over a file-backed database
///
/// Pool configuration:
/// - Max 15 connections (each request borrows one for its own duration)
/// - SQLite in WAL mode for better concurrency
/// - Foreign keys enabled
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(db_path: &Path) -> AppResult<ConnectionPool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(AppError::Io)?;
        }
    }

    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        // Foreign key support is not on by default in SQLite
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(15)
        .build(manager)
        .map_err(|e| AppError::Connection(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// Convenience wrapper that maps pool exhaustion / connect failures to the
/// connectivity error variant.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Connection(format!("Failed to get database connection: {}", e)))
}

/// Create an in-memory pool (for testing)
///
/// The pool is capped at one connection so every borrow sees the same
/// in-memory database.
#[cfg(test)]
pub fn create_test_pool() -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory().with_init(|conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| AppError::Connection(format!("Failed to create test pool: {}", e)))?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("cataloghub.db")).unwrap();
        let conn = get_connection(&pool).unwrap();
        let one: i64 = conn.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(one, 1);
    }

    #[test]
    fn test_memory_pool_shares_state() {
        let pool = create_test_pool().unwrap();
        {
            let conn = pool.get().unwrap();
            conn.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (7);")
                .unwrap();
        }
        let conn = pool.get().unwrap();
        let x: i64 = conn.query_row("SELECT x FROM t", [], |row| row.get(0)).unwrap();
        assert_eq!(x, 7);
    }
}
