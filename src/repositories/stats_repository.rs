// src/repositories/stats_repository.rs
//
// Row counts for the dashboard

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

/// Basic row counts, shown on the dashboard
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub catalogue_count: i64,
    pub user_count: i64,
    pub session_count: i64,
}

pub trait StatsRepository: Send + Sync {
    fn database_stats(&self) -> AppResult<DatabaseStats>;
}

pub struct SqliteStatsRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteStatsRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl StatsRepository for SqliteStatsRepository {
    fn database_stats(&self) -> AppResult<DatabaseStats> {
        let conn = self.pool.get()?;

        let count = |table: &str| -> AppResult<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(AppError::Database)
        };

        Ok(DatabaseStats {
            catalogue_count: count("catalogue")?,
            user_count: count("users")?,
            session_count: count("sessions")?,
        })
    }
}
