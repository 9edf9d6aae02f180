// src/repositories/catalogue_repository.rs
//
// Catalogue persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::catalogue::{Catalogue, CatalogueStatus};
use crate::error::{AppError, AppResult};

pub trait CatalogueRepository: Send + Sync {
    /// Insert a new record, returning the store-assigned id.
    fn insert(&self, catalogue: &Catalogue) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Catalogue>>;
    /// All records, ascending by id.
    fn list_all(&self) -> AppResult<Vec<Catalogue>>;
    /// Returns true iff exactly one row was modified.
    fn update(&self, id: i64, catalogue: &Catalogue) -> AppResult<bool>;
    /// Returns true iff exactly one row was removed.
    fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteCatalogueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCatalogueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Catalogue - returns rusqlite::Error for query_map
    /// compatibility. This is the only place raw column names appear.
    fn row_to_catalogue(row: &Row) -> Result<Catalogue, rusqlite::Error> {
        let id: i64 = row.get("catalogue_id")?;
        let name: String = row.get("catalogue_name")?;
        let description: String = row.get("catalogue_description")?;

        let start_date_str: String = row.get("start_date")?;
        let start_date = NaiveDate::parse_from_str(&start_date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let end_date_str: String = row.get("end_date")?;
        let end_date = NaiveDate::parse_from_str(&end_date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let status_str: String = row.get("status")?;
        let status = CatalogueStatus::parse(&status_str).ok_or(rusqlite::Error::InvalidQuery)?;

        Ok(Catalogue {
            id: Some(id),
            name,
            description,
            start_date,
            end_date,
            status,
        })
    }
}

impl CatalogueRepository for SqliteCatalogueRepository {
    fn insert(&self, catalogue: &Catalogue) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO catalogue (
                catalogue_name, catalogue_description, start_date, end_date, status
            ) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                catalogue.name,
                catalogue.description,
                catalogue.start_date.format("%Y-%m-%d").to_string(),
                catalogue.end_date.format("%Y-%m-%d").to_string(),
                catalogue.status.to_string(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Catalogue>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT catalogue_id, catalogue_name, catalogue_description,
                    start_date, end_date, status
             FROM catalogue WHERE catalogue_id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_catalogue) {
            Ok(catalogue) => Ok(Some(catalogue)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Catalogue>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT catalogue_id, catalogue_name, catalogue_description,
                    start_date, end_date, status
             FROM catalogue ORDER BY catalogue_id ASC",
        )?;

        let rows = stmt.query_map([], Self::row_to_catalogue)?;
        let mut catalogues = Vec::new();
        for row in rows {
            catalogues.push(row?);
        }
        Ok(catalogues)
    }

    fn update(&self, id: i64, catalogue: &Catalogue) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let changed = conn.execute(
            "UPDATE catalogue
             SET catalogue_name = ?1, catalogue_description = ?2,
                 start_date = ?3, end_date = ?4, status = ?5
             WHERE catalogue_id = ?6",
            params![
                catalogue.name,
                catalogue.description,
                catalogue.start_date.format("%Y-%m-%d").to_string(),
                catalogue.end_date.format("%Y-%m-%d").to_string(),
                catalogue.status.to_string(),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;
        let removed = conn.execute("DELETE FROM catalogue WHERE catalogue_id = ?1", params![id])?;
        Ok(removed > 0)
    }
}
