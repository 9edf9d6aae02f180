// src/services/catalogue_service.rs
use std::sync::Arc;

use crate::domain::catalogue::{Catalogue, CatalogueInput};
use crate::error::AppResult;
use crate::repositories::CatalogueRepository;

/// Orchestrates catalogue CRUD: validates raw input into entities, delegates
/// to the repository, and normalizes outcomes.
///
/// - Missing records come back as `None` / `false`, never as errors.
/// - Validation failures surface as `AppError::Domain` before any
///   persistence call is made.
/// - Connectivity failures (`AppError::Connection`) stay distinct from
///   other database failures.
pub struct CatalogueService {
    repo: Arc<dyn CatalogueRepository>,
}

impl CatalogueService {
    pub fn new(repo: Arc<dyn CatalogueRepository>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new catalogue, returning its assigned id.
    pub fn create(&self, input: &CatalogueInput) -> AppResult<i64> {
        let catalogue = Catalogue::from_input(input)?;
        self.repo.insert(&catalogue)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Catalogue>> {
        self.repo.get_by_id(id)
    }

    /// All catalogues, ascending by id. Empty store yields an empty vec.
    pub fn list(&self) -> AppResult<Vec<Catalogue>> {
        self.repo.list_all()
    }

    /// Validate and overwrite the record with the given id.
    /// Returns false when no such record exists.
    pub fn update(&self, id: i64, input: &CatalogueInput) -> AppResult<bool> {
        let catalogue = Catalogue::from_input(input)?;
        self.repo.update(id, &catalogue)
    }

    /// Returns false when no such record exists; repeat deletes stay false.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::CatalogueStatus;
    use crate::error::AppError;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory repository double that records whether it was touched,
    /// so tests can prove validation aborts before persistence.
    #[derive(Default)]
    struct RecordingRepo {
        rows: Mutex<Vec<Catalogue>>,
        touched: Mutex<bool>,
    }

    impl RecordingRepo {
        fn was_touched(&self) -> bool {
            *self.touched.lock().unwrap()
        }
    }

    impl CatalogueRepository for RecordingRepo {
        fn insert(&self, catalogue: &Catalogue) -> AppResult<i64> {
            *self.touched.lock().unwrap() = true;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            rows.push(catalogue.clone().with_id(id));
            Ok(id)
        }

        fn get_by_id(&self, id: i64) -> AppResult<Option<Catalogue>> {
            *self.touched.lock().unwrap() = true;
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == Some(id))
                .cloned())
        }

        fn list_all(&self) -> AppResult<Vec<Catalogue>> {
            *self.touched.lock().unwrap() = true;
            Ok(self.rows.lock().unwrap().clone())
        }

        fn update(&self, id: i64, catalogue: &Catalogue) -> AppResult<bool> {
            *self.touched.lock().unwrap() = true;
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|c| c.id == Some(id)) {
                Some(row) => {
                    *row = catalogue.clone().with_id(id);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn delete(&self, id: i64) -> AppResult<bool> {
            *self.touched.lock().unwrap() = true;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.id != Some(id));
            Ok(rows.len() < before)
        }
    }

    fn valid_input() -> CatalogueInput {
        CatalogueInput {
            name: Some(json!("Summer Sale")),
            description: Some(json!("Seasonal discount")),
            start_date: Some(json!("2024-06-01")),
            end_date: Some(json!("2024-08-31")),
            status: Some(json!("Active")),
        }
    }

    #[test]
    fn test_create_validates_before_persisting() {
        let repo = Arc::new(RecordingRepo::default());
        let service = CatalogueService::new(repo.clone());

        let mut input = valid_input();
        input.start_date = Some(json!("2024-09-01"));

        let err = service.create(&input).unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
        assert!(!repo.was_touched());
    }

    #[test]
    fn test_create_normalizes_status() {
        let repo = Arc::new(RecordingRepo::default());
        let service = CatalogueService::new(repo.clone());

        let id = service.create(&valid_input()).unwrap();
        let stored = service.get(id).unwrap().unwrap();
        assert_eq!(stored.status, CatalogueStatus::Active);
        assert_eq!(stored.status.to_string(), "active");
    }

    #[test]
    fn test_update_missing_is_false_not_error() {
        let service = CatalogueService::new(Arc::new(RecordingRepo::default()));
        assert!(!service.update(999, &valid_input()).unwrap());
    }

    #[test]
    fn test_update_validates_before_persisting() {
        let repo = Arc::new(RecordingRepo::default());
        let service = CatalogueService::new(repo.clone());

        let mut input = valid_input();
        input.description = Some(json!("bad;chars"));

        assert!(service.update(1, &input).is_err());
        assert!(!repo.was_touched());
    }

    #[test]
    fn test_delete_missing_is_false_repeatedly() {
        let service = CatalogueService::new(Arc::new(RecordingRepo::default()));
        assert!(!service.delete(999).unwrap());
        assert!(!service.delete(999).unwrap());
    }

    #[test]
    fn test_list_empty_store() {
        let service = CatalogueService::new(Arc::new(RecordingRepo::default()));
        assert!(service.list().unwrap().is_empty());
    }
}
