// src/http/state.rs

use std::sync::Arc;

use crate::services::{AuthService, CatalogueService, StatisticsService};

/// Shared application state.
/// Services are constructed once in main.rs and injected here; handlers
/// receive them through axum's State extractor. No module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub catalogue_service: Arc<CatalogueService>,
    pub auth_service: Arc<AuthService>,
    pub statistics_service: Arc<StatisticsService>,
}
