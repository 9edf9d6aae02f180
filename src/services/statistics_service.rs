// src/services/statistics_service.rs
use std::sync::Arc;

use crate::error::AppResult;
use crate::repositories::{DatabaseStats, StatsRepository};

/// Read-only dashboard figures.
pub struct StatisticsService {
    stats_repo: Arc<dyn StatsRepository>,
}

impl StatisticsService {
    pub fn new(stats_repo: Arc<dyn StatsRepository>) -> Self {
        Self { stats_repo }
    }

    pub fn database_stats(&self) -> AppResult<DatabaseStats> {
        self.stats_repo.database_stats()
    }
}
