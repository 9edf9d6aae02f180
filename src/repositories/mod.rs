// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod catalogue_repository;
pub mod session_repository;
pub mod stats_repository;
pub mod user_repository;

pub use catalogue_repository::{CatalogueRepository, SqliteCatalogueRepository};
pub use session_repository::{SessionRepository, SqliteSessionRepository};
pub use stats_repository::{DatabaseStats, SqliteStatsRepository, StatsRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};
