// src/lib.rs
// CatalogHub - Catalogue record-management backend
//
// Architecture:
// - Domain-centric: validation rules and entities live in `domain`
// - Explicit: services receive their repositories by constructor, no globals
// - Layered: http -> services -> repositories -> db

// ============================================================================
// MODULES
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod http;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_date, validate_date_range, validate_id, validate_name, validate_status,
    validate_text, Catalogue, CatalogueInput, CatalogueStatus, User,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CatalogueRepository, DatabaseStats, SessionRepository, SqliteCatalogueRepository,
    SqliteSessionRepository, SqliteStatsRepository, SqliteUserRepository, StatsRepository,
    UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AuthService, CatalogueService, StatisticsService};

// ============================================================================
// PUBLIC API - HTTP
// ============================================================================

pub use http::{router, AppState};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::Config;
