// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod auth_service;
pub mod catalogue_service;
pub mod statistics_service;

pub use auth_service::AuthService;
pub use catalogue_service::CatalogueService;
pub use statistics_service::StatisticsService;
