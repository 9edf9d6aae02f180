// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalogue;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalogue Domain
pub use catalogue::{
    validate_date, validate_date_range, validate_id, validate_name, validate_status,
    validate_text, Catalogue, CatalogueInput, CatalogueStatus,
};

// User Domain
pub use user::User;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of the input rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation Error: {0}")]
    Validation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
