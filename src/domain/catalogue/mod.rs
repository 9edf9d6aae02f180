pub mod entity;
pub mod invariants;

pub use entity::{Catalogue, CatalogueInput, CatalogueStatus};
pub use invariants::{
    validate_date, validate_date_range, validate_id, validate_name, validate_status,
    validate_text,
};
