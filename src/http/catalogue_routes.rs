// src/http/catalogue_routes.rs
//
// Catalogue CRUD Handlers
//
// RULES:
// - Accept payloads, call the catalogue service, return payloads
// - Validation order and first-failure-wins live in the domain, not here
// - Status mapping: 201 created, 200 read/updated/deleted, 400 validation,
//   404 missing record, 500 persistence (see error_handling)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::catalogue::{Catalogue, CatalogueInput};
use crate::domain::validate_id;
use crate::error::{AppError, AppResult};
use crate::http::error_handling::MessageResponse;
use crate::http::state::AppState;

/// Wire shape of a catalogue record on reads.
/// Field names match the original API; dates are YYYY-MM-DD strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueResponse {
    pub catalogue_id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl From<Catalogue> for CatalogueResponse {
    fn from(catalogue: Catalogue) -> Self {
        Self {
            // Reads always come from the store, so the id is present
            catalogue_id: catalogue.id.unwrap_or_default(),
            name: catalogue.name,
            description: catalogue.description,
            start_date: catalogue.start_date.format("%Y-%m-%d").to_string(),
            end_date: catalogue.end_date.format("%Y-%m-%d").to_string(),
            status: catalogue.status.to_string(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalogues", get(get_all_catalogues).post(create_catalogue))
        .route(
            "/catalogues/:catalogue_id",
            get(get_catalogue_by_id)
                .put(update_catalogue_by_id)
                .delete(delete_catalogue_by_id),
        )
}

/// The id arrives as a raw path segment so that non-numeric and non-positive
/// values fail through the same validator (and message) as any other field.
fn parse_catalogue_id(raw: &str) -> AppResult<i64> {
    Ok(validate_id(Some(raw), "Catalogue ID")?)
}

async fn create_catalogue(
    State(state): State<AppState>,
    Json(input): Json<CatalogueInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.catalogue_service.create(&input)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Catalogue created successfully".to_string(),
        }),
    ))
}

async fn get_catalogue_by_id(
    State(state): State<AppState>,
    Path(catalogue_id): Path<String>,
) -> AppResult<Json<CatalogueResponse>> {
    let id = parse_catalogue_id(&catalogue_id)?;

    match state.catalogue_service.get(id)? {
        Some(catalogue) => Ok(Json(catalogue.into())),
        None => Err(AppError::NotFound),
    }
}

async fn get_all_catalogues(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CatalogueResponse>>> {
    let catalogues = state.catalogue_service.list()?;
    Ok(Json(catalogues.into_iter().map(Into::into).collect()))
}

async fn update_catalogue_by_id(
    State(state): State<AppState>,
    Path(catalogue_id): Path<String>,
    Json(input): Json<CatalogueInput>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_catalogue_id(&catalogue_id)?;

    if state.catalogue_service.update(id, &input)? {
        Ok(Json(MessageResponse {
            message: "Catalogue updated successfully".to_string(),
        }))
    } else {
        Err(AppError::NotFound)
    }
}

async fn delete_catalogue_by_id(
    State(state): State<AppState>,
    Path(catalogue_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_catalogue_id(&catalogue_id)?;

    if state.catalogue_service.delete(id)? {
        Ok(Json(MessageResponse {
            message: "Catalogue deleted successfully".to_string(),
        }))
    } else {
        Err(AppError::NotFound)
    }
}
