// src/http/mod.rs
//
// HTTP Layer
//
// ARCHITECTURE:
// - This layer is the boundary between the wire and the services
// - Handlers accept payloads, call services, return payloads
// - Handlers never contain business logic
// - One place (error_handling) maps AppError to status codes

pub mod auth_routes;
pub mod catalogue_routes;
pub mod error_handling;
pub mod state;

#[cfg(test)]
mod routes_tests;

pub use error_handling::{ErrorResponse, MessageResponse};
pub use state::AppState;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes::routes())
        .nest("/api", catalogue_routes::routes())
        .route("/api/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "OK".to_string(),
    })
}
