// src/http/routes_tests.rs
//
// HTTP-LEVEL TESTS
//
// Each test drives the full router (handlers, services, repositories,
// in-memory SQLite) through tower's oneshot, asserting on the exact status
// codes and bodies the API promises.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::db::connection::create_test_pool;
use crate::db::initialize_database;
use crate::http::{router, AppState};
use crate::repositories::{
    SqliteCatalogueRepository, SqliteSessionRepository, SqliteStatsRepository,
    SqliteUserRepository,
};
use crate::services::{AuthService, CatalogueService, StatisticsService};

fn test_app() -> (Router, AppState) {
    let pool = Arc::new(create_test_pool().unwrap());
    {
        let conn = pool.get().unwrap();
        initialize_database(&conn).unwrap();
    }

    let catalogue_service = Arc::new(CatalogueService::new(Arc::new(
        SqliteCatalogueRepository::new(pool.clone()),
    )));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteSessionRepository::new(pool.clone())),
    ));
    let statistics_service = Arc::new(StatisticsService::new(Arc::new(
        SqliteStatsRepository::new(pool),
    )));

    let state = AppState {
        catalogue_service,
        auth_service,
        statistics_service,
    };
    (router(state.clone()), state)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn summer_sale() -> Value {
    json!({
        "name": "Summer Sale",
        "description": "Seasonal discount",
        "start_date": "2024-06-01",
        "end_date": "2024-08-31",
        "status": "Active"
    })
}

#[tokio::test]
async fn test_create_then_list_normalizes_status() {
    let (app, _) = test_app();

    let (status, body) = send_json(&app, "POST", "/api/catalogues", summer_sale()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Catalogue created successfully");

    let (status, body) = send_empty(&app, "GET", "/api/catalogues").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Summer Sale");
    assert_eq!(records[0]["status"], "active");
}

#[tokio::test]
async fn test_create_rejects_digit_in_name() {
    let (app, _) = test_app();

    let mut payload = summer_sale();
    payload["name"] = json!("Bad1");

    let (status, body) = send_json(&app, "POST", "/api/catalogues", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Catalogue Name"));
}

#[tokio::test]
async fn test_create_rejects_non_string_field_as_validation() {
    let (app, _) = test_app();

    // A number where a string belongs must flow through the validators and
    // come back as a 400 naming the field, not a deserializer rejection
    let mut payload = summer_sale();
    payload["name"] = json!(123);

    let (status, body) = send_json(&app, "POST", "/api/catalogues", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Catalogue Name must be a string."));
}

#[tokio::test]
async fn test_create_rejects_reversed_dates_without_persisting() {
    let (app, _) = test_app();

    let mut payload = summer_sale();
    payload["start_date"] = json!("2024-09-01");

    let (status, body) = send_json(&app, "POST", "/api/catalogues", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Start date"));

    let (_, body) = send_empty(&app, "GET", "/api/catalogues").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_round_trip_by_assigned_id() {
    let (app, _) = test_app();

    send_json(&app, "POST", "/api/catalogues", summer_sale()).await;

    let (status, body) = send_empty(&app, "GET", "/api/catalogues/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["catalogue_id"], 1);
    assert_eq!(body["name"], "Summer Sale");
    assert_eq!(body["description"], "Seasonal discount");
    assert_eq!(body["start_date"], "2024-06-01");
    assert_eq!(body["end_date"], "2024-08-31");
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_get_missing_record_is_404() {
    let (app, _) = test_app();
    let (status, body) = send_empty(&app, "GET", "/api/catalogues/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Catalogue not found");
}

#[tokio::test]
async fn test_bad_ids_are_400() {
    let (app, _) = test_app();

    let (status, _) = send_empty(&app, "GET", "/api/catalogues/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_empty(&app, "GET", "/api/catalogues/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("positive"));
}

#[tokio::test]
async fn test_update_flow() {
    let (app, _) = test_app();

    send_json(&app, "POST", "/api/catalogues", summer_sale()).await;

    let mut updated = summer_sale();
    updated["status"] = json!("Expired");
    let (status, body) = send_json(&app, "PUT", "/api/catalogues/1", updated.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Catalogue updated successfully");

    let (_, body) = send_empty(&app, "GET", "/api/catalogues/1").await;
    assert_eq!(body["status"], "expired");

    // Missing record is 404, not a generic error
    let (status, _) = send_json(&app, "PUT", "/api/catalogues/42", updated).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent_404() {
    let (app, _) = test_app();

    send_json(&app, "POST", "/api/catalogues", summer_sale()).await;

    let (status, body) = send_empty(&app, "DELETE", "/api/catalogues/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Catalogue deleted successfully");

    let (status, _) = send_empty(&app, "DELETE", "/api/catalogues/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send_empty(&app, "DELETE", "/api/catalogues/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_missing_fields_is_400() {
    let (app, _) = test_app();

    let (status, _) = send_json(
        &app,
        "POST",
        "/login",
        json!({"username": "", "password": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, "POST", "/login", json!({"username": "admin"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let (app, state) = test_app();
    state.auth_service.register_user("admin", "hunter2").unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/login",
        json!({"username": "admin", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_session_gate_on_dashboard() {
    let (app, state) = test_app();
    state.auth_service.register_user("admin", "hunter2").unwrap();

    // Unauthenticated: redirected to login
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/login");

    // Log in, capture the session cookie
    let login = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"username": "admin", "password": "hunter2"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("session="));

    // Authenticated: dashboard renders
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Logout clears the session and redirects
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_redirection());

    // The old cookie no longer opens the dashboard
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_redirection());
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = test_app();
    let (status, body) = send_empty(&app, "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK");
}
