// src/http/auth_routes.rs
//
// Login, logout and the session-gated dashboard

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::http::error_handling::{ErrorResponse, MessageResponse};
use crate::http::state::AppState;
use crate::services::auth_service::LoginOutcome;

const SESSION_COOKIE: &str = "session";

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

/// Extract the session token from the Cookie header, if any
fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix("session=")
            .map(str::to_string)
    })
}

fn set_session_cookie(token: &str) -> [(header::HeaderName, String); 1] {
    [(
        header::SET_COOKIE,
        format!("{}={}; HttpOnly; Path=/", SESSION_COOKIE, token),
    )]
}

fn clear_session_cookie() -> [(header::HeaderName, String); 1] {
    [(
        header::SET_COOKIE,
        format!("{}=; Max-Age=0; HttpOnly; Path=/", SESSION_COOKIE),
    )]
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<Response> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    match state.auth_service.login(&username, &password)? {
        LoginOutcome::Success { token } => Ok((
            set_session_cookie(&token),
            Json(MessageResponse {
                message: "Login successful".to_string(),
            }),
        )
            .into_response()),
        LoginOutcome::InvalidCredentials => Ok((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Invalid credentials".to_string(),
            }),
        )
            .into_response()),
    }
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = session_token(&headers) {
        state.auth_service.logout(&token)?;
    }
    Ok((clear_session_cookie(), Redirect::to("/login")).into_response())
}

/// Session gate: the dashboard is only served to authenticated callers;
/// everyone else is redirected to the login page.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let authenticated = match session_token(&headers) {
        Some(token) => state.auth_service.is_authenticated(&token)?,
        None => false,
    };

    if !authenticated {
        return Ok(Redirect::to("/login").into_response());
    }

    let stats = state.statistics_service.database_stats()?;

    Ok(Html(format!(
        "<!DOCTYPE html>\n\
         <html><head><title>CatalogHub</title></head><body>\n\
         <h1>Catalogue Dashboard</h1>\n\
         <p>{} catalogues, {} users, {} active sessions.</p>\n\
         <p><a href=\"/api/catalogues\">Browse catalogues</a> | \
         <a href=\"/logout\">Log out</a></p>\n\
         </body></html>",
        stats.catalogue_count, stats.user_count, stats.session_count
    ))
    .into_response())
}

async fn login_page() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n\
         <html><head><title>CatalogHub - Login</title></head><body>\n\
         <h1>Log in</h1>\n\
         <form onsubmit=\"return submitLogin(event)\">\n\
         <input id=\"username\" placeholder=\"Username\">\n\
         <input id=\"password\" type=\"password\" placeholder=\"Password\">\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <script>\n\
         async function submitLogin(e) {\n\
           e.preventDefault();\n\
           const body = JSON.stringify({\n\
             username: document.getElementById('username').value,\n\
             password: document.getElementById('password').value,\n\
           });\n\
           const resp = await fetch('/login', {\n\
             method: 'POST',\n\
             headers: {'Content-Type': 'application/json'},\n\
             body,\n\
           });\n\
           if (resp.ok) { window.location = '/'; }\n\
           else { alert((await resp.json()).error); }\n\
           return false;\n\
         }\n\
         </script>\n\
         </body></html>",
    )
}
