//! HTTP endpoints.
//!
//! - `/`, `/index.html` : HTML page with a trigger button
//! - `/api`             : start a run in the background
//! - `/stats`           : counters as JSON
//! - anything else      : 404
//!
//! Routing matches the full request target, so a query string on any of the
//! paths above (`/api?x=1`) is also a 404.

pub mod page;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;

pub const TRIGGER_ACK: &str = "Check server console for results";

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Html(page::render(&state))
}

pub async fn trigger(State(state): State<AppState>) -> impl IntoResponse {
    state.trigger_run();
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], TRIGGER_ACK)
}

pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.stats())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "text/plain")], "Not Found")
}

/// Middleware: requests carrying a query string never reach a handler.
pub async fn reject_query(req: Request, next: Next) -> Response {
    if req.uri().query().is_some() {
        return not_found().await.into_response();
    }
    next.run(req).await
}
