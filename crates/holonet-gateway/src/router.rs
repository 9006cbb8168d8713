//! Axum router wiring.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::index))
        .route("/index.html", get(ops::index))
        .route("/api", get(ops::trigger))
        .route("/stats", get(ops::stats))
        .fallback(ops::not_found)
        .layer(middleware::from_fn(ops::reject_query))
        .with_state(state)
}
