//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One server-rendered page plus a small JSON API for reading and writing
//! the color-mode preference, stitched into a single Axum router with
//! request tracing.

pub mod colormode;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(colormode::page))
        .route("/api/colormode", get(colormode::current).post(colormode::set))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
