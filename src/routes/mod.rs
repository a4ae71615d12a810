//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered form page, the CSV download,
//! and a small JSON API over the same per-session form state. Every route
//! resolves the caller's session from its cookie before touching state.

pub mod api;
pub mod form;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::submission::CSV_FILE_NAME;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::index))
        .route("/submit", post(form::submit_form))
        .route(&format!("/{CSV_FILE_NAME}"), get(form::download_csv))
        .route("/api/form", get(api::list_records))
        .route("/api/form/{instrument}/{field}", get(api::get_field).put(api::set_field))
        .route("/api/submit", post(api::submit))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
