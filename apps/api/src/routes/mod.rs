pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::errors::AppError;
use crate::session::handlers;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_open_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_close_session),
        )
        // Editing
        .route(
            "/api/v1/sessions/:id/sections",
            put(handlers::handle_update_section),
        )
        .route(
            "/api/v1/sessions/:id/edits",
            post(handlers::handle_apply_edit),
        )
        // Preview & advice
        .route("/api/v1/sessions/:id/preview", get(handlers::handle_preview))
        .route(
            "/api/v1/sessions/:id/preview.md",
            get(handlers::handle_preview_markdown),
        )
        .route("/api/v1/sessions/:id/advice", get(handlers::handle_advice))
        // PDF export lives in a separate service
        .route("/api/v1/sessions/:id/export", get(not_implemented))
        .with_state(state)
}
