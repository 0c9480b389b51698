use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::advisory::{all_guides, compute_completeness_report, CompletenessReport, SectionGuide};
use crate::editor::{EditError, RandomIds};
use crate::errors::AppError;
use crate::render::{render_markdown, render_preview, PreviewBlock};
use crate::session::{EditCommand, SectionUpdate, SessionView};
use crate::state::AppState;

#[derive(Serialize)]
pub struct PreviewResponse {
    pub session_id: Uuid,
    pub revision: u64,
    pub blocks: Vec<PreviewBlock>,
}

#[derive(Serialize)]
pub struct AdviceResponse {
    pub completeness: CompletenessReport,
    pub guides: Vec<SectionGuide>,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

async fn load(state: &AppState, id: Uuid) -> Result<SessionView, AppError> {
    state
        .sessions
        .view(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions
pub async fn handle_open_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let view = state
        .sessions
        .open()
        .await
        .ok_or(AppError::SessionLimit(state.config.max_sessions))?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(load(&state, id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.close(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// PUT /api/v1/sessions/:id/sections
///
/// Replaces one whole section. Any well-typed section value is accepted.
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<SectionUpdate>,
) -> Result<Json<SessionView>, AppError> {
    let section = update.section_name();
    let view = state
        .sessions
        .with_session(id, |session| {
            session.update_section(update);
            session.view()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;
    info!("Replaced {section} in session {id} (revision {})", view.revision);
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/edits
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<EditCommand>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .with_session(id, |session| -> Result<SessionView, EditError> {
            session.apply(command, &mut RandomIds)?;
            Ok(session.view())
        })
        .await
        .ok_or_else(|| session_not_found(id))??;
    info!("Applied edit to session {id} (revision {})", view.revision);
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let view = load(&state, id).await?;
    Ok(Json(PreviewResponse {
        session_id: view.id,
        revision: view.revision,
        blocks: render_preview(&view.document),
    }))
}

/// GET /api/v1/sessions/:id/preview.md
pub async fn handle_preview_markdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = load(&state, id).await?;
    let md = render_markdown(&render_preview(&view.document));
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], md))
}

/// GET /api/v1/sessions/:id/advice
pub async fn handle_advice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdviceResponse>, AppError> {
    let view = load(&state, id).await?;
    Ok(Json(AdviceResponse {
        completeness: compute_completeness_report(&view.document),
        guides: all_guides(),
    }))
}
