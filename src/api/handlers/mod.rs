use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ozilly_core::models::SessionState;

use super::AppState;
use crate::controller::{FeedbackOutcome, HistoryView, LogoOutcome, NameOutcome};

const INDEX_HTML: &str = include_str!("../index.html");

type ApiError = (StatusCode, String);

fn session_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Session not found".to_string())
}

/// Copy of the session's state, or 404.
fn load_session(state: &AppState, id: Uuid) -> Result<SessionState, ApiError> {
    state.sessions.get(id).ok_or_else(session_not_found)
}

fn store_session(state: &AppState, id: Uuid, session: SessionState) -> Result<(), ApiError> {
    if state.sessions.put(id, session) {
        Ok(())
    } else {
        Err(session_not_found())
    }
}

// ============================================================
// Request / Response bodies
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedSession {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateNameInput {
    pub idea: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub feedback: String,
}

// ============================================================
// UI and Health
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Sessions
// ============================================================

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<CreatedSession>) {
    let id = state.sessions.create();
    tracing::debug!("Created session {}", id);
    (StatusCode::CREATED, Json(CreatedSession { id }))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionState>, ApiError> {
    load_session(&state, id).map(Json)
}

pub async fn generate_name(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GenerateNameInput>,
) -> Result<Json<NameOutcome>, ApiError> {
    let mut session = load_session(&state, id)?;

    if input.idea.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Idea is required".to_string()));
    }

    let outcome = state.controller.generate_name(&mut session, &input.idea).await;
    store_session(&state, id, session)?;
    Ok(Json(outcome))
}

pub async fn generate_logo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LogoOutcome>, ApiError> {
    let session = load_session(&state, id)?;
    Ok(Json(state.controller.generate_logo(&session).await))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<FeedbackInput>,
) -> Result<Json<FeedbackOutcome>, ApiError> {
    let mut session = load_session(&state, id)?;
    let outcome = state
        .controller
        .submit_feedback(&mut session, &input.feedback)
        .await;
    store_session(&state, id, session)?;
    Ok(Json(outcome))
}

// ============================================================
// History
// ============================================================

pub async fn list_history(State(state): State<AppState>) -> Json<HistoryView> {
    Json(state.controller.history())
}
