//! Axum route handlers for the matching API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::catalog::SkillCatalog;
use crate::matching::service::MatchResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// POST /api/v1/jobs/match
///
/// Extracts skills from the submitted resume text and returns the top-ranked jobs.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))?;

    let response = state
        .matcher
        .match_resume(request.resume_text.as_deref())
        .await?;

    Ok(Json(response))
}

/// GET /api/v1/jobs/skills
///
/// Returns the skill catalog verbatim, in catalog order.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillCatalog> {
    Json(state.matcher.catalog().clone())
}
