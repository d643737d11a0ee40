use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::jobs::models::JobPosting;
use crate::state::AppState;

/// GET /api/v1/jobs
///
/// Returns every stored job posting unmodified.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state.jobs.find_all().await?;
    Ok(Json(jobs))
}
