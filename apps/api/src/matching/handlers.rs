//! Axum route handlers for the Matching API.

use axum::{
    extract::State,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiPath;
use crate::matching::service::{generate_matches, list_matches, MatchesResponse};
use crate::models::job_match::JobMatchRow;
use crate::state::AppState;

/// POST /api/match/:resume_id
pub async fn handle_generate_matches(
    State(state): State<AppState>,
    ApiPath(resume_id): ApiPath<Uuid>,
) -> Result<Json<MatchesResponse>, AppError> {
    let response = generate_matches(state.store.as_ref(), state.llm.as_ref(), resume_id).await?;
    Ok(Json(response))
}

/// GET /api/matches/:resume_id
pub async fn handle_list_matches(
    State(state): State<AppState>,
    ApiPath(resume_id): ApiPath<Uuid>,
) -> Result<Json<Vec<JobMatchRow>>, AppError> {
    Ok(Json(list_matches(state.store.as_ref(), resume_id).await?))
}
