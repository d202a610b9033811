//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiPath;
use crate::jobs::service::{analyze_job, list_jobs, AnalyzeJobResponse};
use crate::models::job::{JobFilter, JobRow};
use crate::state::AppState;

/// GET /api/jobs?search=&location=&company=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = list_jobs(state.store.as_ref(), state.job_source.as_ref(), filter).await?;
    Ok(Json(jobs))
}

/// POST /api/jobs/:id/analyze
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<AnalyzeJobResponse>, AppError> {
    let response = analyze_job(state.store.as_ref(), state.llm.as_ref(), id).await?;
    Ok(Json(response))
}
