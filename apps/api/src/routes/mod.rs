pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

/// Largest accepted résumé upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::root_handler))
        .route("/api/", get(health::root_handler))
        // Jobs
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route("/api/jobs/:id/analyze", post(jobs::handle_analyze_job))
        // Resumes
        .route(
            "/api/resume/upload",
            post(resumes::handle_upload_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/resume/:id", get(resumes::handle_get_resume))
        // Matching
        .route("/api/match/:resume_id", post(matching::handle_generate_matches))
        .route("/api/matches/:resume_id", get(matching::handle_list_matches))
        .with_state(state)
}
