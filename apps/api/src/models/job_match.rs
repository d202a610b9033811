use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::scorer::MatchResult;

/// Persisted result of scoring one résumé against one job.
/// At most one row exists per `(resume_id, job_id)`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobMatchRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

impl JobMatchRow {
    /// A fresh record for the pair. Upserting it replaces any prior record,
    /// id included.
    pub fn from_result(resume_id: Uuid, job_id: Uuid, result: &MatchResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            resume_id,
            job_id,
            match_score: result.match_score,
            matching_skills: result.matching_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            explanation: result.explanation.clone(),
            created_at: Utc::now(),
        }
    }
}
