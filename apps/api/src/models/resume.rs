use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// An uploaded résumé. Immutable after creation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub text_content: String,
    pub skills_extracted: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}
