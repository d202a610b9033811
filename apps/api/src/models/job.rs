use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. `skills_extracted` starts empty and is filled once by
/// skill extraction, then reused.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub skills_extracted: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        requirements: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: description.into(),
            requirements: requirements.into(),
            skills_extracted: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Text submitted for skill extraction.
    pub fn extraction_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.requirements)
    }
}

/// Optional, combinable case-insensitive substring filters (AND semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    /// Matched against the job title.
    pub search: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
}

impl JobFilter {
    /// Drops empty filter values so `?search=` behaves like no filter.
    pub fn normalized(self) -> Self {
        fn keep(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }
        Self {
            search: keep(self.search),
            location: keep(self.location),
            company: keep(self.company),
        }
    }
}
