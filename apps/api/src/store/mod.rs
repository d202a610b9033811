//! Persistence layer for jobs, résumés and matches.
//!
//! `AppState` holds an `Arc<dyn Store>`. Every method is a single atomic
//! storage operation; nothing here holds a lock across an LLM call.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::job::{JobFilter, JobRow};
use crate::models::job_match::JobMatchRow;
use crate::models::resume::ResumeRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Upper bound on rows returned by any listing.
pub const LIST_LIMIT: i64 = 100;

#[async_trait]
pub trait Store: Send + Sync {
    async fn count_jobs(&self) -> Result<i64>;

    /// Jobs matching `filter`, oldest first, at most `limit`.
    async fn find_jobs(&self, filter: &JobFilter, limit: i64) -> Result<Vec<JobRow>>;

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRow>>;

    /// Inserts `job` unless a job with the same `(title, company)` exists.
    /// Returns whether a row was inserted.
    async fn insert_job_if_absent(&self, job: &JobRow) -> Result<bool>;

    /// Stores extracted skills on a job. Concurrent writers: last write wins.
    async fn cache_job_skills(&self, job_id: Uuid, skills: &[String]) -> Result<()>;

    async fn insert_resume(&self, resume: &ResumeRow) -> Result<()>;

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>>;

    /// Replaces the record for `(record.resume_id, record.job_id)` or inserts
    /// it. Never leaves two records for one pair.
    async fn upsert_match(&self, record: &JobMatchRow) -> Result<()>;

    /// Matches for a résumé, best score first, at most `limit`.
    async fn list_matches(&self, resume_id: Uuid, limit: i64) -> Result<Vec<JobMatchRow>>;
}
