//! In-memory `Store` used by tests. Each method takes the lock once, so
//! every operation is atomic just like its SQL counterpart.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::job::{JobFilter, JobRow};
use crate::models::job_match::JobMatchRow;
use crate::models::resume::ResumeRow;
use crate::store::Store;

#[derive(Default)]
struct Tables {
    jobs: Vec<JobRow>,
    resumes: Vec<ResumeRow>,
    matches: Vec<JobMatchRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn match_count(&self) -> usize {
        self.tables.read().await.matches.len()
    }

    pub async fn resume_count(&self) -> usize {
        self.tables.read().await.resumes.len()
    }
}

/// Case-insensitive substring match on every filter that is set.
fn filter_matches(filter: &JobFilter, job: &JobRow) -> bool {
    fn contains(haystack: &str, needle: &Option<String>) -> bool {
        needle
            .as_deref()
            .map(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
            .unwrap_or(true)
    }
    contains(&job.title, &filter.search)
        && contains(&job.location, &filter.location)
        && contains(&job.company, &filter.company)
}

fn cap(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[async_trait]
impl Store for MemoryStore {
    async fn count_jobs(&self) -> Result<i64> {
        Ok(self.tables.read().await.jobs.len() as i64)
    }

    async fn find_jobs(&self, filter: &JobFilter, limit: i64) -> Result<Vec<JobRow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .jobs
            .iter()
            .filter(|j| filter_matches(filter, j))
            .take(cap(limit))
            .cloned()
            .collect())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRow>> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn insert_job_if_absent(&self, job: &JobRow) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let exists = tables
            .jobs
            .iter()
            .any(|j| j.title == job.title && j.company == job.company);
        if exists {
            return Ok(false);
        }
        tables.jobs.push(job.clone());
        Ok(true)
    }

    async fn cache_job_skills(&self, job_id: Uuid, skills: &[String]) -> Result<()> {
        let mut tables = self.tables.write().await;
        if let Some(job) = tables.jobs.iter_mut().find(|j| j.id == job_id) {
            job.skills_extracted = skills.to_vec();
        }
        Ok(())
    }

    async fn insert_resume(&self, resume: &ResumeRow) -> Result<()> {
        self.tables.write().await.resumes.push(resume.clone());
        Ok(())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>> {
        let tables = self.tables.read().await;
        Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn upsert_match(&self, record: &JobMatchRow) -> Result<()> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .matches
            .iter()
            .position(|m| m.resume_id == record.resume_id && m.job_id == record.job_id);
        match existing {
            Some(idx) => tables.matches[idx] = record.clone(),
            None => tables.matches.push(record.clone()),
        }
        Ok(())
    }

    async fn list_matches(&self, resume_id: Uuid, limit: i64) -> Result<Vec<JobMatchRow>> {
        let tables = self.tables.read().await;
        let mut matches: Vec<JobMatchRow> = tables
            .matches
            .iter()
            .filter(|m| m.resume_id == resume_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        matches.truncate(cap(limit));
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::MatchResult;
    use crate::store::LIST_LIMIT;

    fn result(score: f64, explanation: &str) -> MatchResult {
        MatchResult {
            match_score: score,
            matching_skills: vec!["Python".to_string()],
            missing_skills: vec!["Docker".to_string()],
            explanation: explanation.to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_pair() {
        let store = MemoryStore::new();
        let (resume_id, job_id) = (Uuid::new_v4(), Uuid::new_v4());

        let first = JobMatchRow::from_result(resume_id, job_id, &result(20.0, "first"));
        let second = JobMatchRow::from_result(resume_id, job_id, &result(80.0, "second"));
        store.upsert_match(&first).await.unwrap();
        store.upsert_match(&second).await.unwrap();

        let stored = store.list_matches(resume_id, LIST_LIMIT).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].explanation, "second");
        assert_eq!(stored[0].match_score, 80.0);
        assert_eq!(stored[0].id, second.id);
    }

    #[tokio::test]
    async fn test_upsert_keeps_distinct_pairs() {
        let store = MemoryStore::new();
        let resume_id = Uuid::new_v4();
        for _ in 0..3 {
            let record = JobMatchRow::from_result(resume_id, Uuid::new_v4(), &result(10.0, "x"));
            store.upsert_match(&record).await.unwrap();
        }
        assert_eq!(store.match_count().await, 3);
    }

    #[tokio::test]
    async fn test_list_matches_sorted_and_capped() {
        let store = MemoryStore::new();
        let resume_id = Uuid::new_v4();
        for score in [10.0, 90.0, 50.0] {
            let record = JobMatchRow::from_result(resume_id, Uuid::new_v4(), &result(score, "x"));
            store.upsert_match(&record).await.unwrap();
        }
        let listed = store.list_matches(resume_id, 2).await.unwrap();
        let scores: Vec<f64> = listed.iter().map(|m| m.match_score).collect();
        assert_eq!(scores, vec![90.0, 50.0]);
    }

    fn backend_job() -> JobRow {
        JobRow::new("Backend Developer", "DataSystems", "Austin, TX", "Build APIs", "Rust")
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(filter_matches(&JobFilter::default(), &backend_job()));
    }

    #[test]
    fn test_filters_are_case_insensitive_substrings() {
        let filter = JobFilter {
            search: Some("backend".to_string()),
            location: Some("AUSTIN".to_string()),
            company: Some("systems".to_string()),
        };
        assert!(filter_matches(&filter, &backend_job()));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter = JobFilter {
            search: Some("backend".to_string()),
            location: Some("Remote".to_string()),
            company: None,
        };
        assert!(!filter_matches(&filter, &backend_job()));
    }

    #[tokio::test]
    async fn test_insert_job_if_absent_dedupes_title_company() {
        let store = MemoryStore::new();
        let a = JobRow::new("QA Engineer", "QualityFirst", "Denver, CO", "one", "");
        let b = JobRow::new("QA Engineer", "QualityFirst", "Denver, CO", "two", "");
        assert!(store.insert_job_if_absent(&a).await.unwrap());
        assert!(!store.insert_job_if_absent(&b).await.unwrap());
        assert_eq!(store.count_jobs().await.unwrap(), 1);
    }
}
