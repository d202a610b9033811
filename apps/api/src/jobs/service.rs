use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::seeder::ensure_seeded;
use crate::jobs::source::ContentSource;
use crate::llm_client::LlmProvider;
use crate::models::job::{JobFilter, JobRow};
use crate::skills::extraction::{extract_skills, SkillContext};
use crate::store::{Store, LIST_LIMIT};

#[derive(Debug, Serialize)]
pub struct AnalyzeJobResponse {
    pub job_id: Uuid,
    pub skills_extracted: Vec<String>,
}

/// Lists jobs, seeding the catalog first if it is empty.
pub async fn list_jobs(
    store: &dyn Store,
    source: &dyn ContentSource,
    filter: JobFilter,
) -> Result<Vec<JobRow>, AppError> {
    let seeded = ensure_seeded(store, source).await;
    if seeded > 0 {
        info!("Seeded {seeded} jobs on first listing");
    }
    Ok(store.find_jobs(&filter.normalized(), LIST_LIMIT).await?)
}

/// Returns the job's skills, extracting and caching them on first use.
///
/// Not serialized: two concurrent callers may both extract, last write wins.
/// A degraded extraction is not cached so the next request tries again.
pub async fn job_skills(
    store: &dyn Store,
    llm: &dyn LlmProvider,
    job: &JobRow,
) -> anyhow::Result<Vec<String>> {
    if !job.skills_extracted.is_empty() {
        debug!("Job {} skills served from cache", job.id);
        return Ok(job.skills_extracted.clone());
    }

    let extraction = extract_skills(llm, &job.extraction_text(), SkillContext::JobDescription).await;
    if !extraction.degraded {
        store.cache_job_skills(job.id, &extraction.skills).await?;
    }
    Ok(extraction.skills)
}

pub async fn analyze_job(
    store: &dyn Store,
    llm: &dyn LlmProvider,
    job_id: Uuid,
) -> Result<AnalyzeJobResponse, AppError> {
    let job = store
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let skills_extracted = job_skills(store, llm, &job).await?;
    Ok(AnalyzeJobResponse {
        job_id,
        skills_extracted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::source::StaticSource;
    use crate::llm_client::stub::StubLlm;
    use crate::store::memory::MemoryStore;

    async fn store_with_job() -> (MemoryStore, JobRow) {
        let store = MemoryStore::new();
        let job = JobRow::new(
            "DevOps Engineer",
            "CloudTech",
            "Remote",
            "Run our clusters",
            "Docker, Kubernetes",
        );
        store.insert_job_if_absent(&job).await.unwrap();
        (store, job)
    }

    #[tokio::test]
    async fn test_analyze_twice_hits_cache() {
        let (store, job) = store_with_job().await;
        let llm = StubLlm::replying("docker, kubernetes, terraform");

        let first = analyze_job(&store, &llm, job.id).await.unwrap();
        let second = analyze_job(&store, &llm, job.id).await.unwrap();

        assert_eq!(first.skills_extracted, vec!["Docker", "Kubernetes", "Terraform"]);
        assert_eq!(first.skills_extracted, second.skills_extracted);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_degraded_extraction_is_not_cached() {
        let (store, job) = store_with_job().await;
        let llm = StubLlm::failing();

        let response = analyze_job(&store, &llm, job.id).await.unwrap();
        assert!(response.skills_extracted.is_empty());

        let stored = store.get_job(job.id).await.unwrap().unwrap();
        assert!(stored.skills_extracted.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_unknown_job_is_not_found() {
        let store = MemoryStore::new();
        let llm = StubLlm::replying("Rust");
        let err = analyze_job(&store, &llm, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_list_jobs_seeds_and_filters() {
        let store = MemoryStore::new();
        let source = StaticSource::numbered(10, "post");

        let all = list_jobs(&store, &source, JobFilter::default()).await.unwrap();
        assert_eq!(all.len(), 10);

        let filter = JobFilter {
            search: Some("developer".to_string()),
            location: None,
            company: Some("web".to_string()),
        };
        let filtered = list_jobs(&store, &source, filter).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Frontend Developer");
    }
}
