use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::service::job_skills;
use crate::llm_client::LlmProvider;
use crate::matching::scorer::{score_match, MatchInput, MatchResult};
use crate::models::job::{JobFilter, JobRow};
use crate::models::job_match::JobMatchRow;
use crate::store::{Store, LIST_LIMIT};

/// Matches returned by a generation run.
pub const TOP_MATCHES: usize = 10;

#[derive(Debug, Serialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub job: JobRow,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub resume_id: Uuid,
    pub total_matches: usize,
    pub matches: Vec<RankedMatch>,
}

/// Scores a résumé against every job (up to `LIST_LIMIT`), upserts one
/// record per pair and returns the best `TOP_MATCHES`.
///
/// Jobs are processed one after another; each costs up to two LLM calls.
pub async fn generate_matches(
    store: &dyn Store,
    llm: &dyn LlmProvider,
    resume_id: Uuid,
) -> Result<MatchesResponse, AppError> {
    let resume = store
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let jobs = store.find_jobs(&JobFilter::default(), LIST_LIMIT).await?;

    let mut ranked = Vec::with_capacity(jobs.len());
    let mut degraded = 0;
    for mut job in jobs {
        let skills = job_skills(store, llm, &job).await?;
        job.skills_extracted = skills;

        let outcome = score_match(
            llm,
            MatchInput {
                resume_skills: &resume.skills_extracted,
                job_skills: &job.skills_extracted,
                resume_text: &resume.text_content,
                job_text: &job.description,
            },
        )
        .await;
        if outcome.degraded {
            degraded += 1;
        }

        store
            .upsert_match(&JobMatchRow::from_result(resume.id, job.id, &outcome.result))
            .await?;
        ranked.push(RankedMatch {
            result: outcome.result,
            job,
        });
    }

    ranked.sort_by(|a, b| b.result.match_score.total_cmp(&a.result.match_score));
    let total_matches = ranked.len();
    ranked.truncate(TOP_MATCHES);

    info!("Scored resume {resume_id} against {total_matches} jobs ({degraded} degraded)");

    Ok(MatchesResponse {
        resume_id,
        total_matches,
        matches: ranked,
    })
}

/// Previously persisted matches for a résumé, best first.
pub async fn list_matches(store: &dyn Store, resume_id: Uuid) -> Result<Vec<JobMatchRow>, AppError> {
    Ok(store.list_matches(resume_id, LIST_LIMIT).await?)
}
