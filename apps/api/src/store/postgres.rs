use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobFilter, JobRow};
use crate::models::job_match::JobMatchRow;
use crate::models::resume::ResumeRow;
use crate::store::Store;

/// PostgreSQL-backed store. Key uniqueness is enforced by the schema, so
/// the insert-or-skip and upsert paths are single statements.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn count_jobs(&self) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_jobs(&self, filter: &JobFilter, limit: i64) -> Result<Vec<JobRow>> {
        Ok(sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE ($1::text IS NULL OR strpos(lower(title), lower($1)) > 0)
              AND ($2::text IS NULL OR strpos(lower(location), lower($2)) > 0)
              AND ($3::text IS NULL OR strpos(lower(company), lower($3)) > 0)
            ORDER BY created_at ASC, id ASC
            LIMIT $4
            "#,
        )
        .bind(filter.search.as_deref())
        .bind(filter.location.as_deref())
        .bind(filter.company.as_deref())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobRow>> {
        Ok(sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_job_if_absent(&self, job: &JobRow) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO jobs
                (id, title, company, location, description, requirements,
                 skills_extracted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (title, company) DO NOTHING
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.skills_extracted)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn cache_job_skills(&self, job_id: Uuid, skills: &[String]) -> Result<()> {
        sqlx::query("UPDATE jobs SET skills_extracted = $1 WHERE id = $2")
            .bind(skills)
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_resume(&self, resume: &ResumeRow) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO resumes (id, filename, text_content, skills_extracted, uploaded_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(resume.id)
        .bind(&resume.filename)
        .bind(&resume.text_content)
        .bind(&resume.skills_extracted)
        .bind(resume.uploaded_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn upsert_match(&self, record: &JobMatchRow) -> Result<()> {
        // The conflict target makes check-and-write one atomic statement.
        sqlx::query(
            r#"
            INSERT INTO job_matches
                (id, resume_id, job_id, match_score, matching_skills,
                 missing_skills, explanation, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (resume_id, job_id) DO UPDATE SET
                id = EXCLUDED.id,
                match_score = EXCLUDED.match_score,
                matching_skills = EXCLUDED.matching_skills,
                missing_skills = EXCLUDED.missing_skills,
                explanation = EXCLUDED.explanation,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(record.id)
        .bind(record.resume_id)
        .bind(record.job_id)
        .bind(record.match_score)
        .bind(&record.matching_skills)
        .bind(&record.missing_skills)
        .bind(&record.explanation)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_matches(&self, resume_id: Uuid, limit: i64) -> Result<Vec<JobMatchRow>> {
        Ok(sqlx::query_as::<_, JobMatchRow>(
            r#"
            SELECT * FROM job_matches
            WHERE resume_id = $1
            ORDER BY match_score DESC, created_at ASC
            LIMIT $2
            "#,
        )
        .bind(resume_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
