use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmProvider;
use crate::models::resume::ResumeRow;
use crate::resumes::pdf::extract_pdf_text;
use crate::skills::extraction::{extract_skills, SkillContext};
use crate::store::Store;
use crate::text::preview;

/// Characters of extracted text echoed back after upload.
pub const TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub resume_id: Uuid,
    pub skills_extracted: Vec<String>,
    pub text_preview: String,
}

pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.to_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ))
    }
}

/// Validates, extracts and stores an uploaded résumé. Nothing is stored
/// unless every step succeeds.
pub async fn process_upload(
    store: &dyn Store,
    llm: &dyn LlmProvider,
    file: UploadedFile,
) -> Result<UploadResponse, AppError> {
    validate_filename(&file.filename)?;

    let text = extract_pdf_text(file.bytes)
        .await
        .map_err(|e| AppError::Processing(format!("Error processing resume: {e}")))?;

    store_resume(store, llm, file.filename, text).await
}

/// Extracts skills from already-extracted text and persists the résumé.
pub async fn store_resume(
    store: &dyn Store,
    llm: &dyn LlmProvider,
    filename: String,
    text: String,
) -> Result<UploadResponse, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF".to_string(),
        ));
    }

    let extraction = extract_skills(llm, &text, SkillContext::Resume).await;

    let resume = ResumeRow {
        id: Uuid::new_v4(),
        filename,
        text_content: text,
        skills_extracted: extraction.skills,
        uploaded_at: Utc::now(),
    };
    store.insert_resume(&resume).await?;

    info!(
        "Stored resume {} ({}) with {} skills",
        resume.id,
        resume.filename,
        resume.skills_extracted.len()
    );

    Ok(UploadResponse {
        message: "Resume uploaded successfully".to_string(),
        resume_id: resume.id,
        text_preview: preview(&resume.text_content, TEXT_PREVIEW_CHARS),
        skills_extracted: resume.skills_extracted,
    })
}

pub async fn get_resume(store: &dyn Store, id: Uuid) -> Result<ResumeRow, AppError> {
    store
        .get_resume(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}
