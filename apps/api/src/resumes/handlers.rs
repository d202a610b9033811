//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiPath;
use crate::models::resume::ResumeRow;
use crate::resumes::service::{
    get_resume, process_upload, validate_filename, UploadResponse, UploadedFile,
};
use crate::state::AppState;

/// Multipart field carrying the résumé.
const FILE_FIELD: &str = "file";

/// POST /api/resume/upload
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let file = read_file_field(&mut multipart).await?;
    let response = process_upload(state.store.as_ref(), state.llm.as_ref(), file).await?;
    Ok(Json(response))
}

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    Ok(Json(get_resume(state.store.as_ref(), id).await?))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        // Reject before buffering the body.
        validate_filename(&filename)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
        return Ok(UploadedFile {
            filename,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in upload"
    )))
}
