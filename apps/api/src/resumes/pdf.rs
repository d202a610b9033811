use anyhow::{anyhow, Context, Result};

/// Extracts the text of every page of a PDF, concatenated.
///
/// Parsing is CPU-bound and runs on the blocking pool; a panic inside the
/// parser surfaces as an error rather than taking down the worker.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .context("PDF extraction task failed")?
        .map_err(|e| anyhow!("could not read PDF: {e}"))
}
