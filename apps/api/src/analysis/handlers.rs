//! HTTP handlers for the analysis API.
//!
//! The handlers own everything the core must not: upload validation, size
//! limits, CPU-bound extraction off the async executor, and flattening the
//! report into the persistence-collaborator record.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::report::{analyze_resume, AnalysisReport};
use crate::errors::AppError;
use crate::extract::{extract_document, DocumentKind};
use crate::models::record::AnalysisRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadMeta {
    pub filename: String,
    pub kind: DocumentKind,
    pub size_mb: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    /// Flat record for the persistence collaborator; this service does not
    /// store it.
    pub record: AnalysisRecord,
    pub meta: UploadMeta,
}

/// POST /api/v1/analyze
/// Multipart upload: `file` (PDF or DOCX, required) plus an optional
/// `job_description` text field.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                file = Some((filename, data));
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read field: {e}")))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("missing multipart field 'file'".to_string()))?;
    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        AppError::Validation("Unsupported file type. Use PDF or DOCX.".to_string())
    })?;

    let size_mb = data.len() as f64 / 1024.0 / 1024.0;
    let limit = state.config.max_upload_mb;
    if size_mb > limit as f64 {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {size_mb:.1} MB; limit {limit} MB."
        )));
    }

    // CPU-bound extraction — spawn_blocking keeps the async executor responsive.
    let extracted = tokio::task::spawn_blocking(move || extract_document(kind, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;
    info!(%filename, pages = extracted.pages, chars = extracted.text.len(), "extracted resume text");

    let report = analyze_resume(
        &extracted.text,
        job_description.as_deref(),
        extracted.pages,
        &state.skills,
        &state.tracks,
        state.similarity.as_ref(),
    );
    let record = AnalysisRecord::from_report(&report, Uuid::new_v4(), Utc::now());

    Ok(Json(AnalyzeResponse {
        report,
        record,
        meta: UploadMeta {
            filename,
            kind,
            size_mb: (size_mb * 1000.0).round() / 1000.0,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
}

/// POST /api/v1/analyze/text
/// For callers that already hold extracted text. Empty text is not an
/// error; it degrades to a zero score with maximal suggestions.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze_resume(
        &req.resume_text,
        req.job_description.as_deref(),
        1,
        &state.skills,
        &state.tracks,
        state.similarity.as_ref(),
    );
    Ok(Json(report))
}
