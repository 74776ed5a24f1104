//! Axum route handlers for the Screening API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::screening::{ScreenRequest, ScreenResponse};
use crate::screening::intake::{decode_resume_upload, require_resume_text};
use crate::state::AppState;

/// POST /analyze
///
/// Screens a resume supplied as raw text against a job description.
/// A body missing either field is rejected with 422.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<ScreenRequest>, JsonRejection>,
) -> Result<Json<ScreenResponse>, AppError> {
    let Json(request) = payload?;
    require_resume_text(&request.resume_text)?;

    let result = state
        .screener
        .screen(&request.resume_text, &request.job_description);
    info!(score = result.score, fit = %result.fit, "analyze: resume screened");

    Ok(Json(result.into()))
}

/// POST /upload
///
/// Multipart form with a `file` part (plain text recommended) and a
/// `job_description` field. Binary uploads are decoded as UTF-8 with invalid
/// bytes dropped; no document parsing is attempted.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScreenResponse>, AppError> {
    let mut multipart = multipart?;

    let mut file: Option<(Option<String>, bytes::Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            Some("job_description") => {
                job_description = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| {
        AppError::UnprocessableEntity("Missing required form field: file".to_string())
    })?;
    let job_description = job_description.ok_or_else(|| {
        AppError::UnprocessableEntity("Missing required form field: job_description".to_string())
    })?;

    let resume_text = decode_resume_upload(filename.as_deref(), &data)?;

    let result = state.screener.screen(&resume_text, &job_description);
    info!(
        filename = filename.as_deref().unwrap_or_default(),
        bytes = data.len(),
        score = result.score,
        fit = %result.fit,
        "upload: resume screened"
    );

    Ok(Json(result.into()))
}
