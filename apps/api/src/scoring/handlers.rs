//! Axum route handlers for the Match API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{build_job_record, build_resume_record, document};
use crate::models::job::JobRecord;
use crate::models::resume::ResumeRecord;
use crate::scoring::composite::WeightPreset;
use crate::scoring::engine::{score_match, MatchReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume: ResumeRecord,
    pub job: JobRecord,
    /// Overrides the startup preset for this request.
    #[serde(default)]
    pub preset: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Multipart upload: `file` (the CV — pdf, docx, or txt) plus a
/// `job_description` text field. Runs ingestion, record extraction, and
/// scoring; returns the full match report.
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut job_description: Option<String> = None;
    let mut preset_override: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::InvalidInput("'file' field is missing a file name".to_string())
                    })?;
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read uploaded file: {e}"))
                })?;
                file = Some((name, data));
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read job_description: {e}"))
                })?);
            }
            Some("preset") => {
                preset_override = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read preset: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::InvalidInput("Missing 'file' field".to_string()))?;
    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("job_description cannot be empty".to_string()))?;

    let preset = resolve_preset(&state, preset_override.as_deref())?;

    let resume_text = document::extract_text(&file_name, &data)?;
    let resume = build_resume_record(
        &resume_text,
        Some(file_name),
        &state.vocabulary,
        state.normalize_options,
    );
    let job = build_job_record(&job_description, &state.vocabulary, state.normalize_options);

    let report = score_match(&resume, &job, preset)?;
    Ok(Json(report))
}

/// POST /api/v1/match/score
///
/// The pure-engine endpoint: callers that run their own ingestion submit two
/// already-populated records and get the same report.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let preset = resolve_preset(&state, request.preset.as_deref())?;
    let report = score_match(&request.resume, &request.job, preset)?;
    Ok(Json(report))
}

fn resolve_preset(state: &AppState, requested: Option<&str>) -> Result<WeightPreset, AppError> {
    match requested {
        None => Ok(state.preset),
        Some(name) => WeightPreset::from_name(name)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown weighting preset '{name}'"))),
    }
}
