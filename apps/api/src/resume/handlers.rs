use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::ResumeSuggestions;
use crate::errors::AppError;
use crate::resume::matcher::{analyze_resume_match, MatchReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: MatchReport,
    /// LLM improvement suggestions; absent when enhancement is off or the
    /// gateway declined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<ResumeSuggestions>,
}

/// POST /api/v1/resume/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.resume_text.trim().is_empty() || req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text and job_description are required".to_string(),
        ));
    }

    let report = analyze_resume_match(&req.resume_text, &req.job_description);

    let suggestions = state
        .enhancer
        .resume_suggestions(&req.resume_text, &req.job_description, &report)
        .await;

    Ok(Json(AnalyzeResponse {
        report,
        suggestions,
    }))
}
