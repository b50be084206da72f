use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::{blend_scores, EvaluationContext};
use crate::errors::AppError;
use crate::interview::evaluator::{evaluate_answer, AnswerEvaluation};
use crate::interview::summary::{
    summarize_session, AnswerRecord, InterviewSummary, ReadinessLevel,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub question_text: String,
    pub category: String,
    pub answer_text: String,
    #[serde(default)]
    pub expected_keywords: Vec<String>,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub evaluation: AnswerEvaluation,
    /// Detailed coaching paragraph from the LLM; absent without enhancement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_feedback: Option<String>,
}

/// POST /api/v1/interview/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if req.question_text.trim().is_empty() || req.answer_text.trim().is_empty() {
        return Err(AppError::Validation(
            "question_text and answer_text are required".to_string(),
        ));
    }
    if req.category.trim().is_empty() {
        return Err(AppError::Validation(
            "category is required (behavioral, technical, situational)".to_string(),
        ));
    }

    let mut evaluation = evaluate_answer(
        &req.question_text,
        &req.category,
        &req.answer_text,
        &req.expected_keywords,
    );

    let ctx = EvaluationContext {
        question_text: &req.question_text,
        category: &req.category,
        answer_text: &req.answer_text,
        expected_keywords: &req.expected_keywords,
        job_role: req.job_role.as_deref().unwrap_or(""),
        job_description: req.job_description.as_deref().unwrap_or(""),
    };

    let mut enhanced_feedback = None;
    if let Some(enhanced) = state.enhancer.enhance_evaluation(&ctx, &evaluation).await {
        evaluation.score = blend_scores(evaluation.score, enhanced.score);
        if !enhanced.feedback.is_empty() {
            evaluation.feedback = enhanced.feedback;
        }
        if !enhanced.strengths.is_empty() {
            evaluation.strengths = enhanced.strengths;
        }
        if !enhanced.improvements.is_empty() {
            evaluation.improvements = enhanced.improvements;
        }
        if !enhanced.enhanced_feedback.is_empty() {
            enhanced_feedback = Some(enhanced.enhanced_feedback);
        }
    }

    Ok(Json(EvaluateResponse {
        evaluation,
        enhanced_feedback,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub job_role: String,
    #[serde(default)]
    pub job_description: Option<String>,
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: InterviewSummary,
    /// Extra coaching tips from the LLM; absent without enhancement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_tips: Option<Vec<String>>,
}

/// POST /api/v1/interview/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    if req.job_role.trim().is_empty() {
        return Err(AppError::Validation("job_role is required".to_string()));
    }
    if req.answers.is_empty() {
        return Err(AppError::Validation(
            "at least one answer is required".to_string(),
        ));
    }

    let job_description = req.job_description.as_deref().unwrap_or("");
    let mut summary = summarize_session(&req.job_role, job_description, &req.answers);

    let mut interview_tips = None;
    if let Some(enhanced) = state
        .enhancer
        .enhance_summary(&req.job_role, job_description, &req.answers, &summary)
        .await
    {
        summary.overall_score = blend_scores(summary.overall_score, enhanced.overall_score);
        // Readiness must stay consistent with the reported score.
        summary.readiness_level = ReadinessLevel::from_score(summary.overall_score);
        if !enhanced.strong_areas.is_empty() {
            summary.strong_areas = enhanced.strong_areas;
        }
        if !enhanced.weak_areas.is_empty() {
            summary.weak_areas = enhanced.weak_areas;
        }
        if !enhanced.recommendations.is_empty() {
            summary.recommendations = enhanced.recommendations;
        }
        if !enhanced.feedback_summary.is_empty() {
            summary.feedback_summary = enhanced.feedback_summary;
        }
        if !enhanced.interview_tips.is_empty() {
            interview_tips = Some(enhanced.interview_tips);
        }
    }

    Ok(Json(SummaryResponse {
        summary,
        interview_tips,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_request_optional_fields_default() {
        let req: EvaluateRequest = serde_json::from_str(
            r#"{"question_text": "Q", "category": "technical", "answer_text": "A"}"#,
        )
        .unwrap();
        assert!(req.expected_keywords.is_empty());
        assert!(req.job_role.is_none());
    }

    #[test]
    fn test_summary_request_deserializes_answers() {
        let req: SummaryRequest = serde_json::from_str(
            r#"{
                "job_role": "Engineer",
                "answers": [
                    {"category": "behavioral", "score": 80.0, "strengths": ["Good"], "improvements": []}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(req.answers.len(), 1);
        assert_eq!(req.answers[0].score, 80.0);
        assert!(req.job_description.is_none());
    }
}
