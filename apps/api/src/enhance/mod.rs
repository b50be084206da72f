//! Enhancement gateway — optional LLM post-processing of engine output.
//!
//! The gateway is a capability-abstracted collaborator: one trait with
//! fallible, time-boxed calls, injected into the handlers as
//! `Arc<dyn Enhancer>`. Every method returns `Option` — `None` on any
//! failure — so the deterministic result is always available standalone.
//! Anything the model returns is validated and clamped before use.

pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interview::evaluator::AnswerEvaluation;
use crate::interview::summary::{AnswerRecord, InterviewSummary};
use crate::llm_client::LlmClient;
use crate::resume::matcher::MatchReport;
use crate::text::round2;

const MAX_LIST_ITEMS: usize = 5;
const MAX_CONTENT_SUGGESTIONS: usize = 8;
const MAX_KEYWORD_INTEGRATIONS: usize = 6;

/// Weighting used when a handler blends an enhanced score with the
/// deterministic one. Transport-level policy; the engine never sees it.
const ENHANCED_WEIGHT: f64 = 0.6;
const DETERMINISTIC_WEIGHT: f64 = 0.4;

/// Blends an enhancement score into the deterministic score, clamped and
/// rounded like every other reported score.
pub fn blend_scores(deterministic: f64, enhanced: f64) -> f64 {
    round2((ENHANCED_WEIGHT * enhanced + DETERMINISTIC_WEIGHT * deterministic).clamp(0.0, 100.0))
}

/// Everything the answer-evaluation enhancer may want for context.
pub struct EvaluationContext<'a> {
    pub question_text: &'a str,
    pub category: &'a str,
    pub answer_text: &'a str,
    pub expected_keywords: &'a [String],
    pub job_role: &'a str,
    pub job_description: &'a str,
}

/// Sanitized enhancement of a single answer evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationEnhancement {
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub enhanced_feedback: String,
}

/// Sanitized enhancement of a session summary.
#[derive(Debug, Clone)]
pub struct SummaryEnhancement {
    pub overall_score: f64,
    pub strong_areas: Vec<String>,
    pub weak_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub feedback_summary: String,
    pub interview_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSuggestion {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordIntegration {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub suggestion: String,
}

/// Resume improvement suggestions, already truncated to their caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSuggestions {
    #[serde(default)]
    pub overall_assessment: String,
    #[serde(default)]
    pub score_interpretation: String,
    #[serde(default)]
    pub content_suggestions: Vec<ContentSuggestion>,
    #[serde(default)]
    pub keyword_integration: Vec<KeywordIntegration>,
    #[serde(default)]
    pub formatting_tips: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
}

/// The enhancement gateway. May be unavailable, may time out, may return
/// malformed data; callers get `None` in every failure case and must treat
/// the deterministic result as authoritative.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance_evaluation(
        &self,
        ctx: &EvaluationContext<'_>,
        base: &AnswerEvaluation,
    ) -> Option<EvaluationEnhancement>;

    async fn enhance_summary(
        &self,
        job_role: &str,
        job_description: &str,
        answers: &[AnswerRecord],
        base: &InterviewSummary,
    ) -> Option<SummaryEnhancement>;

    async fn resume_suggestions(
        &self,
        resume_text: &str,
        job_description: &str,
        report: &MatchReport,
    ) -> Option<ResumeSuggestions>;
}

/// Enhancer used when no LLM is configured: every call declines.
pub struct NoopEnhancer;

#[async_trait]
impl Enhancer for NoopEnhancer {
    async fn enhance_evaluation(
        &self,
        _ctx: &EvaluationContext<'_>,
        _base: &AnswerEvaluation,
    ) -> Option<EvaluationEnhancement> {
        None
    }

    async fn enhance_summary(
        &self,
        _job_role: &str,
        _job_description: &str,
        _answers: &[AnswerRecord],
        _base: &InterviewSummary,
    ) -> Option<SummaryEnhancement> {
        None
    }

    async fn resume_suggestions(
        &self,
        _resume_text: &str,
        _job_description: &str,
        _report: &MatchReport,
    ) -> Option<ResumeSuggestions> {
        None
    }
}

// Wire-format structs: lenient on purpose. Missing fields default, scores
// arrive as plain numbers, extra fields are ignored.

#[derive(Debug, Deserialize)]
struct RawEvaluation {
    score: Option<f64>,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    improvements: Vec<String>,
    #[serde(default)]
    enhanced_feedback: String,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    overall_score: Option<f64>,
    #[serde(default)]
    strong_areas: Vec<String>,
    #[serde(default)]
    weak_areas: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    feedback_summary: String,
    #[serde(default)]
    interview_tips: Vec<String>,
}

fn truncated(mut items: Vec<String>, cap: usize) -> Vec<String> {
    items.truncate(cap);
    items
}

fn sanitize_evaluation(raw: RawEvaluation, base: &AnswerEvaluation) -> EvaluationEnhancement {
    EvaluationEnhancement {
        score: raw.score.unwrap_or(base.score).clamp(0.0, 100.0),
        feedback: raw.feedback,
        strengths: truncated(raw.strengths, MAX_LIST_ITEMS),
        improvements: truncated(raw.improvements, MAX_LIST_ITEMS),
        enhanced_feedback: raw.enhanced_feedback,
    }
}

fn sanitize_summary(raw: RawSummary, base: &InterviewSummary) -> SummaryEnhancement {
    SummaryEnhancement {
        overall_score: raw
            .overall_score
            .unwrap_or(base.overall_score)
            .clamp(0.0, 100.0),
        strong_areas: truncated(raw.strong_areas, MAX_LIST_ITEMS),
        weak_areas: truncated(raw.weak_areas, MAX_LIST_ITEMS),
        recommendations: truncated(raw.recommendations, MAX_LIST_ITEMS),
        feedback_summary: raw.feedback_summary,
        interview_tips: truncated(raw.interview_tips, MAX_LIST_ITEMS),
    }
}

fn sanitize_suggestions(mut raw: ResumeSuggestions) -> ResumeSuggestions {
    raw.content_suggestions.truncate(MAX_CONTENT_SUGGESTIONS);
    raw.keyword_integration.truncate(MAX_KEYWORD_INTEGRATIONS);
    raw.formatting_tips.truncate(MAX_LIST_ITEMS);
    raw.action_items.truncate(MAX_LIST_ITEMS);
    raw
}

/// LLM-backed enhancer. Each method is one prompt, one time-boxed call,
/// and one sanitize pass; failures are logged at warn level and reported
/// as `None`.
pub struct LlmEnhancer {
    client: LlmClient,
}

impl LlmEnhancer {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Enhancer for LlmEnhancer {
    async fn enhance_evaluation(
        &self,
        ctx: &EvaluationContext<'_>,
        base: &AnswerEvaluation,
    ) -> Option<EvaluationEnhancement> {
        let prompt = prompts::build_answer_enhance_prompt(
            ctx.job_role,
            ctx.category,
            ctx.question_text,
            ctx.answer_text,
            ctx.expected_keywords,
            base.score,
        );

        match self
            .client
            .call_json::<RawEvaluation>(&prompt, prompts::ANSWER_ENHANCE_SYSTEM)
            .await
        {
            Ok(raw) => Some(sanitize_evaluation(raw, base)),
            Err(e) => {
                warn!("answer enhancement failed, using deterministic result: {e}");
                None
            }
        }
    }

    async fn enhance_summary(
        &self,
        job_role: &str,
        job_description: &str,
        answers: &[AnswerRecord],
        base: &InterviewSummary,
    ) -> Option<SummaryEnhancement> {
        let answer_lines: Vec<String> = answers
            .iter()
            .enumerate()
            .map(|(i, a)| format!("Q{} ({}): Score {}/100", i + 1, a.category, a.score))
            .collect();

        let prompt = prompts::build_summary_enhance_prompt(
            job_role,
            job_description,
            &answer_lines,
            base.overall_score,
        );

        match self
            .client
            .call_json::<RawSummary>(&prompt, prompts::SUMMARY_ENHANCE_SYSTEM)
            .await
        {
            Ok(raw) => Some(sanitize_summary(raw, base)),
            Err(e) => {
                warn!("summary enhancement failed, using deterministic result: {e}");
                None
            }
        }
    }

    async fn resume_suggestions(
        &self,
        resume_text: &str,
        job_description: &str,
        report: &MatchReport,
    ) -> Option<ResumeSuggestions> {
        let prompt = prompts::build_resume_suggest_prompt(
            resume_text,
            job_description,
            report.score,
            &report.matched_keywords,
            &report.missing_keywords,
        );

        match self
            .client
            .call_json::<ResumeSuggestions>(&prompt, prompts::RESUME_SUGGEST_SYSTEM)
            .await
        {
            Ok(raw) => Some(sanitize_suggestions(raw)),
            Err(e) => {
                warn!("resume suggestion enhancement failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_evaluation() -> AnswerEvaluation {
        AnswerEvaluation {
            score: 72.5,
            feedback: "Good answer".to_string(),
            strengths: vec!["s".to_string()],
            improvements: vec!["i".to_string()],
            keywords_found: Vec::new(),
            keywords_missed: Vec::new(),
        }
    }

    #[test]
    fn test_blend_weights_enhanced_60_deterministic_40() {
        assert_eq!(blend_scores(50.0, 100.0), 80.0);
        assert_eq!(blend_scores(100.0, 50.0), 70.0);
    }

    #[test]
    fn test_blend_result_clamped() {
        assert!(blend_scores(100.0, 250.0) <= 100.0);
        assert!(blend_scores(0.0, -40.0) >= 0.0);
    }

    #[test]
    fn test_sanitize_evaluation_clamps_score() {
        let raw = RawEvaluation {
            score: Some(140.0),
            feedback: String::new(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            enhanced_feedback: String::new(),
        };
        let enhanced = sanitize_evaluation(raw, &base_evaluation());
        assert_eq!(enhanced.score, 100.0);
    }

    #[test]
    fn test_sanitize_evaluation_missing_score_falls_back_to_base() {
        let raw = RawEvaluation {
            score: None,
            feedback: String::new(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            enhanced_feedback: String::new(),
        };
        let enhanced = sanitize_evaluation(raw, &base_evaluation());
        assert_eq!(enhanced.score, 72.5);
    }

    #[test]
    fn test_sanitize_evaluation_truncates_lists() {
        let raw = RawEvaluation {
            score: Some(80.0),
            feedback: String::new(),
            strengths: (0..9).map(|i| format!("s{i}")).collect(),
            improvements: (0..9).map(|i| format!("i{i}")).collect(),
            enhanced_feedback: String::new(),
        };
        let enhanced = sanitize_evaluation(raw, &base_evaluation());
        assert_eq!(enhanced.strengths.len(), 5);
        assert_eq!(enhanced.improvements.len(), 5);
    }

    #[test]
    fn test_raw_evaluation_tolerates_missing_fields() {
        let raw: RawEvaluation = serde_json::from_str(r#"{"score": 88}"#).unwrap();
        assert_eq!(raw.score, Some(88.0));
        assert!(raw.strengths.is_empty());
    }

    #[test]
    fn test_sanitize_suggestions_truncates_to_caps() {
        let raw = ResumeSuggestions {
            overall_assessment: String::new(),
            score_interpretation: String::new(),
            content_suggestions: (0..12)
                .map(|i| ContentSuggestion {
                    section: format!("s{i}"),
                    suggestion: String::new(),
                    priority: "high".to_string(),
                })
                .collect(),
            keyword_integration: (0..12)
                .map(|i| KeywordIntegration {
                    keyword: format!("k{i}"),
                    suggestion: String::new(),
                })
                .collect(),
            formatting_tips: (0..9).map(|i| format!("t{i}")).collect(),
            action_items: (0..9).map(|i| format!("a{i}")).collect(),
        };
        let sanitized = sanitize_suggestions(raw);
        assert_eq!(sanitized.content_suggestions.len(), 8);
        assert_eq!(sanitized.keyword_integration.len(), 6);
        assert_eq!(sanitized.formatting_tips.len(), 5);
        assert_eq!(sanitized.action_items.len(), 5);
    }

    #[tokio::test]
    async fn test_noop_enhancer_declines_everything() {
        let noop = NoopEnhancer;
        let ctx = EvaluationContext {
            question_text: "Q",
            category: "technical",
            answer_text: "A",
            expected_keywords: &[],
            job_role: "",
            job_description: "",
        };
        assert!(noop.enhance_evaluation(&ctx, &base_evaluation()).await.is_none());
        assert!(noop
            .resume_suggestions(
                "resume",
                "jd",
                &MatchReport {
                    score: 50.0,
                    matched_keywords: Vec::new(),
                    missing_keywords: Vec::new(),
                },
            )
            .await
            .is_none());
    }
}
