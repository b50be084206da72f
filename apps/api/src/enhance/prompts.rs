// LLM prompt constants for the enhancement gateway. Every prompt demands a
// bare JSON object; llm_client tolerates fenced or prose-wrapped output
// anyway.

/// System prompt for answer-evaluation enhancement.
pub const ANSWER_ENHANCE_SYSTEM: &str =
    "You are an expert interview coach evaluating candidate responses. \
    Provide constructive, specific, and actionable feedback. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

/// Answer-evaluation prompt template. Placeholders are replaced before
/// sending.
const ANSWER_ENHANCE_TEMPLATE: &str = r#"Evaluate this interview answer:

**Job Role**: {job_role}
**Question Category**: {category}
**Question**: {question}
**Candidate Answer**: {answer}
**Expected Keywords**: {keywords}
**Baseline Rule-Based Score**: {base_score}/100

Provide evaluation in this exact JSON format:
{
    "score": <number 0-100, consider the baseline but use your judgment>,
    "feedback": "<2-3 sentence overall assessment>",
    "strengths": ["<strength 1>", "<strength 2>", "<strength 3>"],
    "improvements": ["<improvement 1>", "<improvement 2>", "<improvement 3>"],
    "enhanced_feedback": "<detailed paragraph with specific coaching advice>"
}"#;

/// System prompt for session-summary enhancement.
pub const SUMMARY_ENHANCE_SYSTEM: &str =
    "You are an expert career coach analyzing interview performance. \
    Provide insightful, personalized, and actionable career advice. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

const SUMMARY_ENHANCE_TEMPLATE: &str = r#"Generate a comprehensive interview performance summary:

**Job Role**: {job_role}
**Job Description**: {job_description}
**Baseline Overall Score**: {base_score}/100

**Answer Performance**:
{answer_lines}

Provide summary in this exact JSON format:
{
    "overall_score": <number 0-100>,
    "strong_areas": ["<area 1>", "<area 2>"],
    "weak_areas": ["<area 1>", "<area 2>"],
    "recommendations": ["<specific recommendation 1>", "<specific recommendation 2>", "<specific recommendation 3>"],
    "feedback_summary": "<detailed 3-4 sentence personalized career coaching paragraph>",
    "interview_tips": ["<tip 1>", "<tip 2>", "<tip 3>"]
}"#;

/// System prompt for resume improvement suggestions.
pub const RESUME_SUGGEST_SYSTEM: &str =
    "You are an expert resume consultant and ATS optimization specialist. \
    Provide specific, actionable resume improvement advice. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

const RESUME_SUGGEST_TEMPLATE: &str = r#"Analyze this resume against the job description and provide improvement suggestions:

**Match Score**: {score}/100
**Matched Keywords**: {matched}
**Missing Keywords**: {missing}

**Resume Text** (truncated):
{resume}

**Job Description** (truncated):
{job_description}

Provide suggestions in this exact JSON format:
{
    "overall_assessment": "<2-3 sentence overview>",
    "score_interpretation": "<what the match score means for this candidate>",
    "content_suggestions": [
        {"section": "<section name>", "suggestion": "<specific improvement>", "priority": "high|medium|low"}
    ],
    "keyword_integration": [
        {"keyword": "<missing keyword>", "suggestion": "<how to naturally incorporate>"}
    ],
    "formatting_tips": ["<tip 1>", "<tip 2>"],
    "action_items": ["<prioritized action 1>", "<prioritized action 2>", "<prioritized action 3>"]
}"#;

/// Truncates prompt context without splitting a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub fn build_answer_enhance_prompt(
    job_role: &str,
    category: &str,
    question: &str,
    answer: &str,
    expected_keywords: &[String],
    base_score: f64,
) -> String {
    let keywords = if expected_keywords.is_empty() {
        "None specified".to_string()
    } else {
        expected_keywords.join(", ")
    };
    let job_role = if job_role.is_empty() {
        "Not specified"
    } else {
        job_role
    };

    ANSWER_ENHANCE_TEMPLATE
        .replace("{job_role}", job_role)
        .replace("{category}", category)
        .replace("{question}", question)
        .replace("{answer}", answer)
        .replace("{keywords}", &keywords)
        .replace("{base_score}", &base_score.to_string())
}

pub fn build_summary_enhance_prompt(
    job_role: &str,
    job_description: &str,
    answer_lines: &[String],
    base_score: f64,
) -> String {
    let job_description = if job_description.is_empty() {
        "Not provided".to_string()
    } else {
        truncate_chars(job_description, 500)
    };

    SUMMARY_ENHANCE_TEMPLATE
        .replace("{job_role}", job_role)
        .replace("{job_description}", &job_description)
        .replace("{base_score}", &base_score.to_string())
        .replace("{answer_lines}", &answer_lines.join("\n"))
}

pub fn build_resume_suggest_prompt(
    resume_text: &str,
    job_description: &str,
    score: f64,
    matched_keywords: &[String],
    missing_keywords: &[String],
) -> String {
    let joined = |keywords: &[String]| {
        keywords
            .iter()
            .take(20)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    RESUME_SUGGEST_TEMPLATE
        .replace("{score}", &score.to_string())
        .replace("{matched}", &joined(matched_keywords))
        .replace("{missing}", &joined(missing_keywords))
        .replace("{resume}", &truncate_chars(resume_text, 1500))
        .replace("{job_description}", &truncate_chars(job_description, 1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_prompt_fills_placeholders() {
        let prompt = build_answer_enhance_prompt(
            "Software Engineer",
            "behavioral",
            "Tell me about a challenge",
            "I fixed it",
            &["debugging".to_string()],
            72.5,
        );
        assert!(prompt.contains("Software Engineer"));
        assert!(prompt.contains("72.5/100"));
        assert!(prompt.contains("debugging"));
        assert!(!prompt.contains("{question}"));
    }

    #[test]
    fn test_answer_prompt_defaults_for_missing_context() {
        let prompt = build_answer_enhance_prompt("", "technical", "Q", "A", &[], 50.0);
        assert!(prompt.contains("Not specified"));
        assert!(prompt.contains("None specified"));
    }

    #[test]
    fn test_summary_prompt_truncates_job_description() {
        let long_jd = "x".repeat(2000);
        let prompt = build_summary_enhance_prompt("Engineer", &long_jd, &[], 80.0);
        assert!(prompt.len() < long_jd.len());
    }

    #[test]
    fn test_resume_prompt_caps_keyword_lists() {
        let many: Vec<String> = (0..40).map(|i| format!("kw{i}")).collect();
        let prompt = build_resume_suggest_prompt("resume", "jd", 55.0, &many, &many);
        assert!(prompt.contains("kw19"));
        assert!(!prompt.contains("kw20,"));
        assert!(!prompt.contains("kw21"));
    }
}
