//! Session summarizer — aggregates scored answers into an overall
//! readiness verdict, per-category averages, and recommendations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::interview::Category;
use crate::text::round2;

const MAX_STRONG_AREAS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 5;
const TOP_RECURRING_STRENGTHS: usize = 3;
const TOP_RECURRING_IMPROVEMENTS: usize = 2;

/// One already-scored answer, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub category: String,
    pub score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Coarse verdict over the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Low,
    Medium,
    High,
}

impl ReadinessLevel {
    pub fn from_score(overall_score: f64) -> ReadinessLevel {
        if overall_score >= 80.0 {
            ReadinessLevel::High
        } else if overall_score >= 60.0 {
            ReadinessLevel::Medium
        } else {
            ReadinessLevel::Low
        }
    }
}

/// Per-category averages. `None` means the category had no answers and
/// must not bias the overall average; the empty-session result is the one
/// place explicit zeros are reported instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScores {
    pub behavioral: Option<f64>,
    pub technical: Option<f64>,
    pub situational: Option<f64>,
}

impl CategoryScores {
    fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Behavioral => self.behavioral,
            Category::Technical => self.technical,
            Category::Situational => self.situational,
        }
    }
}

/// Full interview session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub overall_score: f64,
    pub readiness_level: ReadinessLevel,
    pub strong_areas: Vec<String>,
    pub weak_areas: Vec<String>,
    pub category_scores: CategoryScores,
    pub recommendations: Vec<String>,
    pub feedback_summary: String,
}

/// Summarizes a set of scored answers for the target role.
///
/// The overall score pools every answer together — categories with more
/// answers weigh proportionally more, by design. Answers tagged with an
/// unknown category still count toward the pooled average and the
/// recurring-feedback analysis, but not toward any category average.
pub fn summarize_session(
    job_role: &str,
    _job_description: &str,
    answers: &[AnswerRecord],
) -> InterviewSummary {
    if answers.is_empty() {
        return incomplete_session_summary();
    }

    let mut pooled: Vec<f64> = Vec::with_capacity(answers.len());
    let mut by_category: HashMap<Category, Vec<f64>> = HashMap::new();
    let mut all_strengths: Vec<String> = Vec::new();
    let mut all_improvements: Vec<String> = Vec::new();

    for answer in answers {
        let score = answer.score.clamp(0.0, 100.0);
        pooled.push(score);

        if let Some(category) = Category::parse(&answer.category) {
            by_category.entry(category).or_default().push(score);
        }

        all_strengths.extend(answer.strengths.iter().cloned());
        all_improvements.extend(answer.improvements.iter().cloned());
    }

    let average = |scores: &[f64]| round2(scores.iter().sum::<f64>() / scores.len() as f64);

    let category_average =
        |category: Category| by_category.get(&category).map(|scores| average(scores));

    let category_scores = CategoryScores {
        behavioral: category_average(Category::Behavioral),
        technical: category_average(Category::Technical),
        situational: category_average(Category::Situational),
    };

    let overall_score = average(&pooled);
    let readiness_level = ReadinessLevel::from_score(overall_score);

    let mut strong_areas = Vec::new();
    let mut weak_areas = Vec::new();
    for category in Category::ALL {
        if let Some(avg) = category_scores.get(category) {
            if avg >= 75.0 {
                strong_areas.push(format!("{} questions", category.label()));
            } else if avg < 60.0 {
                weak_areas.push(format!("{} questions", category.label()));
            }
        }
    }

    for strength in ranked_by_recurrence(&all_strengths, TOP_RECURRING_STRENGTHS) {
        if !strong_areas.contains(&strength) {
            strong_areas.push(strength);
        }
    }
    strong_areas.truncate(MAX_STRONG_AREAS);

    let recommendations =
        build_recommendations(&category_scores, &all_improvements, overall_score);

    InterviewSummary {
        overall_score,
        readiness_level,
        strong_areas,
        weak_areas,
        category_scores,
        recommendations,
        feedback_summary: feedback_summary_for(readiness_level, job_role),
    }
}

/// Fixed result for a session with no answers.
fn incomplete_session_summary() -> InterviewSummary {
    InterviewSummary {
        overall_score: 0.0,
        readiness_level: ReadinessLevel::Low,
        strong_areas: Vec::new(),
        weak_areas: vec!["No answers provided".to_string()],
        category_scores: CategoryScores {
            behavioral: Some(0.0),
            technical: Some(0.0),
            situational: Some(0.0),
        },
        recommendations: vec!["Complete the interview to receive feedback".to_string()],
        feedback_summary: "Interview incomplete.".to_string(),
    }
}

/// Returns up to `limit` most frequently recurring strings, count
/// descending, ties broken by first appearance.
fn ranked_by_recurrence(items: &[String], limit: usize) -> Vec<String> {
    let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, item) in items.iter().enumerate() {
        let entry = stats.entry(item.as_str()).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = stats.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(item, _)| item.to_string())
        .collect()
}

fn build_recommendations(
    category_scores: &CategoryScores,
    all_improvements: &[String],
    overall_score: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if category_scores.behavioral.is_some_and(|avg| avg < 70.0) {
        recommendations.push(
            "Practice using the STAR method (Situation, Task, Action, Result) for behavioral questions"
                .to_string(),
        );
    }
    if category_scores.technical.is_some_and(|avg| avg < 70.0) {
        recommendations.push(
            "Review technical fundamentals and practice explaining concepts clearly".to_string(),
        );
    }
    if category_scores.situational.is_some_and(|avg| avg < 70.0) {
        recommendations.push(
            "Practice thinking through hypothetical scenarios and structuring your approach"
                .to_string(),
        );
    }

    for improvement in ranked_by_recurrence(all_improvements, TOP_RECURRING_IMPROVEMENTS) {
        if !recommendations.contains(&improvement) {
            recommendations.push(improvement);
        }
    }

    if recommendations.is_empty() {
        if overall_score >= 85.0 {
            recommendations
                .push("Continue practicing to maintain your strong interview skills".to_string());
        } else {
            recommendations
                .push("Practice with more mock interviews to build confidence".to_string());
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn feedback_summary_for(readiness: ReadinessLevel, job_role: &str) -> String {
    match readiness {
        ReadinessLevel::High => format!(
            "Excellent interview performance for {job_role}! You demonstrated strong communication \
             skills and relevant experience. You are well-prepared for interviews in this role."
        ),
        ReadinessLevel::Medium => format!(
            "Good interview performance with room for improvement. You have a solid foundation \
             for {job_role}, but should focus on strengthening your responses with more specific \
             examples and clearer structure."
        ),
        ReadinessLevel::Low => format!(
            "Your interview performance indicates areas needing development for {job_role}. Focus \
             on the recommended improvements and practice regularly to build confidence and \
             clarity in your responses."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, score: f64) -> AnswerRecord {
        AnswerRecord {
            category: category.to_string(),
            score,
            strengths: Vec::new(),
            improvements: Vec::new(),
        }
    }

    fn record_with_feedback(
        category: &str,
        score: f64,
        strengths: &[&str],
        improvements: &[&str],
    ) -> AnswerRecord {
        AnswerRecord {
            category: category.to_string(),
            score,
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            improvements: improvements.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_session_fixed_result() {
        let summary = summarize_session("Engineer", "", &[]);
        assert_eq!(summary.overall_score, 0.0);
        assert_eq!(summary.readiness_level, ReadinessLevel::Low);
        assert_eq!(summary.weak_areas, vec!["No answers provided"]);
        // The one place category scores are explicit zeros, not null.
        assert_eq!(summary.category_scores.behavioral, Some(0.0));
        assert_eq!(summary.category_scores.technical, Some(0.0));
        assert_eq!(summary.category_scores.situational, Some(0.0));
        assert_eq!(
            summary.recommendations,
            vec!["Complete the interview to receive feedback"]
        );
    }

    #[test]
    fn test_overall_is_pooled_average_not_average_of_averages() {
        let answers = vec![
            record("behavioral", 90.0),
            record("behavioral", 90.0),
            record("behavioral", 90.0),
            record("technical", 10.0),
        ];
        let summary = summarize_session("Engineer", "", &answers);
        // (90+90+90+10)/4 = 70, not (90+10)/2 = 50.
        assert_eq!(summary.overall_score, 70.0);
    }

    #[test]
    fn test_readiness_boundaries() {
        assert_eq!(ReadinessLevel::from_score(80.0), ReadinessLevel::High);
        assert_eq!(ReadinessLevel::from_score(79.99), ReadinessLevel::Medium);
        assert_eq!(ReadinessLevel::from_score(60.0), ReadinessLevel::Medium);
        assert_eq!(ReadinessLevel::from_score(59.99), ReadinessLevel::Low);
    }

    #[test]
    fn test_absent_category_is_none_not_zero() {
        let summary = summarize_session("Engineer", "", &[record("behavioral", 85.0)]);
        assert_eq!(summary.category_scores.behavioral, Some(85.0));
        assert_eq!(summary.category_scores.technical, None);
        assert_eq!(summary.category_scores.situational, None);
    }

    #[test]
    fn test_unknown_category_pools_but_does_not_aggregate() {
        let answers = vec![record("behavioral", 80.0), record("brainteaser", 40.0)];
        let summary = summarize_session("Engineer", "", &answers);
        assert_eq!(summary.overall_score, 60.0);
        assert_eq!(summary.category_scores.behavioral, Some(80.0));
        assert_eq!(summary.category_scores.technical, None);
    }

    #[test]
    fn test_strong_and_weak_category_labels() {
        let answers = vec![record("behavioral", 90.0), record("technical", 40.0)];
        let summary = summarize_session("Engineer", "", &answers);
        assert!(summary
            .strong_areas
            .contains(&"Behavioral questions".to_string()));
        assert!(summary
            .weak_areas
            .contains(&"Technical questions".to_string()));
    }

    #[test]
    fn test_recurring_strengths_appended_and_deduped() {
        let answers = vec![
            record_with_feedback("behavioral", 90.0, &["Clear structure"], &[]),
            record_with_feedback("behavioral", 88.0, &["Clear structure"], &[]),
            record_with_feedback("behavioral", 85.0, &["Concrete examples"], &[]),
        ];
        let summary = summarize_session("Engineer", "", &answers);
        assert!(summary
            .strong_areas
            .contains(&"Clear structure".to_string()));
        assert_eq!(
            summary
                .strong_areas
                .iter()
                .filter(|s| *s == "Clear structure")
                .count(),
            1
        );
        assert!(summary.strong_areas.len() <= MAX_STRONG_AREAS);
    }

    #[test]
    fn test_underperforming_categories_get_templates() {
        let answers = vec![
            record("behavioral", 50.0),
            record("technical", 55.0),
            record("situational", 65.0),
        ];
        let summary = summarize_session("Engineer", "", &answers);
        assert!(summary
            .recommendations
            .iter()
            .any(|r| r.contains("STAR method")));
        assert!(summary
            .recommendations
            .iter()
            .any(|r| r.contains("technical fundamentals")));
        assert!(summary
            .recommendations
            .iter()
            .any(|r| r.contains("hypothetical scenarios")));
    }

    #[test]
    fn test_category_without_data_gets_no_template() {
        let summary = summarize_session("Engineer", "", &[record("behavioral", 90.0)]);
        assert!(!summary
            .recommendations
            .iter()
            .any(|r| r.contains("technical fundamentals")));
    }

    #[test]
    fn test_recurring_improvements_become_recommendations() {
        let answers = vec![
            record_with_feedback("behavioral", 90.0, &[], &["Add more metrics"]),
            record_with_feedback("behavioral", 92.0, &[], &["Add more metrics"]),
        ];
        let summary = summarize_session("Engineer", "", &answers);
        assert!(summary
            .recommendations
            .contains(&"Add more metrics".to_string()));
    }

    #[test]
    fn test_fallback_recommendation_high_performer() {
        let answers = vec![record("behavioral", 95.0), record("technical", 92.0)];
        let summary = summarize_session("Engineer", "", &answers);
        assert_eq!(
            summary.recommendations,
            vec!["Continue practicing to maintain your strong interview skills"]
        );
    }

    #[test]
    fn test_recommendations_capped_at_five() {
        let answers = vec![
            record_with_feedback("behavioral", 40.0, &[], &["fix a", "fix b"]),
            record_with_feedback("technical", 45.0, &[], &["fix a", "fix c"]),
            record_with_feedback("situational", 50.0, &[], &["fix b", "fix d"]),
        ];
        let summary = summarize_session("Engineer", "", &answers);
        assert!(summary.recommendations.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_feedback_summary_mentions_role() {
        let answers = vec![record("behavioral", 90.0)];
        let summary = summarize_session("Data Scientist", "", &answers);
        assert!(summary.feedback_summary.contains("Data Scientist"));
    }

    #[test]
    fn test_out_of_range_input_scores_clamped() {
        let answers = vec![record("behavioral", 150.0), record("technical", -20.0)];
        let summary = summarize_session("Engineer", "", &answers);
        assert!((0.0..=100.0).contains(&summary.overall_score));
        assert_eq!(summary.category_scores.behavioral, Some(100.0));
        assert_eq!(summary.category_scores.technical, Some(0.0));
    }

    #[test]
    fn test_ranked_by_recurrence_stable_ties() {
        let items: Vec<String> = ["b", "a", "b", "a", "c"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(ranked_by_recurrence(&items, 3), vec!["b", "a", "c"]);
    }
}
