//! Resume matcher — scores resume-vs-JD fit and reports keyword overlap.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text;

/// How many JD keywords to check the resume against.
const JD_KEYWORD_COUNT: usize = 20;
/// How deep into the resume's keyword ranking to look for matches.
const RESUME_KEYWORD_COUNT: usize = 100;

/// Fit report for one resume/JD pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// TF-IDF similarity of the full texts, 0–100.
    pub score: f64,
    /// JD keywords covered by the resume, in JD frequency order.
    pub matched_keywords: Vec<String>,
    /// JD keywords the resume never mentions, in JD frequency order.
    pub missing_keywords: Vec<String>,
}

/// Scores a resume against a job description and partitions the JD's top
/// keywords into matched and missing sets.
///
/// Empty inputs are valid and yield a degenerate-but-well-formed report:
/// score 0.0 with both keyword lists empty.
pub fn analyze_resume_match(resume_text: &str, job_description: &str) -> MatchReport {
    let score = text::similarity(resume_text, job_description);

    let jd_keywords = text::top_keywords(job_description, JD_KEYWORD_COUNT);
    let resume_keywords: HashSet<String> =
        text::top_keywords(resume_text, RESUME_KEYWORD_COUNT)
            .into_iter()
            .collect();

    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = jd_keywords
        .into_iter()
        .partition(|keyword| resume_keywords.contains(keyword));

    MatchReport {
        score,
        matched_keywords,
        missing_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_scores_near_maximal_with_no_gaps() {
        let text = "Experienced Python developer with React and AWS skills";
        let report = analyze_resume_match(text, text);
        assert!(report.score > 99.0, "score was {}", report.score);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_zero_score_and_empty_lists() {
        let report = analyze_resume_match("", "");
        assert_eq!(report.score, 0.0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_score_within_bounds() {
        let report = analyze_resume_match(
            "Python developer with machine learning experience",
            "Python machine learning engineer with TensorFlow",
        );
        assert!((0.0..=100.0).contains(&report.score));
    }

    #[test]
    fn test_unrelated_texts_score_low() {
        let report = analyze_resume_match(
            "I like cooking and gardening",
            "Senior software engineer with 10 years Java experience",
        );
        assert!(report.score < 50.0, "score was {}", report.score);
    }

    #[test]
    fn test_keywords_partition_preserves_jd_order() {
        let resume = "Rust developer who has shipped kafka pipelines";
        let jd = "rust rust rust kafka kafka kubernetes";
        let report = analyze_resume_match(resume, jd);

        assert_eq!(report.matched_keywords, vec!["rust", "kafka"]);
        assert_eq!(report.missing_keywords, vec!["kubernetes"]);
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let report = analyze_resume_match(
            "Experienced Python developer with Django and Postgres",
            "Python Django developer with Kubernetes and Terraform",
        );
        for keyword in &report.matched_keywords {
            assert!(!report.missing_keywords.contains(keyword));
        }
    }

    #[test]
    fn test_missing_keyword_detected() {
        let report = analyze_resume_match(
            "Frontend engineer with React and TypeScript",
            "Frontend engineer with React TypeScript and GraphQL GraphQL",
        );
        assert!(report
            .missing_keywords
            .iter()
            .any(|k| k == "graphql"));
    }
}
