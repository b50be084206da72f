//! Interview answer scorer.
//!
//! Blends four independent sub-scores — keyword coverage, length
//! appropriateness, structural quality, and semantic relevance — into one
//! final score with compiled feedback. Everything here is a pure function
//! of the inputs: no I/O, no shared state, no LLM.

use serde::{Deserialize, Serialize};

use crate::interview::vocab::{
    ideal_word_range, ACTION_VERBS, EXAMPLE_PHRASES, METRIC_RE, QUALITY_WORDS, STAR_GROUPS,
};
use crate::interview::Category;
use crate::text::{self, round2, tfidf};

// Sub-score weights. Structure weighs highest as the strongest observable
// proxy for answer quality; length lowest because word count alone says
// little about substance.
const KEYWORD_WEIGHT: f64 = 0.25;
const LENGTH_WEIGHT: f64 = 0.15;
const STRUCTURE_WEIGHT: f64 = 0.35;
const RELEVANCE_WEIGHT: f64 = 0.25;

/// Keyword sub-score when the caller supplied no keyword policy: neither a
/// penalty nor a reward.
const NO_KEYWORD_POLICY_SCORE: f64 = 70.0;

/// Relevance sub-score when vectorization degenerates.
const RELEVANCE_FALLBACK: f64 = 60.0;

const LENGTH_TOO_BRIEF: &str = "Answer is too brief. Provide more detail and specific examples.";

const MAX_FEEDBACK_ITEMS: usize = 5;

/// Evaluation of a single question/answer pair. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords_found: Vec<String>,
    pub keywords_missed: Vec<String>,
}

/// Evaluates one interview answer along four dimensions and compiles
/// feedback. `category` is the transport's free-form string; unknown
/// categories get the default length policy and no STAR analysis.
pub fn evaluate_answer(
    question_text: &str,
    category: &str,
    answer_text: &str,
    expected_keywords: &[String],
) -> AnswerEvaluation {
    let category = Category::parse(category);

    let (keyword_score, keywords_found, keywords_missed) =
        keyword_score(answer_text, expected_keywords);
    let (length_score, length_feedback) = length_score(answer_text, category);
    let (structure_score, structure_strengths, structure_improvements) =
        structure_score(answer_text, category);
    let relevance_score = relevance_score(question_text, answer_text);

    let final_score = round2(
        keyword_score * KEYWORD_WEIGHT
            + length_score * LENGTH_WEIGHT
            + structure_score * STRUCTURE_WEIGHT
            + relevance_score * RELEVANCE_WEIGHT,
    )
    .clamp(0.0, 100.0);

    let mut strengths = structure_strengths;
    if keyword_score >= 80.0 {
        strengths.push("Good coverage of key concepts".to_string());
    }
    if relevance_score >= 80.0 {
        strengths.push("Answer is highly relevant to the question".to_string());
    }
    if strengths.is_empty() {
        strengths.push("Answered the question directly".to_string());
    }
    strengths.truncate(MAX_FEEDBACK_ITEMS);

    let mut improvements = structure_improvements;
    if length_feedback == LENGTH_TOO_BRIEF {
        improvements.insert(0, length_feedback.to_string());
    }
    if keyword_score < 60.0 && !keywords_missed.is_empty() {
        let named: Vec<&str> = keywords_missed
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        improvements.push(format!("Consider addressing: {}", named.join(", ")));
    }
    if improvements.is_empty() && final_score < 95.0 {
        improvements.push("Practice elaborating with more specific details".to_string());
    }
    improvements.truncate(MAX_FEEDBACK_ITEMS);

    AnswerEvaluation {
        score: final_score,
        feedback: feedback_for(final_score).to_string(),
        strengths,
        improvements,
        keywords_found,
        keywords_missed,
    }
}

/// Keyword coverage: a keyword matches when its lowercase form appears as a
/// substring of the lowercased answer or of any answer token. Duplicate
/// expected keywords are collapsed so result lists stay duplicate-free.
fn keyword_score(answer_text: &str, expected_keywords: &[String]) -> (f64, Vec<String>, Vec<String>) {
    let answer_lower = answer_text.to_lowercase();
    let tokens = text::tokenize(answer_text);

    let mut seen: Vec<String> = Vec::new();
    let mut found = Vec::new();
    let mut missed = Vec::new();

    for keyword in expected_keywords {
        let keyword_lower = keyword.to_lowercase();
        if keyword_lower.is_empty() || seen.contains(&keyword_lower) {
            continue;
        }
        seen.push(keyword_lower.clone());

        let matched = answer_lower.contains(&keyword_lower)
            || tokens.iter().any(|token| token.contains(&keyword_lower));
        if matched {
            found.push(keyword.clone());
        } else {
            missed.push(keyword.clone());
        }
    }

    if seen.is_empty() {
        return (NO_KEYWORD_POLICY_SCORE, found, missed);
    }

    let coverage = found.len() as f64 / seen.len() as f64;
    let score = (coverage * 100.0 + 20.0).min(100.0);
    (round2(score), found, missed)
}

/// Length appropriateness against the category's ideal word-count range.
/// Deliberately asymmetric: short answers are penalized harder than long
/// ones.
fn length_score(answer_text: &str, category: Option<Category>) -> (f64, &'static str) {
    let word_count = answer_text.split_whitespace().count() as f64;
    let (min_words, max_words) = ideal_word_range(category);
    let (min_words, max_words) = (min_words as f64, max_words as f64);

    if word_count < min_words * 0.5 {
        (50.0, LENGTH_TOO_BRIEF)
    } else if word_count < min_words {
        (
            70.0,
            "Answer could be more detailed. Consider adding specific examples.",
        )
    } else if word_count > max_words * 1.5 {
        (
            75.0,
            "Answer is quite long. Consider being more concise while keeping key points.",
        )
    } else if word_count > max_words {
        (85.0, "Good detail level, though slightly long.")
    } else {
        (95.0, "Appropriate answer length.")
    }
}

/// Structural quality: base 60, with additive credit for STAR coverage
/// (behavioral only), quality connectives, action verbs, example phrases,
/// and quantifiable metrics. Clamped to 100.
fn structure_score(
    answer_text: &str,
    category: Option<Category>,
) -> (f64, Vec<String>, Vec<String>) {
    let answer_lower = answer_text.to_lowercase();

    let mut score = 60.0_f64;
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if category == Some(Category::Behavioral) {
        let mut star_found = 0;
        let mut star_missing: Vec<&str> = Vec::new();

        for (component, cues) in STAR_GROUPS {
            if cues.iter().any(|cue| answer_lower.contains(cue)) {
                star_found += 1;
            } else {
                star_missing.push(component);
            }
        }

        if star_found >= 3 {
            score += 20.0;
            strengths.push("Good use of STAR method structure".to_string());
        } else if star_found == 2 {
            score += 10.0;
            strengths.push("Partial STAR method structure".to_string());
        }

        if !star_missing.is_empty() {
            improvements.push(format!(
                "Consider adding more about: {}",
                star_missing.join(", ")
            ));
        }
    }

    let quality_count = QUALITY_WORDS
        .iter()
        .filter(|word| answer_lower.contains(*word))
        .count();
    if quality_count >= 3 {
        score += 10.0;
        strengths.push("Well-articulated response with clear reasoning".to_string());
    } else if quality_count >= 1 {
        score += 5.0;
    }

    let action_count = ACTION_VERBS
        .iter()
        .filter(|verb| answer_lower.contains(*verb))
        .count();
    if action_count >= 3 {
        score += 10.0;
        strengths.push("Strong use of action verbs demonstrating ownership".to_string());
    } else if action_count >= 1 {
        score += 5.0;
    }

    if EXAMPLE_PHRASES
        .iter()
        .any(|phrase| answer_lower.contains(phrase))
    {
        score += 5.0;
        strengths.push("Includes specific examples".to_string());
    } else {
        improvements.push("Consider adding specific examples to strengthen your answer".to_string());
    }

    if METRIC_RE.is_match(&answer_lower) {
        score += 10.0;
        strengths.push("Includes quantifiable results/metrics".to_string());
    } else if matches!(
        category,
        Some(Category::Behavioral) | Some(Category::Technical)
    ) {
        improvements.push("Consider adding quantifiable metrics or results".to_string());
    }

    (score.min(100.0), strengths, improvements)
}

/// Semantic relevance of answer to question via TF-IDF cosine, rescaled so
/// any on-topic-length answer has baseline relevance: never below 40.
/// Degenerate vectorization falls back to 60.
fn relevance_score(question_text: &str, answer_text: &str) -> f64 {
    match tfidf::pairwise_cosine(question_text, answer_text) {
        Some(cosine) => round2((cosine * 100.0 + 30.0).max(40.0).min(100.0)),
        None => RELEVANCE_FALLBACK,
    }
}

/// One fixed feedback sentence per score tier.
fn feedback_for(final_score: f64) -> &'static str {
    if final_score >= 85.0 {
        "Excellent answer! You demonstrated strong understanding and communicated effectively."
    } else if final_score >= 70.0 {
        "Good answer with solid points. Some areas could be strengthened with more detail or examples."
    } else if final_score >= 55.0 {
        "Adequate answer, but missing key elements. Focus on providing more specific examples and addressing all aspects of the question."
    } else {
        "Answer needs improvement. Consider using the STAR method for behavioral questions and providing concrete examples."
    }
}
