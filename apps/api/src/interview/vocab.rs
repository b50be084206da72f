//! Cue-word vocabularies and scoring policy tables for answer evaluation.
//!
//! Kept as static configuration data rather than literals scattered through
//! the scoring logic, so the vocabularies can be tuned without touching the
//! scorers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::interview::Category;

/// STAR-method cue groups for behavioral answers. An answer "covers" a
/// group when any of its cue words appears in the lowercased text.
pub const STAR_GROUPS: &[(&str, &[&str])] = &[
    (
        "situation",
        &[
            "situation", "context", "background", "when", "where", "project", "role",
        ],
    ),
    (
        "task",
        &[
            "task",
            "responsibility",
            "goal",
            "objective",
            "challenge",
            "problem",
            "needed",
        ],
    ),
    (
        "action",
        &[
            "action",
            "did",
            "implemented",
            "created",
            "developed",
            "led",
            "managed",
            "decided",
            "approach",
        ],
    ),
    (
        "result",
        &[
            "result",
            "outcome",
            "achieved",
            "improved",
            "increased",
            "decreased",
            "learned",
            "success",
            "impact",
        ],
    ),
];

/// Connectives that signal articulate, reasoned answers.
pub const QUALITY_WORDS: &[&str] = &[
    "specifically",
    "example",
    "instance",
    "because",
    "therefore",
    "however",
    "additionally",
    "furthermore",
    "consequently",
    "importantly",
];

/// Verbs that signal ownership of the work being described.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "designed",
    "developed",
    "established",
    "implemented",
    "improved",
    "increased",
    "led",
    "managed",
    "optimized",
    "reduced",
    "resolved",
    "streamlined",
    "transformed",
    "delivered",
];

/// Phrases that introduce a concrete example.
pub const EXAMPLE_PHRASES: &[&str] = &["for example", "for instance", "specifically", "such as"];

/// Quantifiable-metric pattern: percentages, dollar amounts, or a count
/// followed by a unit noun.
pub static METRIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+%|\d+ percent|\$\d+|\d+ (users|customers|team|people|projects)")
        .expect("metric regex")
});

/// Ideal word-count range for an answer in the given category. Behavioral
/// answers run longer because a full STAR narrative needs room.
pub fn ideal_word_range(category: Option<Category>) -> (usize, usize) {
    match category {
        Some(Category::Behavioral) => (100, 250),
        Some(Category::Technical) => (75, 200),
        Some(Category::Situational) => (80, 200),
        None => (75, 200),
    }
}
