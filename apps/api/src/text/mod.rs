//! Text toolkit — normalization, tokenization, keyword extraction, and
//! TF-IDF similarity shared by the resume matcher and the answer scorer.
//!
//! Every function is pure: no caches, no shared vocabulary, no I/O. The
//! similarity vector space is rebuilt per call (see `tfidf`), which keeps
//! scoring trivially parallel at the cost of cross-call comparability.

pub mod stopwords;
pub mod tfidf;

use std::collections::HashMap;

/// Strips everything except ASCII letters, digits, and whitespace, then
/// lowercases and trims. `"Hello, World! @#$%"` becomes `"hello world"`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Normalizes, splits on whitespace, and drops tokens that are too short
/// (≤ 2 chars) or stopwords.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| w.len() > 2 && !stopwords::is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Returns the `n` most frequent tokens, most frequent first. Ties are
/// broken by first appearance in the token stream, so the ranking is stable
/// for a given input.
pub fn top_keywords(text: &str, n: usize) -> Vec<String> {
    let tokens = tokenize(text);

    let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.iter().enumerate() {
        let entry = stats.entry(token.as_str()).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = stats.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// TF-IDF cosine similarity of two documents, scaled to [0, 100] and
/// rounded to 2 decimals. Degenerate vectorization (empty or stopword-only
/// input) yields 0.0 rather than an error — a terminal fallback, never
/// propagated.
pub fn similarity(a: &str, b: &str) -> f64 {
    match tfidf::pairwise_cosine(a, b) {
        Some(cosine) => round2((cosine * 100.0).clamp(0.0, 100.0)),
        None => 0.0,
    }
}

/// Rounds to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
