//! Two-document TF-IDF vectorization and cosine similarity.
//!
//! The vector space is built over exactly the pair being compared, so every
//! call is self-contained and side-effect-free. Scores are therefore only
//! meaningful pairwise, never across calls.

use std::collections::HashMap;

use crate::text::tokenize;

/// Smoothed inverse document frequency for a two-document corpus:
/// `ln((1 + n_docs) / (1 + df)) + 1`.
fn idf(doc_freq: usize) -> f64 {
    ((1.0 + 2.0) / (1.0 + doc_freq as f64)).ln() + 1.0
}

fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Computes the cosine similarity of the TF-IDF vectors of two documents.
///
/// Returns `None` when vectorization degenerates: every token filtered out
/// of both documents (empty vocabulary), or one document contributing no
/// terms at all (zero-norm vector). Callers decide what the degenerate case
/// means for them.
pub fn pairwise_cosine(a: &str, b: &str) -> Option<f64> {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    if counts_a.is_empty() && counts_b.is_empty() {
        return None;
    }

    // Vocabulary is the union of both documents' terms.
    let mut vocabulary: Vec<&str> = counts_a.keys().copied().collect();
    for term in counts_b.keys() {
        if !counts_a.contains_key(term) {
            vocabulary.push(term);
        }
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for term in &vocabulary {
        let tf_a = counts_a.get(term).copied().unwrap_or(0) as f64;
        let tf_b = counts_b.get(term).copied().unwrap_or(0) as f64;

        let doc_freq = (tf_a > 0.0) as usize + (tf_b > 0.0) as usize;
        let weight = idf(doc_freq);

        let wa = tf_a * weight;
        let wb = tf_b * weight;

        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    Some((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_cosine_is_one() {
        let text = "experienced rust engineer building distributed systems";
        let cos = pairwise_cosine(text, text).unwrap();
        assert!((cos - 1.0).abs() < 1e-9, "cosine was {cos}");
    }

    #[test]
    fn test_disjoint_documents_cosine_is_zero() {
        let cos = pairwise_cosine("cooking gardening painting", "kubernetes docker terraform")
            .unwrap();
        assert!(cos.abs() < 1e-9, "cosine was {cos}");
    }

    #[test]
    fn test_partial_overlap_between_zero_and_one() {
        let cos = pairwise_cosine(
            "python developer with react experience",
            "python developer with java experience",
        )
        .unwrap();
        assert!(cos > 0.0 && cos < 1.0, "cosine was {cos}");
    }

    #[test]
    fn test_empty_inputs_degenerate() {
        assert!(pairwise_cosine("", "").is_none());
    }

    #[test]
    fn test_stopword_only_inputs_degenerate() {
        // Every token is filtered, leaving an empty vocabulary.
        assert!(pairwise_cosine("the and of", "a but the").is_none());
    }

    #[test]
    fn test_one_empty_document_degenerate() {
        // The empty side produces a zero-norm vector.
        assert!(pairwise_cosine("rust engineer", "").is_none());
    }

    #[test]
    fn test_shared_terms_weigh_less_than_unique_terms() {
        // A term present in both documents gets idf 1.0; a unique term gets
        // ln(3/2) + 1. The smoothing keeps shared terms contributing.
        assert!(idf(2) < idf(1));
        assert!((idf(2) - 1.0).abs() < 1e-9);
    }
}
