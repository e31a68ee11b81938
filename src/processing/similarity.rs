//! Text similarity between two documents

use crate::processing::text_processor::TextNormalizer;
use std::collections::{HashMap, HashSet};

/// Vocabulary cap for pairwise TF-IDF, top terms by total frequency.
const MAX_VOCABULARY_TERMS: usize = 5000;

/// Scores how similar two free-text documents are, in [0, 1].
///
/// Primary path is TF-IDF cosine similarity computed over just the two
/// documents, with unigram and bigram terms. When vectorization has
/// nothing to work with (empty documents, degenerate vectors) the score
/// falls back to Jaccard overlap of the normalized token sets. Never
/// returns an error.
pub struct SimilarityEngine {
    normalizer: TextNormalizer,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
        }
    }

    /// Similarity between two documents. Symmetric, 1.0 for identical
    /// non-empty documents, 0.0 when either side normalizes to nothing.
    pub fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let normalized_a = self.normalizer.normalize(text_a);
        let normalized_b = self.normalizer.normalize(text_b);

        if normalized_a.is_empty() || normalized_b.is_empty() {
            return self.jaccard(text_a, text_b);
        }

        match self.tfidf_cosine(&normalized_a, &normalized_b) {
            Some(score) => score,
            None => self.jaccard(text_a, text_b),
        }
    }

    /// TF-IDF cosine over the document pair. IDF is smoothed
    /// (ln((1 + n) / (1 + df)) + 1 with n = 2) and vectors are
    /// L2-normalized, so identical documents score 1.0. Returns None
    /// when either vector degenerates to zero magnitude.
    fn tfidf_cosine(&self, normalized_a: &str, normalized_b: &str) -> Option<f64> {
        let counts_a = Self::term_counts(normalized_a);
        let counts_b = Self::term_counts(normalized_b);

        let vocabulary = Self::select_vocabulary(&counts_a, &counts_b);
        if vocabulary.is_empty() {
            return None;
        }

        let mut vector_a = Vec::with_capacity(vocabulary.len());
        let mut vector_b = Vec::with_capacity(vocabulary.len());

        for term in &vocabulary {
            let tf_a = counts_a.get(term).copied().unwrap_or(0) as f64;
            let tf_b = counts_b.get(term).copied().unwrap_or(0) as f64;

            let document_frequency = (tf_a > 0.0) as u32 + (tf_b > 0.0) as u32;
            let idf = ((1.0 + 2.0) / (1.0 + document_frequency as f64)).ln() + 1.0;

            vector_a.push(tf_a * idf);
            vector_b.push(tf_b * idf);
        }

        let norm_a = vector_a.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm_b = vector_b.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return None;
        }

        let dot: f64 = vector_a
            .iter()
            .zip(vector_b.iter())
            .map(|(a, b)| a * b)
            .sum();

        Some((dot / (norm_a * norm_b)).clamp(0.0, 1.0))
    }

    /// Unigram and bigram counts for one normalized document.
    fn term_counts(normalized: &str) -> HashMap<String, usize> {
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let mut counts = HashMap::new();
        for token in &tokens {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            *counts.entry(bigram).or_insert(0) += 1;
        }

        counts
    }

    /// Shared vocabulary capped at the highest-frequency terms, ties
    /// broken lexicographically so the selection is deterministic.
    fn select_vocabulary(
        counts_a: &HashMap<String, usize>,
        counts_b: &HashMap<String, usize>,
    ) -> Vec<String> {
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for (term, count) in counts_a {
            *totals.entry(term.as_str()).or_insert(0) += count;
        }
        for (term, count) in counts_b {
            *totals.entry(term.as_str()).or_insert(0) += count;
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(MAX_VOCABULARY_TERMS);

        ranked.into_iter().map(|(term, _)| term.to_string()).collect()
    }

    /// Jaccard overlap of the normalized token sets. 0.0 when either
    /// side is empty.
    fn jaccard(&self, text_a: &str, text_b: &str) -> f64 {
        let set_a: HashSet<String> = self.normalizer.stemmed_tokens(text_a).into_iter().collect();
        let set_b: HashSet<String> = self.normalizer.stemmed_tokens(text_b).into_iter().collect();

        if set_a.is_empty() || set_b.is_empty() {
            return 0.0;
        }

        let intersection = set_a.intersection(&set_b).count();
        let union = set_a.union(&set_b).count();

        intersection as f64 / union as f64
    }
}
