//! Text normalization shared by the similarity and keyword pipelines

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Lowercases text, strips everything outside letters and whitespace,
/// drops stop words and short tokens, and reduces the rest to stemmed
/// base forms ("running" -> "run").
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    strip_regex: Regex,
    stemmer: Stemmer,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let strip_regex = Regex::new(r"[^a-zA-Z\s]").expect("Invalid strip regex");

        Self {
            stop_words: Self::create_stop_words(),
            strip_regex,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Full normalization: the space-joined stemmed token stream.
    /// Empty or all-noise input yields an empty string, never an error.
    pub fn normalize(&self, text: &str) -> String {
        self.stemmed_tokens(text).join(" ")
    }

    /// Stemmed tokens after stop-word and short-token filtering.
    pub fn stemmed_tokens(&self, text: &str) -> Vec<String> {
        self.filtered_tokens(text)
            .into_iter()
            .map(|token| self.stemmer.stem(&token).into_owned())
            .collect()
    }

    /// Lowercased tokens with noise characters stripped, stop words and
    /// tokens shorter than 3 characters removed. No stemming.
    pub fn filtered_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.strip_regex.replace_all(&lowered, " ");

        stripped
            .unicode_words()
            .filter(|word| word.len() > 2 && !self.stop_words.contains(*word))
            .map(|word| word.to_string())
            .collect()
    }

    /// Extract the top keywords from text by frequency. Ties break
    /// lexicographically so output order is deterministic.
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let mut word_freq: HashMap<String, usize> = HashMap::new();
        for token in self.filtered_tokens(text) {
            *word_freq.entry(token).or_insert(0) += 1;
        }

        let mut keywords: Vec<(String, usize)> = word_freq.into_iter().collect();
        keywords.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        keywords
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word)
            .collect()
    }

    /// Create the set of English stop words
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
            "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
            "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
            "hers", "herself", "it", "it's", "its", "itself", "they", "them",
            "their", "theirs", "themselves", "what", "which", "who", "whom",
            "this", "that", "that'll", "these", "those", "am", "is", "are",
            "was", "were", "be", "been", "being", "have", "has", "had",
            "having", "do", "does", "did", "doing", "a", "an", "the", "and",
            "but", "if", "or", "because", "as", "until", "while", "of", "at",
            "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to",
            "from", "up", "down", "in", "out", "on", "off", "over", "under",
            "again", "further", "then", "once", "here", "there", "when",
            "where", "why", "how", "all", "any", "both", "each", "few", "more",
            "most", "other", "some", "such", "no", "nor", "not", "only", "own",
            "same", "so", "than", "too", "very", "s", "t", "can", "will",
            "just", "don", "don't", "should", "should've", "now", "d", "ll",
            "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
            "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't",
            "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
            "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
            "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
            "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_stems_and_filters() {
        let normalizer = TextNormalizer::new();
        let text = "The developers are running multiple Python services.";

        let normalized = normalizer.normalize(text);
        let tokens: Vec<&str> = normalized.split(' ').collect();

        assert!(tokens.contains(&"run"));
        assert!(tokens.contains(&"python"));
        // Stop words never survive normalization
        assert!(!tokens.contains(&"the"));
        assert!(!tokens.contains(&"are"));
    }

    #[test]
    fn test_normalize_handles_empty_and_noise() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("123 456 !!!"), "");
    }

    #[test]
    fn test_inflections_normalize_to_same_form() {
        let normalizer = TextNormalizer::new();

        assert_eq!(
            normalizer.normalize("developing"),
            normalizer.normalize("develops")
        );
    }

    #[test]
    fn test_filtered_tokens_drop_stopwords_and_short_words() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.filtered_tokens("Go to the DevOps team");

        assert_eq!(tokens, vec!["devops", "team"]);
    }

    #[test]
    fn test_keyword_extraction() {
        let normalizer = TextNormalizer::new();
        let text = "Rust Rust programming language. Rust is memory safe. Programming with Rust is fun.";

        let keywords = normalizer.extract_keywords(text, 5);

        assert!(keywords.len() <= 5);
        assert_eq!(keywords[0], "rust");
        assert_eq!(keywords[1], "programming");
    }

    #[test]
    fn test_keyword_ties_break_lexicographically() {
        let normalizer = TextNormalizer::new();
        let keywords = normalizer.extract_keywords("zebra apple zebra apple", 2);

        assert_eq!(keywords, vec!["apple", "zebra"]);
    }
}
