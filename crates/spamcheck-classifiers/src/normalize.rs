//! Deterministic text normalization for the vectorizer input
//!
//! Reproduces the preprocessing the artifacts were trained with. The steps
//! run in a fixed order; later steps assume the earlier ones completed.

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use spamcheck_core::Result;
use std::collections::HashSet;

/// English stop words dropped before stemming.
///
/// This is the NLTK English list the training pipeline filtered with.
/// Contracted entries ("don't") can no longer match once punctuation has
/// been stripped, but they are kept so the table matches the fitted
/// artifacts' vocabulary exactly.
static STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Deterministic text normalizer.
///
/// Lowercases, strips URL- and email-like substrings, drops everything that
/// is not an ASCII letter or whitespace, removes stop words, and stems the
/// surviving tokens with the Snowball English stemmer.
pub struct TextNormalizer {
    url_regex: Regex,
    email_regex: Regex,
    stop_words: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Result<Self> {
        Ok(Self {
            url_regex: Regex::new(r"http\S+|www\S+|https\S+").map_err(|e| {
                spamcheck_core::Error::classifier(format!("Failed to compile URL regex: {}", e))
            })?,
            email_regex: Regex::new(r"\S*@\S*\s?").map_err(|e| {
                spamcheck_core::Error::classifier(format!("Failed to compile email regex: {}", e))
            })?,
            stop_words: STOP_WORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    /// Normalize raw text into the token stream the vectorizer expects.
    ///
    /// Pure function: identical input always yields identical output. Text
    /// that normalizes to zero surviving tokens yields the empty string,
    /// which is a valid vectorizer input.
    pub fn normalize(&self, raw: &str) -> String {
        let text = raw.to_lowercase();
        let text = self.url_regex.replace_all(&text, "");
        let text = self.email_regex.replace_all(&text, "");

        // Digits and punctuation are dropped entirely, not replaced.
        let text: String = text
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        let tokens: Vec<String> = text
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| self.stemmer.stem(word).to_string())
            .collect();

        tokens.join(" ")
    }
}
