//! Frequency-ranked hashtag candidates.
//!
//! Candidates are lower-case alphabetic terms of at least three letters that
//! are not stop words. They are ranked by occurrence count, highest first;
//! equal counts keep the order in which each term first appeared.

use std::collections::{HashMap, HashSet};

use crate::analysis::analyzer::{Analyzer, TermAnalyzer};
use crate::analysis::token_filter::StopFilter;
use crate::engine::config::{DEFAULT_HASHTAG_COUNT, MIN_HASHTAG_TERM_LENGTH};
use crate::error::Result;

/// Extracts the most frequent content words as `#word` candidates.
#[derive(Clone, Debug)]
pub struct HashtagExtractor {
    terms: TermAnalyzer,
    default_count: usize,
}

impl HashtagExtractor {
    /// Create an extractor with the default stop words and count.
    pub fn new() -> Result<Self> {
        Self::with_stop_filter(StopFilter::new(), DEFAULT_HASHTAG_COUNT)
    }

    /// Create an extractor with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>, default_count: usize) -> Result<Self> {
        Self::with_stop_filter(StopFilter::with_stop_words(stop_words), default_count)
    }

    fn with_stop_filter(stop_filter: StopFilter, default_count: usize) -> Result<Self> {
        Ok(HashtagExtractor {
            terms: TermAnalyzer::with_stop_words(MIN_HASHTAG_TERM_LENGTH, stop_filter)?,
            default_count,
        })
    }

    /// The number of candidates [`extract_default`](Self::extract_default) returns.
    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// Extract up to the configured default number of candidates.
    pub fn extract_default(&self, text: &str) -> Vec<String> {
        self.extract(text, self.default_count)
    }

    /// Extract up to `count` candidates, most frequent first.
    ///
    /// Returns fewer than `count` entries when the text has fewer distinct
    /// qualifying terms, and nothing at all when `count` is 0.
    pub fn extract(&self, text: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        self.ranked_terms(text)
            .into_iter()
            .take(count)
            .map(|(term, _)| format!("#{term}"))
            .collect()
    }

    /// All qualifying terms with their counts, in rank order.
    pub fn ranked_terms(&self, text: &str) -> Vec<(String, usize)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut frequencies: Vec<(String, usize)> = Vec::new();

        for token in self.terms.analyze(text) {
            match index.get(&token.text) {
                Some(&slot) => frequencies[slot].1 += 1,
                None => {
                    index.insert(token.text.clone(), frequencies.len());
                    frequencies.push((token.text, 1));
                }
            }
        }

        // `sort_by` is stable: equal counts stay in first-seen order.
        frequencies.sort_by(|a, b| b.1.cmp(&a.1));
        frequencies
    }
}

impl Default for HashtagExtractor {
    fn default() -> Self {
        Self::new().expect("Hashtag extractor should be creatable with default settings")
    }
}
