//! Sentence-length readability grading.
//!
//! The grade is a plain average-words-per-sentence cutoff, not a standard
//! formula such as Flesch–Kincaid. The cutoffs and the long-sentence
//! threshold are product constants; see [`EngineConfig`](super::config::EngineConfig).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{SentenceAnalyzer, WordAnalyzer};
use crate::engine::config::{
    DEFAULT_HARD_CUTOFF, DEFAULT_LONG_SENTENCE_THRESHOLD, DEFAULT_MODERATE_CUTOFF,
};
use crate::error::Result;

/// Difficulty grade of a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityLevel {
    Easy,
    Moderate,
    Hard,
}

impl ReadabilityLevel {
    /// The lowercase wire name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadabilityLevel::Easy => "easy",
            ReadabilityLevel::Moderate => "moderate",
            ReadabilityLevel::Hard => "hard",
        }
    }
}

impl fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of readability analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Average words per sentence, rounded to one decimal place.
    pub avg_words_per_sentence: f64,
    /// Trimmed sentences above the long-sentence threshold, in text order.
    pub long_sentences: Vec<String>,
    pub total_sentences: usize,
    pub readability_level: ReadabilityLevel,
}

impl Default for ReadabilityResult {
    fn default() -> Self {
        ReadabilityResult {
            avg_words_per_sentence: 0.0,
            long_sentences: Vec::new(),
            total_sentences: 0,
            readability_level: ReadabilityLevel::Easy,
        }
    }
}

/// Segments text into sentences and grades its difficulty.
#[derive(Clone, Debug)]
pub struct ReadabilityAnalyzer {
    sentences: SentenceAnalyzer,
    words: WordAnalyzer,
    long_sentence_threshold: usize,
    moderate_cutoff: f64,
    hard_cutoff: f64,
}

impl ReadabilityAnalyzer {
    /// Create an analyzer with the default threshold and cutoffs.
    pub fn new() -> Result<Self> {
        Self::with_thresholds(
            DEFAULT_LONG_SENTENCE_THRESHOLD,
            DEFAULT_MODERATE_CUTOFF,
            DEFAULT_HARD_CUTOFF,
        )
    }

    /// Create an analyzer with custom threshold and cutoffs.
    pub fn with_thresholds(
        long_sentence_threshold: usize,
        moderate_cutoff: f64,
        hard_cutoff: f64,
    ) -> Result<Self> {
        Ok(ReadabilityAnalyzer {
            sentences: SentenceAnalyzer::new()?,
            words: WordAnalyzer::new()?,
            long_sentence_threshold,
            moderate_cutoff,
            hard_cutoff,
        })
    }

    /// The configured long-sentence threshold in words.
    pub fn long_sentence_threshold(&self) -> usize {
        self.long_sentence_threshold
    }

    /// Grade an unrounded average sentence length.
    pub fn level_for(&self, avg_words_per_sentence: f64) -> ReadabilityLevel {
        if avg_words_per_sentence > self.hard_cutoff {
            ReadabilityLevel::Hard
        } else if avg_words_per_sentence > self.moderate_cutoff {
            ReadabilityLevel::Moderate
        } else {
            ReadabilityLevel::Easy
        }
    }

    /// Analyze the readability of `text`. Never fails; empty text is `easy`.
    pub fn analyze(&self, text: &str) -> ReadabilityResult {
        let mut total_sentences = 0;
        let mut total_words = 0;
        let mut long_sentences = Vec::new();

        for sentence in self.sentences.sentences(text) {
            let words = self.words.count(&sentence);
            total_sentences += 1;
            total_words += words;
            if words > self.long_sentence_threshold {
                long_sentences.push(sentence);
            }
        }

        if total_sentences == 0 {
            return ReadabilityResult::default();
        }

        let average = total_words as f64 / total_sentences as f64;

        ReadabilityResult {
            avg_words_per_sentence: round_to_tenth(average),
            long_sentences,
            total_sentences,
            readability_level: self.level_for(average),
        }
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new().expect("Readability analyzer should be creatable with default settings")
    }
}

/// Round a non-negative value to one decimal place, halves rounding up.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
