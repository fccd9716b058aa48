//! Lexicon-based sentiment polarity.
//!
//! Each term found in the positive or negative lexicon counts as exactly one
//! hit. The polarity score is `(positive - negative) / (positive + negative)`,
//! or `0` when no term hits either lexicon.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, TermAnalyzer};
use crate::engine::lexicon::{DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS};
use crate::error::Result;

/// Scores above this are positive, scores below its negation are negative.
pub const POLARITY_THRESHOLD: f64 = 0.15;

/// Polarity label derived from a sentiment score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label a score in `[-1, 1]`.
    pub fn from_score(score: f64) -> Self {
        if score > POLARITY_THRESHOLD {
            SentimentLabel::Positive
        } else if score < -POLARITY_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// The lowercase wire name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of sentiment analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    /// Polarity in `[-1, 1]`.
    pub score: f64,
    pub label: SentimentLabel,
    /// Number of positive lexicon hits.
    pub positive_count: usize,
    /// Number of negative lexicon hits.
    pub negative_count: usize,
}

impl SentimentResult {
    /// Build a result from lexicon hit counts.
    pub fn from_counts(positive_count: usize, negative_count: usize) -> Self {
        let total = positive_count + negative_count;
        let score = if total == 0 {
            0.0
        } else {
            (positive_count as f64 - negative_count as f64) / total as f64
        };

        SentimentResult {
            score,
            label: SentimentLabel::from_score(score),
            positive_count,
            negative_count,
        }
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::from_counts(0, 0)
    }
}

/// Classifies text polarity with two fixed lexicons.
#[derive(Clone, Debug)]
pub struct SentimentAnalyzer {
    terms: TermAnalyzer,
    positive_words: Arc<HashSet<String>>,
    negative_words: Arc<HashSet<String>>,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the default lexicons.
    pub fn new() -> Result<Self> {
        Self::with_lexicons(DEFAULT_POSITIVE_WORDS.clone(), DEFAULT_NEGATIVE_WORDS.clone())
    }

    /// Create an analyzer with custom lexicons.
    ///
    /// The lexicons are expected to be disjoint sets of lower-case ASCII
    /// words. [`EngineConfig::validate`](super::config::EngineConfig::validate)
    /// checks both, and [`ContentEngine::new`](super::ContentEngine::new)
    /// validates before building this analyzer.
    pub fn with_lexicons(
        positive_words: HashSet<String>,
        negative_words: HashSet<String>,
    ) -> Result<Self> {
        Ok(SentimentAnalyzer {
            terms: TermAnalyzer::new()?,
            positive_words: Arc::new(positive_words),
            negative_words: Arc::new(negative_words),
        })
    }

    /// Analyze the polarity of `text`. Never fails; empty text is neutral.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let mut positive_count = 0;
        let mut negative_count = 0;

        for token in self.terms.analyze(text) {
            if self.positive_words.contains(&token.text) {
                positive_count += 1;
            }
            if self.negative_words.contains(&token.text) {
                negative_count += 1;
            }
        }

        SentimentResult::from_counts(positive_count, negative_count)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new().expect("Sentiment analyzer should be creatable with default settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positive() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let result = analyzer.analyze("This is great, amazing, wonderful!");

        assert_eq!(result.positive_count, 3);
        assert_eq!(result.negative_count, 0);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_mixed_and_case_insensitive() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let result = analyzer.analyze("GREAT launch, but a Terrible and AWFUL onboarding.");

        assert_eq!(result.positive_count, 1);
        assert_eq!(result.negative_count, 2);
        assert!((result.score - (-1.0 / 3.0)).abs() < 1e-12);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_balanced_is_neutral() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let result = analyzer.analyze("good and bad");

        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_input() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let result = analyzer.analyze("");

        assert_eq!(result, SentimentResult::default());
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_words_glued_to_digits_do_not_count() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        assert_eq!(analyzer.analyze("great2 best_ever").positive_count, 0);
        assert_eq!(analyzer.analyze("great, best-ever").positive_count, 2);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.15), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.16), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.15), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.16), SentimentLabel::Negative);
    }

    #[test]
    fn test_custom_lexicons() {
        let analyzer = SentimentAnalyzer::with_lexicons(
            ["rad".to_string()].into_iter().collect(),
            ["meh".to_string()].into_iter().collect(),
        )
        .unwrap();
        let result = analyzer.analyze("rad rad meh great");

        assert_eq!(result.positive_count, 2);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(SentimentResult::from_counts(1, 0)).unwrap();
        assert_eq!(json["label"], "positive");
        assert_eq!(json["positiveCount"], 1);
        assert_eq!(json["negativeCount"], 0);
    }
}
