//! The content analysis engine.
//!
//! Four analyzers cooperate over one input text:
//!
//! ```text
//! text ─┬─> SentimentAnalyzer   ──┐
//!       ├─> ReadabilityAnalyzer ──┼─> EngagementScorer ─> AnalysisResult
//!       └─> HashtagExtractor    ──┘
//! ```
//!
//! Sentiment, readability and hashtags are independent of each other; the
//! engagement scorer consumes all three. Every step is a pure function of its
//! inputs, apart from the call-to-action pick (see [`cta`]).
//!
//! The free functions in this module use a shared engine built from
//! [`EngineConfig::default`]. Build a [`ContentEngine`] to change any tunable.
//!
//! # Examples
//!
//! ```
//! use plume::engine;
//!
//! let sentiment = engine::analyze_sentiment("This is great, amazing, wonderful!");
//! assert_eq!(sentiment.positive_count, 3);
//! assert_eq!(sentiment.score, 1.0);
//!
//! let tags = engine::extract_hashtags("cats cats dogs dogs dogs birds", 2);
//! assert_eq!(tags, vec!["#dogs", "#cats"]);
//!
//! assert!(engine::analyze("").is_none());
//! ```

use std::sync::LazyLock;

pub mod config;
pub mod content;
pub mod cta;
pub mod emoji;
pub mod engagement;
pub mod hashtag;
pub mod lexicon;
pub mod readability;
pub mod sentiment;

pub use config::EngineConfig;
pub use content::{AnalysisResult, ContentEngine};
pub use cta::{CtaSelector, FixedCtaSelector, RandomCtaSelector};
pub use engagement::{
    EngagementResult, EngagementScorer, EngagementSuggestion, EngagementTier, SuggestionKind,
};
pub use hashtag::HashtagExtractor;
pub use readability::{ReadabilityAnalyzer, ReadabilityLevel, ReadabilityResult};
pub use sentiment::{SentimentAnalyzer, SentimentLabel, SentimentResult};

pub use crate::analysis::word_count;

static DEFAULT_ENGINE: LazyLock<ContentEngine> = LazyLock::new(ContentEngine::default);

/// Analyze `text` with the default configuration.
///
/// Returns `None` for empty or whitespace-only text.
pub fn analyze(text: &str) -> Option<AnalysisResult> {
    DEFAULT_ENGINE.analyze(text)
}

/// Classify the sentiment polarity of `text`.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    DEFAULT_ENGINE.analyze_sentiment(text)
}

/// Grade the readability of `text`.
pub fn analyze_readability(text: &str) -> ReadabilityResult {
    DEFAULT_ENGINE.analyze_readability(text)
}

/// Extract up to `count` hashtag candidates from `text`.
pub fn extract_hashtags(text: &str, count: usize) -> Vec<String> {
    DEFAULT_ENGINE.extract_hashtags(text, count)
}

/// Score `text` from precomputed analyzer outputs.
pub fn calculate_engagement(
    text: &str,
    sentiment: &SentimentResult,
    readability: &ReadabilityResult,
    hashtags: &[String],
) -> EngagementResult {
    DEFAULT_ENGINE.calculate_engagement(text, sentiment, readability, hashtags)
}
