//! The content analysis engine.
//!
//! [`ContentEngine`] runs the sentiment, readability and hashtag analyzers
//! over one text, feeds their outputs to the engagement scorer and assembles
//! a single [`AnalysisResult`]. The engine holds no mutable state; one
//! instance can serve any number of callers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::analyzer::WordAnalyzer;
use crate::engine::config::EngineConfig;
use crate::engine::cta::CtaSelector;
use crate::engine::engagement::{EngagementResult, EngagementScorer};
use crate::engine::hashtag::HashtagExtractor;
use crate::engine::readability::{ReadabilityAnalyzer, ReadabilityResult};
use crate::engine::sentiment::{SentimentAnalyzer, SentimentResult};
use crate::error::Result;

/// Every signal computed for one text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub word_count: usize,
    pub sentiment: SentimentResult,
    pub readability: ReadabilityResult,
    pub hashtags: Vec<String>,
    pub engagement: EngagementResult,
}

/// Orchestrates the content analyzers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use plume::engine::{ContentEngine, EngineConfig, FixedCtaSelector};
///
/// let engine = ContentEngine::new(EngineConfig::default())
///     .unwrap()
///     .with_cta_selector(Arc::new(FixedCtaSelector(0)));
///
/// assert!(engine.analyze("   ").is_none());
///
/// let result = engine.analyze("Loving this amazing community!").unwrap();
/// assert_eq!(result.word_count, 4);
/// assert_eq!(result.sentiment.positive_count, 1);
/// ```
#[derive(Clone, Debug)]
pub struct ContentEngine {
    config: EngineConfig,
    words: WordAnalyzer,
    sentiment: SentimentAnalyzer,
    readability: ReadabilityAnalyzer,
    hashtags: HashtagExtractor,
    engagement: EngagementScorer,
}

impl ContentEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let sentiment = SentimentAnalyzer::with_lexicons(
            config.positive_words.clone(),
            config.negative_words.clone(),
        )?;
        let readability = ReadabilityAnalyzer::with_thresholds(
            config.long_sentence_threshold,
            config.moderate_cutoff,
            config.hard_cutoff,
        )?;
        let hashtags =
            HashtagExtractor::with_stop_words(config.stop_words.clone(), config.hashtag_count)?;
        let engagement =
            EngagementScorer::new()?.long_sentence_threshold(config.long_sentence_threshold);

        Ok(ContentEngine {
            config,
            words: WordAnalyzer::new()?,
            sentiment,
            readability,
            hashtags,
            engagement,
        })
    }

    /// Replace the call-to-action selector used for suggestions.
    pub fn with_cta_selector(mut self, selector: Arc<dyn CtaSelector>) -> Self {
        self.engagement.set_cta_selector(selector);
        self
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze `text`.
    ///
    /// Returns `None` when the text is empty or whitespace-only: there is
    /// nothing to analyze yet. Any other input yields a complete result.
    pub fn analyze(&self, text: &str) -> Option<AnalysisResult> {
        if text.trim().is_empty() {
            return None;
        }

        let word_count = self.words.count(text);
        let sentiment = self.analyze_sentiment(text);
        let readability = self.analyze_readability(text);
        let hashtags = self.hashtags.extract_default(text);
        let engagement = self.calculate_engagement(text, &sentiment, &readability, &hashtags);

        debug!(
            word_count,
            sentiment = %sentiment.label,
            readability = %readability.readability_level,
            hashtags = hashtags.len(),
            score = engagement.score,
            suggestions = engagement.suggestions.len(),
            "analyzed text"
        );

        Some(AnalysisResult {
            word_count,
            sentiment,
            readability,
            hashtags,
            engagement,
        })
    }

    /// Count the words in `text`.
    pub fn word_count(&self, text: &str) -> usize {
        self.words.count(text)
    }

    /// Run only the sentiment analyzer.
    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        self.sentiment.analyze(text)
    }

    /// Run only the readability analyzer.
    pub fn analyze_readability(&self, text: &str) -> ReadabilityResult {
        self.readability.analyze(text)
    }

    /// Run only the hashtag extractor with an explicit count.
    pub fn extract_hashtags(&self, text: &str, count: usize) -> Vec<String> {
        self.hashtags.extract(text, count)
    }

    /// Run only the engagement scorer over precomputed analyzer outputs.
    pub fn calculate_engagement(
        &self,
        text: &str,
        sentiment: &SentimentResult,
        readability: &ReadabilityResult,
        hashtags: &[String],
    ) -> EngagementResult {
        self.engagement
            .calculate(text, sentiment, readability, hashtags)
    }
}

impl Default for ContentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
            .expect("Content engine should be creatable with default settings")
    }
}
