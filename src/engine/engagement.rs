//! Engagement score composition and improvement suggestions.
//!
//! The score starts at [`BASELINE_SCORE`] and every rule below adds its delta
//! independently; the total is clamped to `0..=100`.
//!
//! | Signal                         | Delta |
//! |--------------------------------|-------|
//! | positive / negative sentiment  | +15 / −10 |
//! | easy / hard readability        | +10 / −10 |
//! | 50–150 words / <20 / >300      | +10 / −15 / −5 |
//! | contains `#`                   | +5 |
//! | contains an emoji              | +5 |
//! | contains `?`                   | +5 |
//!
//! Suggestions are emitted in a fixed order (hashtag, cta, shorten,
//! readability, emoji), each one whenever its own condition holds.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::WordAnalyzer;
use crate::engine::config::DEFAULT_LONG_SENTENCE_THRESHOLD;
use crate::engine::cta::{CtaSelector, RandomCtaSelector, pick_cta};
use crate::engine::emoji::{EMOJI_SUGGESTIONS, contains_emoji};
use crate::engine::readability::{ReadabilityLevel, ReadabilityResult};
use crate::engine::sentiment::{SentimentLabel, SentimentResult};
use crate::error::Result;

/// Score every text starts from.
pub const BASELINE_SCORE: i32 = 50;

/// Upper bound of the engagement score.
pub const MAX_SCORE: i32 = 100;

const POSITIVE_SENTIMENT_BONUS: i32 = 15;
const NEGATIVE_SENTIMENT_PENALTY: i32 = -10;
const EASY_READABILITY_BONUS: i32 = 10;
const HARD_READABILITY_PENALTY: i32 = -10;
const IDEAL_LENGTH_BONUS: i32 = 10;
const SHORT_LENGTH_PENALTY: i32 = -15;
const LONG_LENGTH_PENALTY: i32 = -5;
const FEATURE_BONUS: i32 = 5;

/// Word count range (inclusive) that earns the length bonus.
pub const IDEAL_WORD_RANGE: (usize, usize) = (50, 150);
/// Posts with fewer words than this are penalized.
pub const SHORT_POST_WORDS: usize = 20;
/// Posts with more words than this are penalized.
pub const LONG_POST_WORDS: usize = 300;

/// Average words per sentence the readability suggestion recommends staying under.
const RECOMMENDED_SENTENCE_WORDS: usize = 15;

/// Kind of improvement a suggestion proposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Hashtag,
    Cta,
    Readability,
    Emoji,
    Shorten,
}

impl SuggestionKind {
    /// The lowercase wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Hashtag => "hashtag",
            SuggestionKind::Cta => "cta",
            SuggestionKind::Readability => "readability",
            SuggestionKind::Emoji => "emoji",
            SuggestionKind::Shorten => "shorten",
        }
    }

    /// Symbolic icon name handed to presentation layers.
    pub fn icon(&self) -> &'static str {
        match self {
            SuggestionKind::Hashtag => "Hash",
            SuggestionKind::Cta => "Megaphone",
            SuggestionKind::Readability => "BookOpen",
            SuggestionKind::Emoji => "Smile",
            SuggestionKind::Shorten => "Scissors",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single actionable improvement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// Opaque icon token, resolved by the presentation layer.
    pub icon: String,
}

impl EngagementSuggestion {
    fn new<S: Into<String>>(kind: SuggestionKind, title: &str, description: S) -> Self {
        EngagementSuggestion {
            kind,
            title: title.to_string(),
            description: description.into(),
            icon: kind.icon().to_string(),
        }
    }
}

/// Coarse band of an engagement score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTier {
    Strong,
    Average,
    NeedsWork,
}

impl EngagementTier {
    /// Band a score: 70 and above is strong, 40 and above average.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            EngagementTier::Strong
        } else if score >= 40 {
            EngagementTier::Average
        } else {
            EngagementTier::NeedsWork
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EngagementTier::Strong => "Strong",
            EngagementTier::Average => "Average",
            EngagementTier::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of engagement scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementResult {
    /// Composite score in `0..=100`.
    pub score: u8,
    /// Suggestions in generation order.
    pub suggestions: Vec<EngagementSuggestion>,
}

impl EngagementResult {
    /// The band this score falls in.
    pub fn tier(&self) -> EngagementTier {
        EngagementTier::from_score(self.score)
    }
}

/// Combines analyzer outputs into a score and suggestions.
#[derive(Clone, Debug)]
pub struct EngagementScorer {
    words: WordAnalyzer,
    long_sentence_threshold: usize,
    cta_selector: Arc<dyn CtaSelector>,
}

impl EngagementScorer {
    /// Create a scorer with random call-to-action selection.
    pub fn new() -> Result<Self> {
        Self::with_cta_selector(Arc::new(RandomCtaSelector))
    }

    /// Create a scorer with an injected call-to-action selector.
    pub fn with_cta_selector(cta_selector: Arc<dyn CtaSelector>) -> Result<Self> {
        Ok(EngagementScorer {
            words: WordAnalyzer::new()?,
            long_sentence_threshold: DEFAULT_LONG_SENTENCE_THRESHOLD,
            cta_selector,
        })
    }

    /// Set the threshold quoted by the shorten suggestion.
    pub fn long_sentence_threshold(mut self, threshold: usize) -> Self {
        self.long_sentence_threshold = threshold;
        self
    }

    /// Replace the call-to-action selector.
    pub fn set_cta_selector(&mut self, cta_selector: Arc<dyn CtaSelector>) {
        self.cta_selector = cta_selector;
    }

    /// Score `text` and generate suggestions.
    ///
    /// The word count is recomputed from `text` with the shared word
    /// tokenizer; everything else comes from the supplied analyzer outputs.
    pub fn calculate(
        &self,
        text: &str,
        sentiment: &SentimentResult,
        readability: &ReadabilityResult,
        hashtags: &[String],
    ) -> EngagementResult {
        let word_count = self.words.count(text);
        let has_hashtag = text.contains('#');
        let has_emoji = contains_emoji(text);
        let has_question = text.contains('?');

        let mut score = BASELINE_SCORE;
        score += sentiment_delta(sentiment.label);
        score += readability_delta(readability.readability_level);
        score += length_delta(word_count);
        if has_hashtag {
            score += FEATURE_BONUS;
        }
        if has_emoji {
            score += FEATURE_BONUS;
        }
        if has_question {
            score += FEATURE_BONUS;
        }

        let mut suggestions = Vec::new();

        if !has_hashtag && !hashtags.is_empty() {
            let preview: Vec<&str> = hashtags.iter().take(3).map(String::as_str).collect();
            suggestions.push(EngagementSuggestion::new(
                SuggestionKind::Hashtag,
                "Add Hashtags",
                format!("Boost discoverability with: {}", preview.join(" ")),
            ));
        }

        if !has_question {
            suggestions.push(EngagementSuggestion::new(
                SuggestionKind::Cta,
                "Add a Call-to-Action",
                pick_cta(self.cta_selector.as_ref()),
            ));
        }

        if !readability.long_sentences.is_empty() {
            suggestions.push(EngagementSuggestion::new(
                SuggestionKind::Shorten,
                "Shorten Long Sentences",
                format!(
                    "{} sentence(s) exceed {} words. Break them up for better readability.",
                    readability.long_sentences.len(),
                    self.long_sentence_threshold
                ),
            ));
        }

        if readability.readability_level == ReadabilityLevel::Hard {
            suggestions.push(EngagementSuggestion::new(
                SuggestionKind::Readability,
                "Improve Readability",
                format!(
                    "Average {} words/sentence. Aim for under {} for social media.",
                    readability.avg_words_per_sentence, RECOMMENDED_SENTENCE_WORDS
                ),
            ));
        }

        if !has_emoji {
            suggestions.push(EngagementSuggestion::new(
                SuggestionKind::Emoji,
                "Add Emojis",
                format!(
                    "Emojis boost engagement by up to 25%. Try: {}",
                    EMOJI_SUGGESTIONS[..3].join(" ")
                ),
            ));
        }

        EngagementResult {
            score: score.clamp(0, MAX_SCORE) as u8,
            suggestions,
        }
    }
}

impl Default for EngagementScorer {
    fn default() -> Self {
        Self::new().expect("Engagement scorer should be creatable with default settings")
    }
}

fn sentiment_delta(label: SentimentLabel) -> i32 {
    match label {
        SentimentLabel::Positive => POSITIVE_SENTIMENT_BONUS,
        SentimentLabel::Negative => NEGATIVE_SENTIMENT_PENALTY,
        SentimentLabel::Neutral => 0,
    }
}

fn readability_delta(level: ReadabilityLevel) -> i32 {
    match level {
        ReadabilityLevel::Easy => EASY_READABILITY_BONUS,
        ReadabilityLevel::Hard => HARD_READABILITY_PENALTY,
        ReadabilityLevel::Moderate => 0,
    }
}

fn length_delta(word_count: usize) -> i32 {
    let (ideal_min, ideal_max) = IDEAL_WORD_RANGE;
    if (ideal_min..=ideal_max).contains(&word_count) {
        IDEAL_LENGTH_BONUS
    } else if word_count < SHORT_POST_WORDS {
        SHORT_LENGTH_PENALTY
    } else if word_count > LONG_POST_WORDS {
        LONG_LENGTH_PENALTY
    } else {
        0
    }
}
