//! Engine configuration.
//!
//! Every tunable constant the analyzers depend on lives here. The defaults
//! are product-defined values and reproduce the stock behaviour exactly.
//!
//! # Examples
//!
//! ```
//! use plume::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_hashtag_count(3)
//!     .with_long_sentence_threshold(30);
//! assert!(config.validate().is_ok());
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::lexicon::{DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_STOP_WORDS};
use crate::error::{PlumeError, Result};

/// Default number of hashtag candidates.
pub const DEFAULT_HASHTAG_COUNT: usize = 5;

/// Default word count above which a sentence is flagged as long.
pub const DEFAULT_LONG_SENTENCE_THRESHOLD: usize = 25;

/// Default average words per sentence above which text is `moderate`.
pub const DEFAULT_MODERATE_CUTOFF: f64 = 14.0;

/// Default average words per sentence above which text is `hard`.
pub const DEFAULT_HARD_CUTOFF: f64 = 20.0;

/// Minimum length of a hashtag candidate term.
pub const MIN_HASHTAG_TERM_LENGTH: usize = 3;

/// Configuration for a [`ContentEngine`](super::ContentEngine).
///
/// Deserializing fills any missing field with its default, so a JSON file
/// only needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of hashtag candidates to emit.
    pub hashtag_count: usize,

    /// Sentences with more words than this are reported as long.
    pub long_sentence_threshold: usize,

    /// Average sentence length above which readability is `moderate`.
    pub moderate_cutoff: f64,

    /// Average sentence length above which readability is `hard`.
    pub hard_cutoff: f64,

    /// Positive sentiment lexicon (lower-case words).
    pub positive_words: HashSet<String>,

    /// Negative sentiment lexicon (lower-case words).
    pub negative_words: HashSet<String>,

    /// Words never proposed as hashtags.
    pub stop_words: HashSet<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            hashtag_count: DEFAULT_HASHTAG_COUNT,
            long_sentence_threshold: DEFAULT_LONG_SENTENCE_THRESHOLD,
            moderate_cutoff: DEFAULT_MODERATE_CUTOFF,
            hard_cutoff: DEFAULT_HARD_CUTOFF,
            positive_words: DEFAULT_POSITIVE_WORDS.clone(),
            negative_words: DEFAULT_NEGATIVE_WORDS.clone(),
            stop_words: DEFAULT_STOP_WORDS.clone(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: EngineConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for contradictory or unusable values.
    ///
    /// Every lexicon and stop word must be lower-case ASCII letters, since
    /// only such terms are ever looked up.
    pub fn validate(&self) -> Result<()> {
        if !self.moderate_cutoff.is_finite() || !self.hard_cutoff.is_finite() {
            return Err(PlumeError::invalid_config(
                "readability cutoffs must be finite numbers",
            ));
        }
        if self.moderate_cutoff < 0.0 {
            return Err(PlumeError::invalid_config(
                "readability cutoffs must not be negative",
            ));
        }
        if self.moderate_cutoff > self.hard_cutoff {
            return Err(PlumeError::invalid_config(format!(
                "moderate cutoff ({}) exceeds hard cutoff ({})",
                self.moderate_cutoff, self.hard_cutoff
            )));
        }

        for (name, words) in [
            ("positive_words", &self.positive_words),
            ("negative_words", &self.negative_words),
            ("stop_words", &self.stop_words),
        ] {
            check_term_set(name, words)?;
        }

        let mut overlap: Vec<&String> = self
            .positive_words
            .intersection(&self.negative_words)
            .collect();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(PlumeError::invalid_config(format!(
                "sentiment lexicons overlap on {overlap:?}"
            )));
        }

        Ok(())
    }

    /// Set the number of hashtag candidates.
    pub fn with_hashtag_count(mut self, count: usize) -> Self {
        self.hashtag_count = count;
        self
    }

    /// Set the long-sentence threshold in words.
    pub fn with_long_sentence_threshold(mut self, threshold: usize) -> Self {
        self.long_sentence_threshold = threshold;
        self
    }

    /// Set both readability cutoffs.
    pub fn with_readability_cutoffs(mut self, moderate: f64, hard: f64) -> Self {
        self.moderate_cutoff = moderate;
        self.hard_cutoff = hard;
        self
    }

    /// Replace the sentiment lexicons.
    pub fn with_lexicons<I, J, S>(mut self, positive: I, negative: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positive_words = positive.into_iter().map(|s| s.into()).collect();
        self.negative_words = negative.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Replace the stop word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(|s| s.into()).collect();
        self
    }
}

/// Text is lower-cased and split into ASCII letter runs before any lookup,
/// so a word with any other character can never match.
fn check_term_set(name: &str, words: &HashSet<String>) -> Result<()> {
    let mut invalid: Vec<&String> = words
        .iter()
        .filter(|w| w.is_empty() || !w.bytes().all(|b| b.is_ascii_lowercase()))
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }

    invalid.sort();
    Err(PlumeError::invalid_config(format!(
        "{name} must be lower-case ASCII letters, found {invalid:?}"
    )))
}
