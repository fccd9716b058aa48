//! Word analyzer and the shared word-count contract.
//!
//! Every count of "words" in the crate goes through this module, so the
//! sentiment, readability and engagement figures agree with each other.
//!
//! # Examples
//!
//! ```
//! use plume::analysis::word_count;
//!
//! assert_eq!(word_count("Hello, world! It's 2024."), 5);
//! assert_eq!(word_count("   "), 0);
//! ```

use std::sync::LazyLock;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

static DEFAULT_WORD_ANALYZER: LazyLock<WordAnalyzer> = LazyLock::new(WordAnalyzer::default);

/// An analyzer emitting maximal runs of `[A-Za-z0-9_]` as word tokens.
///
/// Case is preserved and no filtering happens.
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    tokenizer: RegexTokenizer,
}

impl WordAnalyzer {
    /// Create a new word analyzer.
    pub fn new() -> Result<Self> {
        Ok(WordAnalyzer {
            tokenizer: RegexTokenizer::new()?,
        })
    }

    /// Count the words in `text` without materializing tokens.
    pub fn count(&self, text: &str) -> usize {
        self.tokenizer.count(text)
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new().expect("Word analyzer should be creatable with default settings")
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Count the words in `text`.
///
/// Empty or whitespace-only text yields 0. Letters outside `[A-Za-z]` split
/// words rather than extending them.
pub fn word_count(text: &str) -> usize {
    DEFAULT_WORD_ANALYZER.count(text)
}
