//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PlumeError, Result};

/// Pattern for word tokens: maximal runs of ASCII word characters.
///
/// Letters outside `[A-Za-z]` are not word characters, so `"café"` yields the
/// single token `"caf"`. This is a known limitation of the word model.
pub const WORD_PATTERN: &str = r"[A-Za-z0-9_]+";

/// Pattern for sentence boundaries: one or more terminators.
pub const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?]+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// In gap mode the tokenizer emits the text *between* matches instead of the
/// matches themselves, which is how sentences are cut at terminators.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the word pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PlumeError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PlumeError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: true,
        })
    }

    /// Create a tokenizer that splits text into raw sentence fragments.
    ///
    /// Fragments are untrimmed and may be empty or whitespace-only.
    pub fn sentences() -> Result<Self> {
        Self::with_gaps(SENTENCE_BOUNDARY_PATTERN)
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    /// Count matches without materializing tokens.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens = if self.gaps {
            let mut tokens = Vec::new();
            let mut last_end = 0;
            let mut position = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    tokens.push(Token::with_offsets(
                        &text[last_end..mat.start()],
                        position,
                        last_end,
                        mat.start(),
                    ));
                    position += 1;
                }
                last_end = mat.end();
            }

            // Trailing text after the last boundary
            if last_end < text.len() {
                tokens.push(Token::with_offsets(
                    &text[last_end..],
                    position,
                    last_end,
                    text.len(),
                ));
            }

            tokens
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
