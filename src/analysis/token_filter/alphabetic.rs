//! Alphabetic filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};

/// A filter that keeps only ASCII-alphabetic tokens of a minimum length.
///
/// Word tokens such as `"abc123"` or `"x_1"` are dropped entirely rather than
/// trimmed to their letters, so a term is always a whole word.
#[derive(Clone, Debug)]
pub struct AlphabeticFilter {
    min_length: usize,
}

impl AlphabeticFilter {
    /// Create a new alphabetic filter accepting tokens of any non-zero length.
    pub fn new() -> Self {
        Self::with_min_length(1)
    }

    /// Create a new alphabetic filter with a minimum token length.
    pub fn with_min_length(min_length: usize) -> Self {
        AlphabeticFilter {
            min_length: min_length.max(1),
        }
    }

    /// Get the minimum accepted token length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    fn accepts(&self, text: &str) -> bool {
        text.len() >= self.min_length && text.bytes().all(|b| b.is_ascii_alphabetic())
    }
}

impl Default for AlphabeticFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !token.is_stopped() && self.accepts(&token.text))
            .collect();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
