//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// A filter that removes leading and trailing whitespace from tokens.
///
/// Tokens that are whitespace-only are marked as stopped rather than emptied.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let trimmed = token.text.trim();
                    if trimmed.is_empty() {
                        token.stop()
                    } else if trimmed.len() == token.text.len() {
                        token
                    } else {
                        let trimmed = trimmed.to_string();
                        token.with_text(trimmed)
                    }
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
