//! Token filter implementations for token transformation.
//!
//! Filters run after the tokenizer, in the order they were added to a
//! pipeline. A filter either rewrites tokens, marks them as stopped, or drops
//! them from the stream.

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod remove_empty;
pub mod stop;
pub mod strip;

pub use alphabetic::AlphabeticFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use stop::StopFilter;
pub use strip::StripFilter;
