//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-producing step of the analysis pipeline.
//! Tokenization is total: any string, including the empty string, yields a
//! (possibly empty) token stream.
//!
//! # Examples
//!
//! ```
//! use plume::analysis::tokenizer::Tokenizer;
//! use plume::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world_2!").collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "world_2");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by analyzers
/// running on different threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;
