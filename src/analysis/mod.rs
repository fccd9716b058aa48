//! Text analysis module for Plume.
//!
//! The token pipeline every content analyzer is built on: char filters
//! normalize raw text, a tokenizer cuts it into tokens, and token filters
//! rewrite or drop tokens. Prebuilt analyzers cover the three views of a
//! text the engine needs: words, sentences and terms.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
