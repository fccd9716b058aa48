//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is a complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom char filter, tokenizer and filter chains
//! - [`WordAnalyzer`](super::word::WordAnalyzer) - Word tokens used for every word count
//! - [`SentenceAnalyzer`](super::sentence::SentenceAnalyzer) - Trimmed, non-empty sentences
//! - [`TermAnalyzer`](super::term::TermAnalyzer) - Lower-cased alphabetic terms, optionally stop-filtered
//!
//! # Examples
//!
//! ```
//! use plume::analysis::analyzer::Analyzer;
//! use plume::analysis::analyzer::term::TermAnalyzer;
//!
//! let analyzer = TermAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Great 2024 Launch").collect();
//!
//! assert_eq!(tokens[0].text, "great");
//! assert_eq!(tokens[1].text, "launch");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis is total: every input string produces a token stream, possibly
/// empty. The trait requires `Send + Sync` so one analyzer can serve
/// concurrent callers.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}
