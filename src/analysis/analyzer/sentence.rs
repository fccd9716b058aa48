//! Sentence analyzer.
//!
//! Sentences are the fragments between runs of `.`, `!` and `?`, with
//! surrounding whitespace trimmed and empty fragments discarded. Text with no
//! terminator at all is a single sentence.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{RemoveEmptyFilter, StripFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// An analyzer producing one token per non-empty, trimmed sentence.
#[derive(Clone, Debug)]
pub struct SentenceAnalyzer {
    inner: PipelineAnalyzer,
}

impl SentenceAnalyzer {
    /// Create a new sentence analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::sentences()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("sentence");

        Ok(SentenceAnalyzer { inner: analyzer })
    }

    /// Split `text` into its sentences, in order.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

impl Default for SentenceAnalyzer {
    fn default() -> Self {
        Self::new().expect("Sentence analyzer should be creatable with default settings")
    }
}

impl Analyzer for SentenceAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}
