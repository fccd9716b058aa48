//! Term analyzer.
//!
//! Terms are lower-cased, purely alphabetic word tokens. The whole text is
//! lower-cased before tokenization, then word tokens containing digits or
//! underscores are dropped, as are tokens shorter than the minimum length and
//! (optionally) stop words.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. RegexTokenizer (`[A-Za-z0-9_]+`)
//! 3. AlphabeticFilter (minimum length)
//! 4. StopFilter (optional)

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{AlphabeticFilter, StopFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// An analyzer producing lower-cased alphabetic terms.
#[derive(Clone, Debug)]
pub struct TermAnalyzer {
    inner: PipelineAnalyzer,
}

impl TermAnalyzer {
    /// Create a term analyzer accepting every alphabetic word, stop words included.
    pub fn new() -> Result<Self> {
        let analyzer = Self::base_pipeline(1)?.with_name("term");
        Ok(TermAnalyzer { inner: analyzer })
    }

    /// Create a term analyzer with a minimum term length and a stop filter.
    pub fn with_stop_words(min_length: usize, stop_filter: StopFilter) -> Result<Self> {
        let analyzer = Self::base_pipeline(min_length)?
            .add_filter(Arc::new(stop_filter))
            .with_name("term_stop");

        Ok(TermAnalyzer { inner: analyzer })
    }

    fn base_pipeline(min_length: usize) -> Result<PipelineAnalyzer> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        Ok(PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::with_min_length(min_length))))
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for TermAnalyzer {
    fn default() -> Self {
        Self::new().expect("Term analyzer should be creatable with default settings")
    }
}

impl Analyzer for TermAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "term"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_term_analyzer() {
        let analyzer = TermAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("This is GREAT, v2 rocks_hard!").collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["this", "is", "great"]);
    }

    #[test]
    fn test_term_analyzer_with_stop_words() {
        let analyzer =
            TermAnalyzer::with_stop_words(3, StopFilter::from_words(vec!["the", "with"])).unwrap();
        let texts: Vec<String> = analyzer
            .analyze("The cat sat with an owl on the mat")
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["cat", "sat", "owl", "mat"]);
        assert_eq!(analyzer.inner().pipeline_name(), "term_stop");
    }

    #[test]
    fn test_whole_text_lowercasing() {
        let analyzer = TermAnalyzer::new().unwrap();
        // U+212A KELVIN SIGN lower-cases to an ASCII 'k'
        let texts: Vec<String> = analyzer.analyze("\u{212A}IND").map(|t| t.text).collect();
        assert_eq!(texts, vec!["kind"]);
    }
}
