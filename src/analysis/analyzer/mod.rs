//! Analyzer implementations that combine char filters, tokenizers and filters.

pub mod analyzer;
pub mod pipeline;
pub mod sentence;
pub mod term;
pub mod word;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use sentence::SentenceAnalyzer;
pub use term::TermAnalyzer;
pub use word::{WordAnalyzer, word_count};
