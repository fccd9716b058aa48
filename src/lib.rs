//! # Plume
//!
//! Content-quality signals for short social-media posts.
//!
//! ## Features
//!
//! - Lexicon-based sentiment polarity
//! - Sentence-length readability grading
//! - Frequency-ranked hashtag candidates
//! - Engagement score with actionable suggestions
//! - Persistent history of saved analyses
//!
//! ```
//! let result = plume::engine::analyze("Loving this amazing community! What do you think?")
//!     .unwrap();
//! assert_eq!(result.sentiment.positive_count, 1);
//! assert!(result.engagement.score <= 100);
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod history;

pub mod prelude {
    pub use crate::engine::{
        AnalysisResult, ContentEngine, CtaSelector, EngagementResult, EngagementSuggestion,
        EngagementTier, EngineConfig, FixedCtaSelector, RandomCtaSelector, ReadabilityLevel,
        ReadabilityResult, SentimentLabel, SentimentResult, SuggestionKind,
    };
    pub use crate::error::{PlumeError, Result};
    pub use crate::history::{HistoryStore, SavedAnalysis};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
