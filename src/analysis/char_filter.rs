//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole text string before it reaches the
//! tokenizer. Normalizing the full text (rather than individual tokens) lets
//! case folding produce or split word characters the same way a plain
//! `to_lowercase` of the input would.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lower-casing of the whole text
//!
//! # Examples
//!
//! ```
//! use plume::analysis::char_filter::CharFilter;
//! use plume::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("Hello WORLD"), "hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseCharFilter;
