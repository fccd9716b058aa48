//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that lower-cases the entire input text.
///
/// Uses full Unicode case mapping, so the output may differ in byte length
/// from the input (e.g. `'İ'` maps to `"i\u{307}"`).
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
