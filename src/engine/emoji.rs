//! Best-effort emoji detection.
//!
//! A code point counts as an emoji when it falls in one of the commonly used
//! pictographic blocks below. This is a heuristic, not a full Unicode emoji
//! classifier: `⭐` (U+2B50) and keycap sequences, for instance, are missed.

/// Code point ranges treated as emoji, inclusive.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F1E0, 0x1F1FF), // Regional indicators (flags)
    (0x2600, 0x26FF),   // Miscellaneous Symbols
    (0x2700, 0x27BF),   // Dingbats
];

/// Emoji proposed when a post has none; the first three are suggested.
pub const EMOJI_SUGGESTIONS: &[&str] = &[
    "🚀", "💡", "🔥", "✨", "💪", "🎯", "📈", "⭐", "🌟", "👏",
];

/// Check whether a single character is in an emoji range.
pub fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Check whether `text` contains at least one emoji code point.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_common_emoji() {
        assert!(contains_emoji("Launch day 🚀"));
        assert!(contains_emoji("😀"));
        assert!(contains_emoji("☀ sunny"));
        assert!(contains_emoji("done ✅"));
        assert!(contains_emoji("🇯🇵"));
    }

    #[test]
    fn test_plain_text_has_no_emoji() {
        assert!(!contains_emoji(""));
        assert!(!contains_emoji("Plain text, café, 日本語 & symbols #1?"));
    }

    #[test]
    fn test_heuristic_misses_outside_ranges() {
        assert!(!is_emoji('⭐'));
        assert!(is_emoji('✨'));
    }
}
