//! Default sentiment lexicons.
//!
//! Both lexicons are fixed, lower-case and disjoint. They are built once on
//! first use and never mutated; engines that need other words take their own
//! sets through [`EngineConfig`](super::config::EngineConfig).

use std::collections::HashSet;
use std::sync::LazyLock;

pub use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET as DEFAULT_STOP_WORDS;

const POSITIVE_WORDS: &[&str] = &[
    "great", "amazing", "awesome", "excellent", "fantastic", "wonderful", "love", "happy",
    "joy", "beautiful", "brilliant", "outstanding", "perfect", "best", "good", "nice", "superb",
    "incredible", "remarkable", "delightful", "excited", "inspiring", "positive", "powerful",
    "success", "successful", "win", "winning", "thankful", "grateful", "celebrate",
    "achievement", "impressive", "strong", "innovative", "creative", "exceptional", "thriving",
    "passionate", "motivated", "confident", "thrilled", "blessed", "proud", "cheerful",
    "optimistic",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "angry", "sad", "ugly", "worst", "poor",
    "disappointing", "failure", "fail", "weak", "boring", "painful", "annoying", "frustrating",
    "disgusting", "dreadful", "miserable", "negative", "problem", "crisis", "disaster",
    "broken", "toxic", "worried", "stressed", "anxious", "afraid", "hopeless", "useless",
    "pathetic", "struggling", "difficult", "unhappy", "depressed", "exhausted", "overwhelmed",
];

/// Words counted as positive sentiment hits.
pub static DEFAULT_POSITIVE_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().map(|&s| s.to_string()).collect());

/// Words counted as negative sentiment hits.
pub static DEFAULT_NEGATIVE_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().map(|&s| s.to_string()).collect());
