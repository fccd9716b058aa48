//! Call-to-action examples and the selection seam.
//!
//! Which example a suggestion quotes is deliberately non-deterministic by
//! default. Tests and reproducible runs inject a [`FixedCtaSelector`].

use std::fmt::Debug;

use rand::Rng;

/// Call-to-action lines offered when a post asks no question.
pub const CTA_EXAMPLES: &[&str] = &[
    "Try adding: 'What do you think? Drop a comment below! 👇'",
    "Try adding: 'Share this with someone who needs to see it! 🔄'",
    "Try adding: 'Save this for later — you'll thank yourself! 🔖'",
    "Try adding: 'Follow for more insights like this! ✨'",
    "Try adding: 'Tag a friend who would love this! 🏷️'",
];

/// Chooses which call-to-action example to quote.
pub trait CtaSelector: Send + Sync + Debug {
    /// Return an index in `0..pool_len`. `pool_len` is never 0.
    fn select(&self, pool_len: usize) -> usize;
}

/// Picks uniformly at random from the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomCtaSelector;

impl CtaSelector for RandomCtaSelector {
    fn select(&self, pool_len: usize) -> usize {
        rand::rng().random_range(0..pool_len)
    }
}

/// Always picks the same index, wrapped into the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedCtaSelector(pub usize);

impl CtaSelector for FixedCtaSelector {
    fn select(&self, pool_len: usize) -> usize {
        self.0 % pool_len
    }
}

/// Pick an example from [`CTA_EXAMPLES`] with `selector`.
pub fn pick_cta(selector: &dyn CtaSelector) -> &'static str {
    let index = selector.select(CTA_EXAMPLES.len());
    CTA_EXAMPLES[index.min(CTA_EXAMPLES.len() - 1)]
}
