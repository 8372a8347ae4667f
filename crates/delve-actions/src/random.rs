//! Injectable randomness.
//!
//! Actions never reach for a global generator. They draw from a
//! [`RandomSource`] handed in by the caller, so a seeded generator gives a
//! reproducible session and tests can script exact rolls. Every
//! [`rand::Rng`] is a [`RandomSource`].

use rand::Rng;

/// A source of bounded uniform integers.
pub trait RandomSource {
    /// Uniform integer in the inclusive range between `low` and `high`.
    ///
    /// The bounds may be given in either order.
    fn random_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn random_int(&mut self, low: u32, high: u32) -> u32 {
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        self.random_range(lo..=hi)
    }
}
