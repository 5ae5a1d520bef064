//! Random source capability.
//!
//! Every algorithm in this crate draws through [`RandomSource`]: a uniform integer
//! in a closed range, and a weighted index. The crate never owns entropy; any
//! `rand::Rng` is a source, and callers with their own engine (scripted replays,
//! a game server's global generator) can implement the trait directly.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Supplier of the two draws the container algorithms need.
pub trait RandomSource {
    /// Uniform integer in the closed range `[min, max]`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `min > max`.
    fn urand(&mut self, min: usize, max: usize) -> usize;

    /// Index `i` drawn with probability `weights[i] / sum(weights)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `weights` is empty, holds a negative or
    /// non-finite value, or sums to zero.
    fn urand_weighted(&mut self, weights: &[f64]) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn urand(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "urand: empty range [{min}, {max}]");
        self.random_range(min..=max)
    }

    fn urand_weighted(&mut self, weights: &[f64]) -> usize {
        match WeightedIndex::<f64>::new(weights) {
            Ok(dist) => dist.sample(self),
            Err(err) => panic!("urand_weighted: invalid weights ({err})"),
        }
    }
}
