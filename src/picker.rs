//! A seedable random source with the container operations as methods.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::resize::{random_resize_if_with_rng, random_resize_with_rng, random_shuffle_with_rng};
use crate::select::{
    select_uniform_if_with_rng, select_uniform_with_rng, select_weighted_by_with_rng,
    select_weighted_with_rng,
};
use crate::sequence::EraseIf;

/// Owns an engine and runs selection / trimming against it.
///
/// `Picker` is itself a `RngCore`, so it can also be handed to any
/// `*_with_rng` function or used as a [`crate::RandomSource`] directly.
///
/// The engine is created on first use: from the seed if one was set, from
/// `rand::rng()` otherwise.
#[derive(Debug, Clone)]
pub struct Picker {
    seed: Option<u64>,
    rng: Option<StdRng>,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    /// Picker seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: None,
        }
    }

    /// Deterministic picker: the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new().with_seed(seed)
    }

    /// Set random seed, restarting the draw sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = None;
        self
    }

    /// The configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn engine(&mut self) -> &mut StdRng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        })
    }

    /// See [`crate::select_uniform`].
    pub fn pick<I>(&mut self, seq: I) -> I::Item
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        select_uniform_with_rng(seq, self.engine())
    }

    /// See [`crate::select_uniform_if`].
    pub fn pick_if<I, P>(&mut self, seq: I, pred: P) -> Option<I::Item>
    where
        I: IntoIterator,
        P: FnMut(&I::Item) -> bool,
    {
        select_uniform_if_with_rng(seq, pred, self.engine())
    }

    /// See [`crate::select_weighted`].
    pub fn pick_weighted<I>(&mut self, seq: I, weights: &[f64]) -> I::Item
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        select_weighted_with_rng(seq, weights, self.engine())
    }

    /// See [`crate::select_weighted_by`].
    pub fn pick_weighted_by<I, F>(&mut self, seq: I, weight_fn: F) -> I::Item
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator + Clone,
        F: FnMut(&I::Item) -> f64,
    {
        select_weighted_by_with_rng(seq, weight_fn, self.engine())
    }

    /// See [`crate::random_resize`].
    pub fn resize<C>(&mut self, c: &mut C, requested: usize)
    where
        C: EraseIf + ?Sized,
    {
        random_resize_with_rng(c, requested, self.engine());
    }

    /// See [`crate::random_resize_if`].
    pub fn resize_if<C, P>(&mut self, c: &mut C, pred: P, requested: usize)
    where
        C: EraseIf + ?Sized,
        P: FnMut(&C::Item) -> bool,
    {
        random_resize_if_with_rng(c, pred, requested, self.engine());
    }

    /// See [`crate::random_shuffle`].
    pub fn shuffle<T>(&mut self, seq: &mut [T]) {
        random_shuffle_with_rng(seq, self.engine());
    }
}

impl RngCore for Picker {
    fn next_u32(&mut self) -> u32 {
        self.engine().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.engine().next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.engine().fill_bytes(dst);
    }
}
