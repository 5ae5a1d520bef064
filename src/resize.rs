//! Randomized trimming and shuffling.
//!
//! [`random_resize`] cuts a container down to `k` elements chosen uniformly at
//! random, in one forward pass, keeping the survivors in their original order.
//! The element under the read cursor is kept with probability
//! `to_keep / to_process`; over the whole pass this selects every one of the
//! `C(n, k)` subsets with equal probability. Unlike reservoir sampling the
//! length is known up front, so no kept slot is ever replaced.
//!
//! ## References
//!
//! - Fan, Muller, Rezucha (1962); Knuth, TAOCP vol. 2, §3.4.2 “Algorithm S”
//!   (selection sampling).
//! - Fisher–Yates / Durstenfeld shuffle, via `rand::seq::SliceRandom`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::sequence::EraseIf;
use crate::source::RandomSource;

/// Shrink `c` to at most `requested` randomly chosen elements.
///
/// A container already within the limit is left alone.
pub fn random_resize<C>(c: &mut C, requested: usize)
where
    C: EraseIf + ?Sized,
{
    random_resize_with_rng(c, requested, &mut rand::rng());
}

/// [`random_resize`] with a caller-supplied source.
///
/// Makes exactly one `urand(1, to_process)` draw per element when trimming, and
/// none when `c.len() <= requested`.
pub fn random_resize_with_rng<C, R>(c: &mut C, requested: usize, rng: &mut R)
where
    C: EraseIf + ?Sized,
    R: RandomSource + ?Sized,
{
    let len = c.len();
    if len <= requested {
        return;
    }
    tracing::trace!(len, requested, "random_resize: trimming");

    let mut to_keep = requested;
    let mut to_process = len;
    c.erase_if(|_| {
        let keep = rng.urand(1, to_process) <= to_keep;
        if keep {
            to_keep -= 1;
        }
        to_process -= 1;
        !keep
    });
}

/// Keep only elements matching `pred`, then shrink to `requested`.
///
/// A `requested` of `0` means "no limit": the filtered set is kept whole. Use
/// [`random_resize`] directly to empty a container.
pub fn random_resize_if<C, P>(c: &mut C, pred: P, requested: usize)
where
    C: EraseIf + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    random_resize_if_with_rng(c, pred, requested, &mut rand::rng());
}

/// [`random_resize_if`] with a caller-supplied source.
pub fn random_resize_if_with_rng<C, P, R>(c: &mut C, mut pred: P, requested: usize, rng: &mut R)
where
    C: EraseIf + ?Sized,
    P: FnMut(&C::Item) -> bool,
    R: RandomSource + ?Sized,
{
    c.erase_if(|item| !pred(item));
    if requested != 0 {
        random_resize_with_rng(c, requested, rng);
    }
}

/// Uniformly permute `seq` in place.
pub fn random_shuffle<T>(seq: &mut [T]) {
    random_shuffle_with_rng(seq, &mut rand::rng());
}

/// [`random_shuffle`] with a caller-supplied engine.
pub fn random_shuffle_with_rng<T, R>(seq: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    seq.shuffle(rng);
}
