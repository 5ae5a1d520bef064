//! Random element selection.
//!
//! A "sequence" here is anything iterable: `&Vec<T>`, `&[T]`, `&VecDeque<T>`,
//! `&BTreeSet<T>`, `&HashMap<K, V>`, ... The selected element is whatever the
//! iterator yields (usually a reference), and a filtered pick that finds
//! nothing returns `None`.
//!
//! - [`select_uniform`]: each element with probability `1/len`.
//! - [`select_uniform_if`]: uniform among elements matching a predicate.
//! - [`select_weighted`]: explicit weight vector, one weight per element.
//! - [`select_weighted_by`]: weights computed by a function; an all-zero (or
//!   negative-sum) weighting falls back to uniform instead of failing.
//!
//! Every function has a `*_with_rng` form taking any [`RandomSource`]; the plain
//! form draws from `rand::rng()`.

use crate::source::RandomSource;

/// Pick one element uniformly at random.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn select_uniform<I>(seq: I) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    select_uniform_with_rng(seq, &mut rand::rng())
}

/// [`select_uniform`] with a caller-supplied source.
pub fn select_uniform_with_rng<I, R>(seq: I, rng: &mut R) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: RandomSource + ?Sized,
{
    let it = seq.into_iter();
    let len = it.len();
    assert!(len > 0, "select_uniform: sequence must be non-empty");
    let idx = rng.urand(0, len - 1);
    nth_or_panic(it, idx, "select_uniform")
}

/// Pick uniformly among the elements satisfying `pred`.
///
/// Returns `None` when no element matches; no draw is made in that case.
pub fn select_uniform_if<I, P>(seq: I, pred: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    select_uniform_if_with_rng(seq, pred, &mut rand::rng())
}

/// [`select_uniform_if`] with a caller-supplied source.
pub fn select_uniform_if_with_rng<I, P, R>(seq: I, pred: P, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    R: RandomSource + ?Sized,
{
    let mut matching: Vec<I::Item> = seq.into_iter().filter(pred).collect();
    if matching.is_empty() {
        return None;
    }
    let idx = rng.urand(0, matching.len() - 1);
    Some(matching.swap_remove(idx))
}

/// Pick one element with probability proportional to its weight.
///
/// `weights[i]` belongs to the `i`-th element in iteration order.
///
/// # Panics
///
/// Panics if `seq` is empty, if `weights.len()` differs from the sequence
/// length, or if the weights are not a valid distribution (see
/// [`RandomSource::urand_weighted`]). Checking that the weights sum to more
/// than zero is the caller's job; [`select_weighted_by`] does it for you.
pub fn select_weighted<I>(seq: I, weights: &[f64]) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    select_weighted_with_rng(seq, weights, &mut rand::rng())
}

/// [`select_weighted`] with a caller-supplied source.
pub fn select_weighted_with_rng<I, R>(seq: I, weights: &[f64], rng: &mut R) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: RandomSource + ?Sized,
{
    let it = seq.into_iter();
    let len = it.len();
    assert!(len > 0, "select_weighted: sequence must be non-empty");
    assert_eq!(
        weights.len(),
        len,
        "select_weighted: expected one weight per element"
    );
    let idx = rng.urand_weighted(weights);
    nth_or_panic(it, idx, "select_weighted")
}

/// Pick one element with probability proportional to `weight_fn(element)`.
///
/// If the weights sum to `<= 0`, every weight is replaced by `1.0` and the
/// draw is uniform.
///
/// # Panics
///
/// Panics if `seq` is empty, or if a mix of positive and invalid (negative,
/// NaN) weights makes the distribution unusable.
pub fn select_weighted_by<I, F>(seq: I, weight_fn: F) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator + Clone,
    F: FnMut(&I::Item) -> f64,
{
    select_weighted_by_with_rng(seq, weight_fn, &mut rand::rng())
}

/// [`select_weighted_by`] with a caller-supplied source.
pub fn select_weighted_by_with_rng<I, F, R>(seq: I, mut weight_fn: F, rng: &mut R) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator + Clone,
    F: FnMut(&I::Item) -> f64,
    R: RandomSource + ?Sized,
{
    let it = seq.into_iter();
    let len = it.len();

    let mut weights = Vec::with_capacity(len);
    let mut sum = 0.0;
    for item in it.clone() {
        let w = weight_fn(&item);
        weights.push(w);
        sum += w;
    }

    if sum <= 0.0 {
        tracing::debug!(
            len,
            sum,
            "select_weighted_by: degenerate weights, using uniform"
        );
        weights.clear();
        weights.resize(len, 1.0);
    }

    select_weighted_with_rng(it, &weights, rng)
}

fn nth_or_panic<It: Iterator>(mut it: It, idx: usize, op: &str) -> It::Item {
    match it.nth(idx) {
        Some(item) => item,
        None => panic!("{op}: iterator ended before index {idx}"),
    }
}
