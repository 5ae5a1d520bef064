//! Stable conditional removal.
//!
//! [`EraseIf`] removes every element matching a predicate while survivors keep
//! their relative order. Two strategies sit behind it:
//!
//! - [`SwapCompact`]: indexed storage (`Vec`, `VecDeque`). Survivors are swapped
//!   down into a write slot, then the tail is truncated. O(n) swaps, O(1) space.
//! - [`RemoveInPlace`]: node storage (`LinkedList`, `BTreeSet`, `HashSet`).
//!   Matching elements are unlinked where they stand.
//!
//! Maps are sequences of `(K, V)` pairs and take the removal strategy too. The
//! predicate sees each entry as `&(K, V)`, so a map is rebuilt from its
//! surviving entries rather than edited through `retain`.
//!
//! Each container's `EraseIf` impl fixes its strategy at compile time; both
//! give the same observable result. The predicate runs exactly once per
//! element, in iteration order, which is what lets `resize` drive a one-pass
//! reservoir draw through it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A finite collection with a known length.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Order-preserving removal by predicate.
pub trait EraseIf: Sequence {
    /// Remove every element for which `pred` returns `true`.
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&Self::Item) -> bool;
}

/// Storage whose elements can be addressed by position and exchanged.
pub trait SwapCompact: Sequence {
    fn item_at(&self, index: usize) -> &Self::Item;

    fn swap_items(&mut self, a: usize, b: usize);

    /// Drop everything from `len` onwards.
    fn truncate_to(&mut self, len: usize);
}

/// Storage that can unlink matching elements without relocating the rest.
pub trait RemoveInPlace: Sequence {
    fn remove_matching<P>(&mut self, pred: P)
    where
        P: FnMut(&Self::Item) -> bool;
}

/// Two-cursor compaction.
pub fn erase_if_compacting<C, P>(c: &mut C, mut pred: P)
where
    C: SwapCompact + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let len = c.len();
    let mut write = 0;
    for read in 0..len {
        if !pred(c.item_at(read)) {
            if read != write {
                c.swap_items(read, write);
            }
            write += 1;
        }
    }
    c.truncate_to(write);
}

/// Direct removal at each matching position.
pub fn erase_if_removing<C, P>(c: &mut C, pred: P)
where
    C: RemoveInPlace + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    c.remove_matching(pred);
}

/// Free-function form of [`EraseIf::erase_if`].
pub fn erase_if<C, P>(c: &mut C, pred: P)
where
    C: EraseIf + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    c.erase_if(pred);
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> SwapCompact for Vec<T> {
    fn item_at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn truncate_to(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}

impl<T> RemoveInPlace for Vec<T> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        let mut i = 0;
        while i < Vec::len(self) {
            if pred(&self[i]) {
                Vec::remove(self, i);
            } else {
                i += 1;
            }
        }
    }
}

impl<T> EraseIf for Vec<T> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        erase_if_compacting(self, pred);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> SwapCompact for VecDeque<T> {
    fn item_at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn truncate_to(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }
}

impl<T> RemoveInPlace for VecDeque<T> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        let mut i = 0;
        while i < VecDeque::len(self) {
            if pred(&self[i]) {
                VecDeque::remove(self, i);
            } else {
                i += 1;
            }
        }
    }
}

impl<T> EraseIf for VecDeque<T> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        erase_if_compacting(self, pred);
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> RemoveInPlace for LinkedList<T> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        // Nodes are relinked, never moved; survivors come back in order.
        let mut rest = std::mem::take(self);
        while let Some(item) = rest.pop_front() {
            if !pred(&item) {
                self.push_back(item);
            }
        }
    }
}

impl<T> EraseIf for LinkedList<T> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        erase_if_removing(self, pred);
    }
}

impl<T: Ord> Sequence for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<T: Ord> RemoveInPlace for BTreeSet<T> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(|item| !pred(item));
    }
}

impl<T: Ord> EraseIf for BTreeSet<T> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        erase_if_removing(self, pred);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Sequence for HashSet<T, S> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher> RemoveInPlace for HashSet<T, S> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(|item| !pred(item));
    }
}

impl<T: Eq + Hash, S: BuildHasher> EraseIf for HashSet<T, S> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        erase_if_removing(self, pred);
    }
}

impl<K: Ord, V> Sequence for BTreeMap<K, V> {
    type Item = (K, V);

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Ord, V> RemoveInPlace for BTreeMap<K, V> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&(K, V)) -> bool,
    {
        // Entries come out sorted, so collecting them back is a linear bulk build.
        *self = std::mem::take(self)
            .into_iter()
            .filter(|entry| !pred(entry))
            .collect();
    }
}

impl<K: Ord, V> EraseIf for BTreeMap<K, V> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&(K, V)) -> bool,
    {
        erase_if_removing(self, pred);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Sequence for HashMap<K, V, S> {
    type Item = (K, V);

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Clone> RemoveInPlace for HashMap<K, V, S> {
    fn remove_matching<P>(&mut self, mut pred: P)
    where
        P: FnMut(&(K, V)) -> bool,
    {
        let hasher = self.hasher().clone();
        let entries = std::mem::replace(self, HashMap::with_hasher(hasher));
        self.extend(entries.into_iter().filter(|entry| !pred(entry)));
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Clone> EraseIf for HashMap<K, V, S> {
    fn erase_if<P>(&mut self, pred: P)
    where
        P: FnMut(&(K, V)) -> bool,
    {
        erase_if_removing(self, pred);
    }
}
