//! Map lookup helpers and exact-pair removal for multimaps.
//!
//! Two lookup variants, both returning an address or `None`:
//!
//! - [`map_get_value_ptr`]: the map stores values; you get `&V`.
//! - [`map_get_address`]: the map stores pointers (`&T`, `Box<T>`, `Rc<T>`, ...);
//!   you get `&T` directly instead of `&&T` / `&Box<T>`.
//!
//! Each has a `_mut` form handing out a mutable address, for callers that
//! update the stored value in place.
//!
//! A multimap is a `HashMap<K, Vec<V>>` or `BTreeMap<K, Vec<V>>` bucketed by key.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use crate::sequence::EraseIf;

/// Keyed lookup shared by the std maps.
pub trait MapLookup<K, V> {
    fn lookup(&self, key: &K) -> Option<&V>;

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLookup<K, V> for HashMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }
}

impl<K: Ord, V> MapLookup<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }
}

/// A stored value that already is an address.
///
/// Yields the pointee without adding a level of indirection.
pub trait AddressOrSelf {
    type Target: ?Sized;

    fn address_or_self(&self) -> &Self::Target;
}

impl<T: ?Sized> AddressOrSelf for &T {
    type Target = T;

    fn address_or_self(&self) -> &T {
        self
    }
}

impl<T: ?Sized> AddressOrSelf for &mut T {
    type Target = T;

    fn address_or_self(&self) -> &T {
        self
    }
}

impl<T: ?Sized> AddressOrSelf for Box<T> {
    type Target = T;

    fn address_or_self(&self) -> &T {
        self
    }
}

impl<T: ?Sized> AddressOrSelf for Rc<T> {
    type Target = T;

    fn address_or_self(&self) -> &T {
        self
    }
}

impl<T: ?Sized> AddressOrSelf for Arc<T> {
    type Target = T;

    fn address_or_self(&self) -> &T {
        self
    }
}

/// A stored pointer that allows writing through it.
pub trait AddressOrSelfMut: AddressOrSelf {
    fn address_or_self_mut(&mut self) -> &mut Self::Target;
}

impl<T: ?Sized> AddressOrSelfMut for &mut T {
    fn address_or_self_mut(&mut self) -> &mut T {
        self
    }
}

impl<T: ?Sized> AddressOrSelfMut for Box<T> {
    fn address_or_self_mut(&mut self) -> &mut T {
        self
    }
}

/// Address of the value stored under `key`, or `None`.
pub fn map_get_value_ptr<'m, M, K, V>(map: &'m M, key: &K) -> Option<&'m V>
where
    M: MapLookup<K, V> + ?Sized,
{
    map.lookup(key)
}

/// The pointee of the pointer stored under `key`, or `None`.
pub fn map_get_address<'m, M, K, V>(map: &'m M, key: &K) -> Option<&'m V::Target>
where
    M: MapLookup<K, V> + ?Sized,
    V: AddressOrSelf + 'm,
    V::Target: 'm,
{
    map.lookup(key).map(|v| v.address_or_self())
}

/// Mutable form of [`map_get_value_ptr`].
pub fn map_get_value_ptr_mut<'m, M, K, V>(map: &'m mut M, key: &K) -> Option<&'m mut V>
where
    M: MapLookup<K, V> + ?Sized,
{
    map.lookup_mut(key)
}

/// Mutable form of [`map_get_address`].
pub fn map_get_address_mut<'m, M, K, V>(map: &'m mut M, key: &K) -> Option<&'m mut V::Target>
where
    M: MapLookup<K, V> + ?Sized,
    V: AddressOrSelfMut + 'm,
    V::Target: 'm,
{
    map.lookup_mut(key).map(AddressOrSelfMut::address_or_self_mut)
}

/// Removal of exact `(key, value)` entries from a bucketed multimap.
pub trait MultimapErasePair<K, V> {
    /// Remove every entry under `key` equal to `value`; returns how many went.
    ///
    /// Only the bucket for `key` is visited. Entries under `key` with other
    /// values keep their order; an emptied bucket is dropped.
    fn erase_pair(&mut self, key: &K, value: &V) -> usize;
}

impl<K: Eq + Hash, V: PartialEq, S: BuildHasher> MultimapErasePair<K, V> for HashMap<K, Vec<V>, S> {
    fn erase_pair(&mut self, key: &K, value: &V) -> usize {
        let (erased, emptied) = match self.get_mut(key) {
            Some(bucket) => erase_from_bucket(bucket, value),
            None => return 0,
        };
        if emptied {
            self.remove(key);
        }
        erased
    }
}

impl<K: Ord, V: PartialEq> MultimapErasePair<K, V> for BTreeMap<K, Vec<V>> {
    fn erase_pair(&mut self, key: &K, value: &V) -> usize {
        let (erased, emptied) = match self.get_mut(key) {
            Some(bucket) => erase_from_bucket(bucket, value),
            None => return 0,
        };
        if emptied {
            self.remove(key);
        }
        erased
    }
}

fn erase_from_bucket<V: PartialEq>(bucket: &mut Vec<V>, value: &V) -> (usize, bool) {
    let before = bucket.len();
    bucket.erase_if(|v| v == value);
    (before - bucket.len(), bucket.is_empty())
}

/// Free-function form of [`MultimapErasePair::erase_pair`].
pub fn multimap_erase_pair<M, K, V>(map: &mut M, key: &K, value: &V) -> usize
where
    M: MultimapErasePair<K, V> + ?Sized,
{
    map.erase_pair(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_ptr_points_at_stored_value() {
        let mut map = HashMap::new();
        map.insert("x", 5);

        let found = map_get_value_ptr(&map, &"x").expect("x present");
        assert_eq!(*found, 5);
        assert!(std::ptr::eq(found, &map["x"]));
        assert_eq!(map_get_value_ptr(&map, &"y"), None);
    }

    #[test]
    fn address_variant_strips_the_stored_pointer() {
        let (a, b) = (10u32, 20u32);
        let mut by_ref: BTreeMap<u8, &u32> = BTreeMap::new();
        by_ref.insert(1, &a);
        by_ref.insert(2, &b);

        let got: Option<&u32> = map_get_address(&by_ref, &1);
        assert!(std::ptr::eq(got.expect("present"), &a));
        assert_eq!(map_get_address(&by_ref, &3), None);

        let mut boxed: HashMap<&str, Box<str>> = HashMap::new();
        boxed.insert("name", "keleseth".into());
        let name: Option<&str> = map_get_address(&boxed, &"name");
        assert_eq!(name, Some("keleseth"));

        let shared: BTreeMap<u8, Arc<Vec<u8>>> = [(0, Arc::new(vec![1, 2]))].into_iter().collect();
        assert_eq!(map_get_address(&shared, &0).map(|v| v.len()), Some(2));
        let local: BTreeMap<u8, Rc<i64>> = [(0, Rc::new(-4))].into_iter().collect();
        assert_eq!(map_get_address(&local, &0), Some(&-4));
    }

    #[test]
    fn writes_through_value_ptr_mut_land_in_the_map() {
        let mut map: BTreeMap<&str, u32> = BTreeMap::new();
        map.insert("x", 5);

        if let Some(hp) = map_get_value_ptr_mut(&mut map, &"x") {
            *hp -= 2;
        }
        assert_eq!(map["x"], 3);
        assert!(map_get_value_ptr_mut(&mut map, &"y").is_none());
    }

    #[test]
    fn writes_through_address_mut_reach_the_pointee() {
        let (mut a, mut b) = (1u32, 2u32);
        {
            let mut by_ref: HashMap<u8, &mut u32> = HashMap::new();
            by_ref.insert(0, &mut a);
            by_ref.insert(1, &mut b);

            let slot: Option<&mut u32> = map_get_address_mut(&mut by_ref, &1);
            *slot.expect("present") = 20;
            assert!(map_get_address_mut(&mut by_ref, &7).is_none());
        }
        assert_eq!((a, b), (1, 20));

        let mut boxed: BTreeMap<u8, Box<Vec<u8>>> = BTreeMap::new();
        boxed.insert(0, Box::new(vec![1]));
        map_get_address_mut(&mut boxed, &0).expect("present").push(2);
        assert_eq!(*boxed[&0], vec![1, 2]);
    }

    #[test]
    fn erase_pair_only_removes_exact_matches() {
        let mut mm: BTreeMap<char, Vec<u32>> = BTreeMap::new();
        mm.insert('a', vec![1, 2, 1]);
        mm.insert('b', vec![3]);

        assert_eq!(multimap_erase_pair(&mut mm, &'a', &1), 2);
        assert_eq!(mm.get(&'a'), Some(&vec![2]));
        assert_eq!(mm.get(&'b'), Some(&vec![3]));
    }

    #[test]
    fn erase_pair_drops_emptied_bucket() {
        let mut mm: HashMap<&str, Vec<&str>> = HashMap::new();
        mm.insert("boss", vec!["add", "add"]);
        mm.insert("trash", vec!["add"]);

        assert_eq!(mm.erase_pair(&"boss", &"add"), 2);
        assert!(!mm.contains_key("boss"));
        assert_eq!(mm.get("trash"), Some(&vec!["add"]));
    }

    #[test]
    fn erase_pair_missing_key_or_value_is_zero() {
        let mut mm: HashMap<u8, Vec<u8>> = HashMap::new();
        mm.insert(1, vec![4, 5, 6]);
        assert_eq!(mm.erase_pair(&2, &4), 0);
        assert_eq!(mm.erase_pair(&1, &9), 0);
        assert_eq!(mm[&1], vec![4, 5, 6]);
    }

    #[test]
    fn erase_pair_keeps_order_of_the_rest() {
        let mut mm: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
        mm.insert(0, vec![9, 1, 8, 1, 7]);
        mm.erase_pair(&0, &1);
        assert_eq!(mm[&0], vec![9, 8, 7]);
    }
}
