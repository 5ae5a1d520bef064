use erabu::sequence::{erase_if_compacting, erase_if_removing};
use erabu::{
    random_resize_if_with_rng, random_resize_with_rng, select_uniform_if_with_rng, EraseIf,
    Picker,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeSet, LinkedList, VecDeque};

fn is_subsequence(sub: &[usize], of: &[usize]) -> bool {
    let mut it = of.iter();
    sub.iter().all(|x| it.any(|y| y == x))
}

proptest! {
    #[test]
    fn prop_erase_if_strategies_agree(
        items in prop::collection::vec(0u32..50, 0..60),
        cut in 0u32..50,
    ) {
        let pred = |x: &u32| *x < cut;
        let expected: Vec<u32> = items.iter().copied().filter(|x| !pred(x)).collect();

        let mut compacted = items.clone();
        erase_if_compacting(&mut compacted, pred);
        let mut removed = items.clone();
        erase_if_removing(&mut removed, pred);
        let mut deque: VecDeque<u32> = items.iter().copied().collect();
        deque.erase_if(pred);
        let mut list: LinkedList<u32> = items.iter().copied().collect();
        list.erase_if(pred);

        prop_assert_eq!(&compacted, &expected);
        prop_assert_eq!(&removed, &expected);
        prop_assert_eq!(deque.into_iter().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_erase_if_on_sets_matches_filter(
        items in prop::collection::btree_set(0u32..200, 0..60),
    ) {
        let mut set: BTreeSet<u32> = items.clone();
        set.erase_if(|x| x % 3 == 0);
        let expected: BTreeSet<u32> = items.into_iter().filter(|x| x % 3 != 0).collect();
        prop_assert_eq!(set, expected);
    }

    #[test]
    fn prop_random_resize_keeps_min_n_k_in_order(
        n in 0usize..80,
        k in 0usize..100,
        seed in any::<u64>(),
    ) {
        let original: Vec<usize> = (0..n).collect();
        let mut v = original.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        random_resize_with_rng(&mut v, k, &mut rng);

        prop_assert_eq!(v.len(), n.min(k));
        prop_assert!(is_subsequence(&v, &original));
        if n <= k {
            prop_assert_eq!(v, original);
        }
    }

    #[test]
    fn prop_filtered_resize(
        n in 0usize..80,
        k in 0usize..20,
        modulus in 1usize..5,
        seed in any::<u64>(),
    ) {
        let original: Vec<usize> = (0..n).collect();
        let filtered: Vec<usize> = original.iter().copied().filter(|x| x % modulus == 0).collect();
        let mut v = original.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        random_resize_if_with_rng(&mut v, |x| x % modulus == 0, k, &mut rng);

        if k == 0 {
            prop_assert_eq!(v, filtered);
        } else {
            prop_assert_eq!(v.len(), filtered.len().min(k));
            prop_assert!(is_subsequence(&v, &filtered));
        }
    }

    #[test]
    fn prop_uniform_if_returns_a_match(
        items in prop::collection::vec(0u32..20, 0..40),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hit = select_uniform_if_with_rng(&items, |x| **x % 4 == 0, &mut rng);
        match hit {
            Some(x) => prop_assert!(*x % 4 == 0),
            None => prop_assert!(items.iter().all(|x| x % 4 != 0)),
        }
    }

    #[test]
    fn prop_picker_pick_is_a_member(
        items in prop::collection::vec(any::<i16>(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut p = Picker::new().with_seed(seed);
        let x = p.pick(&items);
        prop_assert!(items.contains(x));
    }
}
