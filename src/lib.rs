//! `erabu`: randomized selection and trimming over generic containers.
//!
//! A small toolbox for callers that hold a container and a random source and
//! want to pick from it, thin it out, or filter it in place, without caring
//! which std collection it is.
//!
//! Exposed modules:
//! - `source`: the [`RandomSource`] capability (any `rand::Rng` qualifies).
//! - `select`: uniform, filtered-uniform and weighted picks.
//! - `resize`: uniform random trimming to `k` elements (order kept) and shuffling.
//! - `sequence`: stable [`EraseIf`] with compaction and in-place-removal strategies.
//! - `map`: map lookups that normalize stored pointers, multimap pair removal.
//! - `cursor`: a bounds-checked output cursor over a fixed buffer.
//! - `picker`: a seedable engine bundling all of the above.

#![forbid(unsafe_code)]

pub mod cursor;
pub mod map;
pub mod picker;
pub mod resize;
pub mod select;
pub mod sequence;
pub mod source;

pub use cursor::{CheckedBufferCursor, OutOfBounds};
pub use map::{
    map_get_address, map_get_address_mut, map_get_value_ptr, map_get_value_ptr_mut,
    multimap_erase_pair, AddressOrSelf, AddressOrSelfMut, MapLookup, MultimapErasePair,
};
pub use picker::Picker;
pub use resize::{
    random_resize, random_resize_if, random_resize_if_with_rng, random_resize_with_rng,
    random_shuffle, random_shuffle_with_rng,
};
pub use select::{
    select_uniform, select_uniform_if, select_uniform_if_with_rng, select_uniform_with_rng,
    select_weighted, select_weighted_by, select_weighted_by_with_rng, select_weighted_with_rng,
};
pub use sequence::{
    erase_if, erase_if_compacting, erase_if_removing, EraseIf, RemoveInPlace, Sequence, SwapCompact,
};
pub use source::RandomSource;
