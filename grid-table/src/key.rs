#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

/// Row height measurements indexed by row key.
#[cfg(feature = "std")]
pub(crate) type RowSizeMap<K> = HashMap<K, u32>;
#[cfg(not(feature = "std"))]
pub(crate) type RowSizeMap<K> = BTreeMap<K, u32>;

#[cfg(feature = "std")]
pub(crate) type RowKeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type RowKeySet<K> = BTreeSet<K>;

/// Bound for row key types.
///
/// With `std` this is `Hash + Eq`; without it keys live in ordered collections and must be `Ord`.
#[cfg(feature = "std")]
pub trait TableKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> TableKey for K {}

#[cfg(not(feature = "std"))]
pub trait TableKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> TableKey for K {}
