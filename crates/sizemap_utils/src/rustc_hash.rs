use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// `HashMap::with_capacity` is only defined for the default hasher.
pub trait FxHashMapExt {
  fn with_capacity(capacity: usize) -> Self;
}

impl<K: Eq + Hash, V> FxHashMapExt for FxHashMap<K, V> {
  fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
  }
}

pub trait FxHashSetExt {
  fn with_capacity(capacity: usize) -> Self;
}

impl<T: Eq + Hash> FxHashSetExt for FxHashSet<T> {
  fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
  }
}

#[test]
fn test_with_capacity() {
  let map = <FxHashMap<u32, u32> as FxHashMapExt>::with_capacity(16);
  assert!(map.capacity() >= 16);
  let set = <FxHashSet<u32> as FxHashSetExt>::with_capacity(16);
  assert!(set.capacity() >= 16);
}
