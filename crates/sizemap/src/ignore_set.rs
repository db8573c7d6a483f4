use rustc_hash::FxHashSet;
use sizemap_common::ModuleIdx;
use sizemap_utils::{indexmap::FxIndexSet, rustc_hash::FxHashSetExt};

use crate::{ModuleGraph, TransitiveClosure};

/// Modules excluded from every size sum, without changing what is reachable.
///
/// Ignoring a module also ignores its whole static closure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
  explicit: FxIndexSet<ModuleIdx>,
  expanded: FxHashSet<ModuleIdx>,
}

impl IgnoreSet {
  pub fn expand(
    closure: &mut TransitiveClosure<'_>,
    ignored: impl IntoIterator<Item = ModuleIdx>,
  ) -> Self {
    let explicit = ignored.into_iter().collect::<FxIndexSet<_>>();
    let mut expanded = FxHashSet::with_capacity(explicit.len());
    for &idx in &explicit {
      expanded.insert(idx);
      expanded.extend(closure.closure_of(idx).iter().copied());
    }
    Self { explicit, expanded }
  }

  /// The modules the caller asked to ignore, in request order.
  pub fn explicit(&self) -> &FxIndexSet<ModuleIdx> {
    &self.explicit
  }

  pub fn contains(&self, idx: ModuleIdx) -> bool {
    self.expanded.contains(&idx)
  }

  pub fn is_empty(&self) -> bool {
    self.expanded.is_empty()
  }

  /// Size of the expanded set, closures included.
  pub fn len(&self) -> usize {
    self.expanded.len()
  }

  /// What `idx` contributes to a sum: its self size, or nothing when ignored.
  pub fn attributed_size(&self, graph: &ModuleGraph, idx: ModuleIdx) -> u64 {
    if self.contains(idx) { 0 } else { graph.self_size(idx) }
  }
}
