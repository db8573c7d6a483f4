use rustc_hash::{FxHashMap, FxHashSet};
use sizemap_common::{ModuleIdx, ModulePath};
use sizemap_error::SizeResult;
use sizemap_utils::indexmap::FxIndexSet;

use crate::{IgnoreSet, ModuleGraph, ReachabilityWalker, TransitiveClosure};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
  pub total: usize,
  pub unique: usize,
  pub removed: usize,
  pub closures: usize,
}

/// Computes the size metrics of one graph under one ignore set.
///
/// Every cache lives here and only here. Changing the ignore set means building a new
/// attributor, see [`SizeAttributor::with_ignored`], so totals computed under another set are
/// never observed.
pub struct SizeAttributor<'g> {
  graph: &'g ModuleGraph,
  closure: TransitiveClosure<'g>,
  ignored: IgnoreSet,
  total_cache: FxHashMap<ModuleIdx, u64>,
  unique_cache: FxHashMap<(ModuleIdx, ModulePath), u64>,
  removed_cache: FxHashMap<(ModuleIdx, ModuleIdx), u64>,
}

impl<'g> SizeAttributor<'g> {
  pub fn new(graph: &'g ModuleGraph) -> Self {
    Self::with_ignored(graph, std::iter::empty())
  }

  pub fn with_ignored(
    graph: &'g ModuleGraph,
    ignored: impl IntoIterator<Item = ModuleIdx>,
  ) -> Self {
    let mut closure = TransitiveClosure::new(graph);
    let ignored = IgnoreSet::expand(&mut closure, ignored);
    Self {
      graph,
      closure,
      ignored,
      total_cache: FxHashMap::default(),
      unique_cache: FxHashMap::default(),
      removed_cache: FxHashMap::default(),
    }
  }

  /// Resolves ids first, failing on the first unknown one.
  pub fn with_ignored_ids<S: AsRef<str>>(graph: &'g ModuleGraph, ids: &[S]) -> SizeResult<Self> {
    let ignored = ids.iter().map(|id| graph.idx_of(id.as_ref())).collect::<SizeResult<Vec<_>>>()?;
    Ok(Self::with_ignored(graph, ignored))
  }

  pub fn graph(&self) -> &'g ModuleGraph {
    self.graph
  }

  pub fn ignored(&self) -> &IgnoreSet {
    &self.ignored
  }

  pub fn is_ignored(&self, idx: ModuleIdx) -> bool {
    self.ignored.contains(idx)
  }

  pub fn cache_stats(&self) -> CacheStats {
    CacheStats {
      total: self.total_cache.len(),
      unique: self.unique_cache.len(),
      removed: self.removed_cache.len(),
      closures: self.closure.memoized_len(),
    }
  }

  /// The module's own bytes, regardless of the ignore set.
  pub fn self_size(&self, idx: ModuleIdx) -> u64 {
    self.graph.self_size(idx)
  }

  pub fn closure_of(&mut self, idx: ModuleIdx) -> &FxIndexSet<ModuleIdx> {
    self.closure.closure_of(idx)
  }

  /// Own size plus the size of every module in the static closure, ignored modules counting 0.
  pub fn total(&mut self, idx: ModuleIdx) -> u64 {
    if let Some(&size) = self.total_cache.get(&idx) {
      return size;
    }

    let (graph, ignored) = (self.graph, &self.ignored);
    let dependencies = self.closure.closure_of(idx);
    let size = ignored.attributed_size(graph, idx)
      + dependencies
        .iter()
        .filter(|&&dep| dep != idx)
        .map(|&dep| ignored.attributed_size(graph, dep))
        .sum::<u64>();

    self.total_cache.insert(idx, size);
    size
  }

  /// Bytes reachable from the terminal module of `path` that `entry` would lose if exactly this
  /// path were cut. Other routes to the same modules stay intact.
  pub fn unique(&mut self, entry: ModuleIdx, path: &ModulePath) -> u64 {
    let key = (entry, path.clone());
    if let Some(&size) = self.unique_cache.get(&key) {
      return size;
    }

    let walker = ReachabilityWalker::new(self.graph);
    let forbidden = path.as_slice();
    let below = walker.walk(path.terminal()).map(|p| p.terminal()).collect::<FxIndexSet<_>>();
    let kept =
      walker.walk_with(entry, |candidate| candidate != forbidden).map(|p| p.terminal()).collect();
    let size = self.lost_size(&below, &kept);

    tracing::trace!("unique({entry:?}, {path:?}) = {size}");
    self.unique_cache.insert(key, size);
    size
  }

  /// Bytes that become unreachable from `entry` if `module` is deleted, whichever route leads
  /// to it.
  pub fn removed(&mut self, entry: ModuleIdx, module: ModuleIdx) -> u64 {
    if let Some(&size) = self.removed_cache.get(&(entry, module)) {
      return size;
    }

    let walker = ReachabilityWalker::new(self.graph);
    let below = walker.walk(module).map(|p| p.terminal()).collect::<FxIndexSet<_>>();
    let kept = walker
      .walk_with(entry, |candidate| candidate.last() != Some(&module))
      .map(|p| p.terminal())
      .collect();
    let size = self.lost_size(&below, &kept);

    tracing::trace!("removed({entry:?}, {module:?}) = {size}");
    self.removed_cache.insert((entry, module), size);
    size
  }

  pub fn total_of(&mut self, id: &str) -> SizeResult<u64> {
    let idx = self.graph.idx_of(id)?;
    Ok(self.total(idx))
  }

  pub fn unique_of<S: AsRef<str>>(&mut self, entry: &str, path: &[S]) -> SizeResult<u64> {
    let entry = self.graph.idx_of(entry)?;
    let path = self.graph.resolve_path(path)?;
    Ok(self.unique(entry, &path))
  }

  pub fn removed_of(&mut self, entry: &str, module: &str) -> SizeResult<u64> {
    let entry = self.graph.idx_of(entry)?;
    let module = self.graph.idx_of(module)?;
    Ok(self.removed(entry, module))
  }

  fn lost_size(&self, below: &FxIndexSet<ModuleIdx>, kept: &FxHashSet<ModuleIdx>) -> u64 {
    below
      .iter()
      .filter(|&&idx| !kept.contains(&idx))
      .map(|&idx| self.ignored.attributed_size(self.graph, idx))
      .sum()
  }
}
