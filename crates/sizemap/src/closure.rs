use rustc_hash::{FxHashMap, FxHashSet};
use sizemap_common::ModuleIdx;
use sizemap_utils::indexmap::FxIndexSet;

use crate::ModuleGraph;

struct Frame {
  idx: ModuleIdx,
  next_dependency: usize,
  dependencies: FxIndexSet<ModuleIdx>,
}

impl Frame {
  fn new(idx: ModuleIdx) -> Self {
    Self { idx, next_dependency: 0, dependencies: FxIndexSet::default() }
  }
}

/// Memoized static-import closures.
///
/// A closure is computed depth first, with one `visited` set per top-level request. Reaching a
/// module that is still being expanded contributes the module itself but none of its
/// dependencies, which is what stops cycles. Results are memoized by module only, so for cyclic
/// graphs the closure of a module can depend on which module was asked for first.
pub struct TransitiveClosure<'g> {
  graph: &'g ModuleGraph,
  memo: FxHashMap<ModuleIdx, FxIndexSet<ModuleIdx>>,
}

impl<'g> TransitiveClosure<'g> {
  pub fn new(graph: &'g ModuleGraph) -> Self {
    Self { graph, memo: FxHashMap::default() }
  }

  /// All modules statically reachable from `idx`, never including `idx` itself.
  pub fn closure_of(&mut self, idx: ModuleIdx) -> &FxIndexSet<ModuleIdx> {
    if !self.memo.contains_key(&idx) {
      self.compute(idx);
    }
    &self.memo[&idx]
  }

  pub fn memoized_len(&self) -> usize {
    self.memo.len()
  }

  fn compute(&mut self, root: ModuleIdx) {
    let graph = self.graph;
    let mut visited = FxHashSet::default();
    visited.insert(root);
    let mut stack = vec![Frame::new(root)];

    while let Some(frame) = stack.last_mut() {
      let dependencies = graph.dependencies(frame.idx);

      if let Some(&dep) = dependencies.get(frame.next_dependency) {
        frame.next_dependency += 1;
        frame.dependencies.insert(dep);
        if let Some(memoized) = self.memo.get(&dep) {
          frame.dependencies.extend(memoized.iter().copied());
        } else if visited.insert(dep) {
          stack.push(Frame::new(dep));
        }
      } else if let Some(Frame { idx, mut dependencies, .. }) = stack.pop() {
        dependencies.shift_remove(&idx);
        if let Some(parent) = stack.last_mut() {
          parent.dependencies.extend(dependencies.iter().copied());
        }
        tracing::trace!(
          "Closure of `{}` holds {} modules",
          graph.module(idx).id,
          dependencies.len()
        );
        self.memo.insert(idx, dependencies);
      }
    }
  }
}
