use rustc_hash::FxHashSet;
use sizemap_common::{ModuleIdx, ModulePath};

use crate::ModuleGraph;

pub type AllowAll = fn(&[ModuleIdx]) -> bool;

fn allow_all(_: &[ModuleIdx]) -> bool {
  true
}

/// Creates depth-first traversals over static imports.
#[derive(Debug, Clone, Copy)]
pub struct ReachabilityWalker<'g> {
  graph: &'g ModuleGraph,
}

impl<'g> ReachabilityWalker<'g> {
  pub fn new(graph: &'g ModuleGraph) -> Self {
    Self { graph }
  }

  pub fn walk(&self, start: ModuleIdx) -> Walk<'g, AllowAll> {
    self.walk_with(start, allow_all as AllowAll)
  }

  /// Like [`Self::walk`], but a path is only followed if `allow` accepts it. The check runs on
  /// the starting path too, so rejecting `[start]` yields an empty walk.
  pub fn walk_with<F>(&self, start: ModuleIdx, allow: F) -> Walk<'g, F>
  where
    F: Fn(&[ModuleIdx]) -> bool,
  {
    let root = ModulePath::new(start);
    let stack = if allow(root.as_slice()) { vec![root] } else { Vec::new() };
    Walk { graph: self.graph, allow, stack, visited: FxHashSet::default() }
  }
}

/// A single traversal. Every module is yielded at most once, together with the path through
/// which it was first reached.
#[derive(Clone)]
pub struct Walk<'g, F> {
  graph: &'g ModuleGraph,
  allow: F,
  stack: Vec<ModulePath>,
  visited: FxHashSet<ModuleIdx>,
}

impl<F> Iterator for Walk<'_, F>
where
  F: Fn(&[ModuleIdx]) -> bool,
{
  type Item = ModulePath;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(path) = self.stack.pop() {
      let module = path.terminal();
      if !self.visited.insert(module) {
        continue;
      }

      // Reversed so that imports are yielded in declaration order.
      for &dep in self.graph.dependencies(module).iter().rev() {
        if self.visited.contains(&dep) {
          continue;
        }
        let next = path.extended(dep);
        if (self.allow)(next.as_slice()) {
          self.stack.push(next);
        }
      }

      return Some(path);
    }
    None
  }
}
