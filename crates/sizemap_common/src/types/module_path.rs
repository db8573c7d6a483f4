use std::ops::Deref;

use crate::ModuleIdx;

/// One route through the graph, from an entry point to its terminal module.
///
/// Identity is the whole ordered sequence: two paths ending at the same module are different
/// paths. A path is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath(Vec<ModuleIdx>);

impl ModulePath {
  pub fn new(start: ModuleIdx) -> Self {
    Self(vec![start])
  }

  /// Returns `None` for an empty sequence.
  pub fn from_vec(modules: Vec<ModuleIdx>) -> Option<Self> {
    if modules.is_empty() { None } else { Some(Self(modules)) }
  }

  pub fn entry(&self) -> ModuleIdx {
    self.0[0]
  }

  /// The chokepoint: the module this path leads to.
  pub fn terminal(&self) -> ModuleIdx {
    self.0[self.0.len() - 1]
  }

  pub fn as_slice(&self) -> &[ModuleIdx] {
    &self.0
  }

  #[must_use]
  pub fn extended(&self, next: ModuleIdx) -> Self {
    let mut modules = Vec::with_capacity(self.0.len() + 1);
    modules.extend_from_slice(&self.0);
    modules.push(next);
    Self(modules)
  }
}

impl Deref for ModulePath {
  type Target = [ModuleIdx];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use crate::ModuleIdx;

  use super::ModulePath;

  #[test]
  fn extending_keeps_the_original_path() {
    let a = ModuleIdx::from_usize(0);
    let b = ModuleIdx::from_usize(1);
    let root = ModulePath::new(a);
    let child = root.extended(b);
    assert_eq!(&*root, [a]);
    assert_eq!(&*child, [a, b]);
    assert_eq!(child.entry(), a);
    assert_eq!(child.terminal(), b);
  }

  #[test]
  fn empty_paths_are_rejected() {
    assert!(ModulePath::from_vec(Vec::new()).is_none());
  }
}
