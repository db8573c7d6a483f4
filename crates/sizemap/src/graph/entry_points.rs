use itertools::Itertools;
use sizemap_common::{ImporterRecord, ModuleIdx, ModuleRecord};

use super::ModuleGraph;

impl ModuleGraph {
  /// Incoming edges of `idx`, static and dynamic, one record per (importer, kind).
  pub fn importers(&self, idx: ModuleIdx) -> &[ImporterRecord] {
    &self.importers[idx]
  }

  /// Every module that imports `idx` at least once, in any way.
  pub fn importer_modules(&self, idx: ModuleIdx) -> impl Iterator<Item = &ModuleRecord> {
    self.importers[idx].iter().map(|record| record.importer).unique().map(|idx| &self.modules[idx])
  }

  /// A module nobody imports is a root of the graph.
  pub fn is_entry_point(&self, idx: ModuleIdx) -> bool {
    self.importers[idx].is_empty()
  }

  pub fn entry_points(&self) -> Vec<ModuleIdx> {
    self.modules.indices().filter(|&idx| self.is_entry_point(idx)).collect()
  }

  /// Modules that are only ever reached through `import()`, i.e. the roots of lazy chunks.
  pub fn dynamic_entry_points(&self) -> Vec<ModuleIdx> {
    self
      .modules
      .indices()
      .filter(|&idx| {
        let importers = &self.importers[idx];
        !importers.is_empty() && importers.iter().all(|record| !record.kind.is_static())
      })
      .collect()
  }
}
