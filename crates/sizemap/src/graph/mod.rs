mod entry_points;

use oxc_index::{IndexVec, index_vec};
use rustc_hash::FxHashMap;
use sizemap_common::{ImporterRecord, ModuleId, ModuleIdx, ModulePath, ModuleRecord};
use sizemap_error::{SizeError, SizeResult};
use sizemap_utils::{indexmap::FxIndexMap, rustc_hash::FxHashMapExt};

use crate::types::{IndexDependencies, IndexImporters, IndexModules};

/// An immutable snapshot of the module list, stored as an arena plus an id index.
///
/// Edges are resolved to [`ModuleIdx`] once, here. Edges naming an id that is not part of the
/// snapshot are dropped, so no traversal ever has to deal with them.
#[derive(Debug)]
pub struct ModuleGraph {
  modules: IndexModules,
  id_to_idx: FxHashMap<ModuleId, ModuleIdx>,
  dependencies: IndexDependencies,
  importers: IndexImporters,
  dangling_edge_count: usize,
}

impl ModuleGraph {
  pub fn new(records: Vec<ModuleRecord>) -> Self {
    let record_count = records.len();
    let mut unique_records = FxIndexMap::default();
    for record in records {
      if let Some(previous) = unique_records.insert(record.id.clone(), record) {
        tracing::warn!(
          "Module `{}` is listed more than once, keeping the last record",
          previous.id
        );
      }
    }

    let modules = unique_records.into_values().collect::<IndexModules>();
    let mut id_to_idx = FxHashMap::with_capacity(modules.len());
    for (idx, module) in modules.iter_enumerated() {
      id_to_idx.insert(module.id.clone(), idx);
    }

    let mut dependencies = IndexVec::with_capacity(modules.len());
    let mut importers: IndexImporters = index_vec![Vec::new(); modules.len()];
    let mut dangling_edge_count = 0;

    for (idx, module) in modules.iter_enumerated() {
      let mut deps = Vec::with_capacity(module.imported_ids.len());
      for (kind, id) in module.iter_import_ids() {
        let Some(&target) = id_to_idx.get(id) else {
          tracing::trace!("Skipping dangling {kind} edge `{}` -> `{id}`", module.id);
          dangling_edge_count += 1;
          continue;
        };
        if kind.is_static() {
          deps.push(target);
        }
        let record = ImporterRecord { kind, importer: idx };
        if !importers[target].contains(&record) {
          importers[target].push(record);
        }
      }
      dependencies.push(deps);
    }

    tracing::debug!(
      "Indexed {} modules ({} records, {} dangling edges)",
      modules.len(),
      record_count,
      dangling_edge_count
    );

    Self { modules, id_to_idx, dependencies, importers, dangling_edge_count }
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn modules(&self) -> &IndexModules {
    &self.modules
  }

  pub fn module(&self, idx: ModuleIdx) -> &ModuleRecord {
    &self.modules[idx]
  }

  /// Number of import edges whose target is not part of this snapshot.
  pub fn dangling_edge_count(&self) -> usize {
    self.dangling_edge_count
  }

  /// Lenient lookup, for callers that treat a missing id as "nothing to do".
  pub fn get(&self, id: &str) -> Option<ModuleIdx> {
    self.id_to_idx.get(id).copied()
  }

  pub fn idx_of(&self, id: &str) -> SizeResult<ModuleIdx> {
    self.get(id).ok_or_else(|| SizeError::ModuleNotFound(id.to_string()))
  }

  pub fn lookup(&self, id: &str) -> SizeResult<&ModuleRecord> {
    self.idx_of(id).map(|idx| &self.modules[idx])
  }

  /// Static imports of `idx` that resolve inside the snapshot, in declaration order.
  pub fn dependencies(&self, idx: ModuleIdx) -> &[ModuleIdx] {
    &self.dependencies[idx]
  }

  pub fn self_size(&self, idx: ModuleIdx) -> u64 {
    self.modules[idx].self_size()
  }

  /// Resolves caller-supplied ids into a path, checking that every step is a static import.
  pub fn resolve_path<S: AsRef<str>>(&self, ids: &[S]) -> SizeResult<ModulePath> {
    let modules = ids.iter().map(|id| self.idx_of(id.as_ref())).collect::<SizeResult<Vec<_>>>()?;

    for pair in modules.windows(2) {
      let (importer, imported) = (pair[0], pair[1]);
      if !self.dependencies[importer].contains(&imported) {
        return Err(SizeError::BrokenPath {
          importer: self.modules[importer].id.to_string(),
          imported: self.modules[imported].id.to_string(),
        });
      }
    }

    ModulePath::from_vec(modules).ok_or(SizeError::EmptyPath)
  }
}
