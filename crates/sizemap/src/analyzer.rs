use sizemap_common::{ModuleRecord, NormalizedAnalyzerOptions};
use sizemap_error::{LoadResult, SizeResult};
use sizemap_loader::{FileSystem, load_records};

use crate::{ModuleGraph, SizeAttributor, SizeReport};

/// Owns the current snapshot and hands out attribution contexts for it.
///
/// Contexts borrow the analyzer, so the snapshot cannot be replaced while any of them is alive.
#[derive(Debug)]
pub struct Analyzer {
  graph: ModuleGraph,
}

impl Analyzer {
  pub fn new(records: Vec<ModuleRecord>) -> Self {
    Self { graph: ModuleGraph::new(records) }
  }

  pub fn load<F: FileSystem>(fs: &F, options: &NormalizedAnalyzerOptions) -> LoadResult<Self> {
    load_records(fs, &options.sources).map(Self::new)
  }

  pub fn graph(&self) -> &ModuleGraph {
    &self.graph
  }

  /// Swaps in a new record collection. The index is rebuilt from scratch.
  pub fn replace_records(&mut self, records: Vec<ModuleRecord>) {
    self.graph = ModuleGraph::new(records);
  }

  pub fn entry_points(&self) -> Vec<&ModuleRecord> {
    self.graph.entry_points().into_iter().map(|idx| self.graph.module(idx)).collect()
  }

  pub fn importers(&self, id: &str) -> SizeResult<Vec<&ModuleRecord>> {
    let idx = self.graph.idx_of(id)?;
    Ok(self.graph.importer_modules(idx).collect())
  }

  /// A fresh context with `ignored` (and everything they import) excluded from sums.
  pub fn attributor<S: AsRef<str>>(&self, ignored: &[S]) -> SizeResult<SizeAttributor<'_>> {
    SizeAttributor::with_ignored_ids(&self.graph, ignored)
  }

  /// `total` with no modules ignored. Builds a throwaway context; keep one from
  /// [`Analyzer::attributor`] for repeated queries.
  pub fn total(&self, id: &str) -> SizeResult<u64> {
    self.attributor::<&str>(&[])?.total_of(id)
  }

  pub fn unique<S: AsRef<str>>(&self, entry_id: &str, path_ids: &[S]) -> SizeResult<u64> {
    self.attributor::<&str>(&[])?.unique_of(entry_id, path_ids)
  }

  pub fn removed(&self, entry_id: &str, module_id: &str) -> SizeResult<u64> {
    self.attributor::<&str>(&[])?.removed_of(entry_id, module_id)
  }

  pub fn report(&self, options: &NormalizedAnalyzerOptions) -> SizeResult<SizeReport> {
    let mut attributor = self.attributor(&options.ignored)?;
    Ok(SizeReport::build(&mut attributor, options))
  }
}
