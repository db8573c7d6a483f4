use std::path::PathBuf;

use crate::{SortKey, StatsSource};

#[derive(Debug)]
pub struct NormalizedAnalyzerOptions {
  // --- Input
  pub cwd: PathBuf,
  /// Tried in order until one yields a record collection.
  pub sources: Vec<StatsSource>,

  // --- Attribution
  pub ignored: Vec<String>,

  // --- Report
  pub max_depth: usize,
  pub sort: SortKey,
  pub filter: Option<String>,
}
