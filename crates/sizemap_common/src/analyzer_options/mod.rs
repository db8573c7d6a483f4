pub mod normalized_analyzer_options;
pub mod sort_key;
pub mod stats_source;

use std::path::PathBuf;

use crate::SortKey;

#[derive(Default, Debug, Clone)]
pub struct AnalyzerOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub stats_file: Option<PathBuf>,
  pub html_file: Option<PathBuf>,
  pub element_id: Option<String>,

  // --- Attribution
  pub ignored: Option<Vec<String>>,

  // --- Report
  pub max_depth: Option<usize>,
  pub sort: Option<SortKey>,
  pub filter: Option<String>,
}
