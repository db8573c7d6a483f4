mod analyzer;
mod attributor;
mod closure;
mod graph;
mod ignore_set;
mod report;
mod types;
mod utils;
mod walker;

pub use crate::{
  analyzer::Analyzer,
  attributor::{CacheStats, SizeAttributor},
  closure::TransitiveClosure,
  graph::ModuleGraph,
  ignore_set::IgnoreSet,
  report::{ChunkSummary, EntryReport, ReportNode, SizeReport},
  types::IndexModules,
  utils::normalize_options::normalize_options,
  walker::{AllowAll, ReachabilityWalker, Walk},
};
pub use sizemap_common::*;
pub use sizemap_error::{LoadError, LoadResult, SizeError, SizeResult};
pub use sizemap_loader::{FileSystem, OsFileSystem};
