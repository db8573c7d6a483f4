mod chunk_summary;

use std::cmp::Ordering;

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use sizemap_common::{ModuleIdx, ModulePath, NormalizedAnalyzerOptions, SortKey};

use crate::{ReachabilityWalker, SizeAttributor};

pub use chunk_summary::ChunkSummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeReport {
  pub entries: Vec<EntryReport>,
  pub chunks: Vec<ChunkSummary>,
  /// Modules the caller asked to ignore, before closure expansion.
  pub ignored: Vec<String>,
  pub dangling_edges: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryReport {
  /// Only reached through `import()`.
  pub dynamic: bool,
  #[serde(flatten)]
  pub root: ReportNode,
}

/// One occurrence of a module in an entry point's import tree.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportNode {
  pub id: String,
  pub chunk: Option<String>,
  pub self_size: u64,
  pub total: u64,
  pub unique: u64,
  pub removed: u64,
  pub ignored: bool,
  /// Children are listed at this module's first occurrence in the same entry tree.
  pub collapsed: bool,
  pub children: Vec<ReportNode>,
}

impl SizeReport {
  pub fn build(attributor: &mut SizeAttributor<'_>, options: &NormalizedAnalyzerOptions) -> Self {
    let graph = attributor.graph();

    let roots = graph
      .entry_points()
      .into_iter()
      .map(|idx| (idx, false))
      .chain(graph.dynamic_entry_points().into_iter().map(|idx| (idx, true)))
      .collect::<Vec<_>>();

    let mut entries = roots
      .into_iter()
      .filter_map(|(entry, dynamic)| {
        let mut builder = TreeBuilder {
          attributor: &mut *attributor,
          options,
          entry,
          expanded: FxHashSet::default(),
          match_below: FxHashMap::default(),
        };
        builder
          .node(&ModulePath::new(entry), options.max_depth)
          .map(|root| EntryReport { dynamic, root })
      })
      .collect::<Vec<_>>();
    entries.sort_by(|a, b| compare(options.sort, &a.root, &b.root));

    let ignored = attributor
      .ignored()
      .explicit()
      .iter()
      .map(|&idx| graph.module(idx).id.stabilize(&options.cwd))
      .collect();

    Self {
      entries,
      chunks: ChunkSummary::collect(attributor),
      ignored,
      dangling_edges: graph.dangling_edge_count(),
    }
  }
}

struct TreeBuilder<'a, 'g> {
  attributor: &'a mut SizeAttributor<'g>,
  options: &'a NormalizedAnalyzerOptions,
  entry: ModuleIdx,
  /// Modules whose children are already listed in this entry's tree.
  expanded: FxHashSet<ModuleIdx>,
  match_below: FxHashMap<ModuleIdx, bool>,
}

impl TreeBuilder<'_, '_> {
  /// Returns `None` when a filter is set and nothing in this subtree matches it.
  ///
  /// Each module is expanded once per entry, which keeps the tree linear in the number of edges
  /// even when imports form many diamonds.
  fn node(&mut self, path: &ModulePath, depth: usize) -> Option<ReportNode> {
    let graph = self.attributor.graph();
    let options = self.options;
    let idx = path.terminal();
    let module = graph.module(idx);

    let collapsed = depth > 0 && !self.expanded.insert(idx);
    let cut = depth == 0 || collapsed;

    let mut children = if cut {
      Vec::new()
    } else {
      graph
        .dependencies(idx)
        .iter()
        .copied()
        .unique()
        // Modules already on the path would only repeat the cycle.
        .filter(|dep| !path.contains(dep))
        .filter_map(|dep| self.node(&path.extended(dep), depth - 1))
        .collect::<Vec<_>>()
    };

    let id = module.id.stabilize(&options.cwd);
    if let Some(filter) = options.filter.as_deref() {
      // Past the cut the match may sit below what is rendered.
      let matched = id.contains(filter) || (cut && self.reaches_match(idx, filter));
      if children.is_empty() && !matched {
        return None;
      }
    }
    children.sort_by(|a, b| compare(options.sort, a, b));

    Some(ReportNode {
      id,
      chunk: module.chunk.as_ref().map(ToString::to_string),
      self_size: module.self_size(),
      total: self.attributor.total(idx),
      unique: self.attributor.unique(self.entry, path),
      removed: self.attributor.removed(self.entry, idx),
      ignored: self.attributor.is_ignored(idx),
      collapsed,
      children,
    })
  }

  /// Whether `filter` matches any module reachable from `idx`, itself included.
  fn reaches_match(&mut self, idx: ModuleIdx, filter: &str) -> bool {
    if let Some(&found) = self.match_below.get(&idx) {
      return found;
    }
    let graph = self.attributor.graph();
    let cwd = &self.options.cwd;
    let found = ReachabilityWalker::new(graph)
      .walk(idx)
      .any(|path| graph.module(path.terminal()).id.stabilize(cwd).contains(filter));
    self.match_below.insert(idx, found);
    found
  }
}

fn compare(key: SortKey, a: &ReportNode, b: &ReportNode) -> Ordering {
  let by_key = match key {
    SortKey::Id => Ordering::Equal,
    SortKey::SelfSize => b.self_size.cmp(&a.self_size),
    SortKey::Total => b.total.cmp(&a.total),
    SortKey::Unique => b.unique.cmp(&a.unique),
    SortKey::Removed => b.removed.cmp(&a.removed),
  };
  by_key.then_with(|| a.id.cmp(&b.id))
}
