use arcstr::ArcStr;
use serde::Serialize;
use sizemap_utils::indexmap::FxIndexMap;

use crate::SizeAttributor;

/// Bytes per output chunk. Ignored modules are counted but contribute no bytes.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSummary {
  /// `None` groups the modules the build did not assign to a chunk.
  pub chunk: Option<String>,
  pub modules: usize,
  pub size: u64,
}

impl ChunkSummary {
  pub fn collect(attributor: &SizeAttributor<'_>) -> Vec<Self> {
    let graph = attributor.graph();
    let mut chunks = FxIndexMap::<Option<ArcStr>, (usize, u64)>::default();

    for (idx, module) in graph.modules().iter_enumerated() {
      let (modules, size) = chunks.entry(module.chunk.clone()).or_default();
      *modules += 1;
      *size += attributor.ignored().attributed_size(graph, idx);
    }

    let mut summaries = chunks
      .into_iter()
      .map(|(chunk, (modules, size))| Self {
        chunk: chunk.as_ref().map(ToString::to_string),
        modules,
        size,
      })
      .collect::<Vec<_>>();
    summaries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.chunk.cmp(&b.chunk)));
    summaries
  }
}
