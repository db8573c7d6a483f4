use arcstr::ArcStr;

use crate::{ImportKind, ModuleId};

/// One module as reported by the build: its id, byte sizes and outgoing edges.
///
/// Records are immutable once a graph is built from them. Edges are plain ids and may point at
/// modules that are absent from the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
  pub id: ModuleId,
  /// Bytes before minification.
  pub raw_size: u64,
  /// Bytes after bundling and minification, when the build reported them.
  pub rendered_size: Option<u64>,
  /// Output chunk label. Informational only.
  pub chunk: Option<ArcStr>,
  /// Eager imports, in source order.
  pub imported_ids: Vec<ModuleId>,
  /// Lazy `import()` targets. They make a module non-entry but never add to size closures.
  pub dynamically_imported_ids: Vec<ModuleId>,
}

impl ModuleRecord {
  pub fn new(id: impl Into<ModuleId>, raw_size: u64) -> Self {
    Self {
      id: id.into(),
      raw_size,
      rendered_size: None,
      chunk: None,
      imported_ids: Vec::new(),
      dynamically_imported_ids: Vec::new(),
    }
  }

  #[must_use]
  pub fn with_rendered_size(mut self, rendered_size: u64) -> Self {
    self.rendered_size = Some(rendered_size);
    self
  }

  #[must_use]
  pub fn with_chunk(mut self, chunk: impl Into<ArcStr>) -> Self {
    self.chunk = Some(chunk.into());
    self
  }

  #[must_use]
  pub fn with_imports<I, T>(mut self, ids: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<ModuleId>,
  {
    self.imported_ids.extend(ids.into_iter().map(Into::into));
    self
  }

  #[must_use]
  pub fn with_dynamic_imports<I, T>(mut self, ids: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<ModuleId>,
  {
    self.dynamically_imported_ids.extend(ids.into_iter().map(Into::into));
    self
  }

  /// The rendered size supersedes the raw size when known.
  pub fn self_size(&self) -> u64 {
    self.rendered_size.unwrap_or(self.raw_size)
  }

  pub fn import_ids(&self, kind: ImportKind) -> &[ModuleId] {
    match kind {
      ImportKind::Import => &self.imported_ids,
      ImportKind::DynamicImport => &self.dynamically_imported_ids,
    }
  }

  /// Every outgoing edge, static ones first.
  pub fn iter_import_ids(&self) -> impl Iterator<Item = (ImportKind, &ModuleId)> {
    self
      .imported_ids
      .iter()
      .map(|id| (ImportKind::Import, id))
      .chain(self.dynamically_imported_ids.iter().map(|id| (ImportKind::DynamicImport, id)))
  }
}
