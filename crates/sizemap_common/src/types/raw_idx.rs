oxc_index::define_index_type! {
  #[derive(Default)]
  pub struct RawIdx = u32;
}

/// Position of a record inside the module arena. Edges are resolved to indices once, so every
/// traversal goes through the arena rather than through owning references.
pub type ModuleIdx = RawIdx;
