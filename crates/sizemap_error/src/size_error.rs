use thiserror::Error;

/// Failures raised while resolving caller-supplied ids against a module graph.
///
/// Edges that point outside the graph are not errors: traversal skips them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
  #[error("Module `{0}` is not part of the module graph")]
  ModuleNotFound(String),
  #[error("A module path needs at least one module")]
  EmptyPath,
  #[error("`{importer}` does not statically import `{imported}`")]
  BrokenPath { importer: String, imported: String },
}

pub type SizeResult<T> = Result<T, SizeError>;
