use crate::{ImportKind, ModuleIdx};

/// One incoming edge: `importer` imports the module this record is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImporterRecord {
  pub kind: ImportKind,
  pub importer: ModuleIdx,
}
