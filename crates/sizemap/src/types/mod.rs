use oxc_index::IndexVec;
use sizemap_common::{ImporterRecord, ModuleIdx, ModuleRecord};

pub type IndexModules = IndexVec<ModuleIdx, ModuleRecord>;
/// Resolved static edges, dangling targets already dropped.
pub type IndexDependencies = IndexVec<ModuleIdx, Vec<ModuleIdx>>;
pub type IndexImporters = IndexVec<ModuleIdx, Vec<ImporterRecord>>;
