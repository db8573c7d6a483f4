mod analyzer_options;
mod types;

pub use crate::{
  analyzer_options::{
    AnalyzerOptions, normalized_analyzer_options::NormalizedAnalyzerOptions, sort_key::SortKey,
    stats_source::StatsSource,
  },
  types::{
    import_kind::ImportKind,
    importer_record::ImporterRecord,
    module_id::ModuleId,
    module_path::ModulePath,
    module_record::ModuleRecord,
    raw_idx::ModuleIdx,
    raw_module_record::RawModuleRecord,
  },
};
