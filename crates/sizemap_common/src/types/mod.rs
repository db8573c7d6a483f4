pub mod import_kind;
pub mod importer_record;
pub mod module_id;
pub mod module_path;
pub mod module_record;
pub mod raw_idx;
pub mod raw_module_record;
