pub mod human_size;
pub mod indexmap;
pub mod rustc_hash;
