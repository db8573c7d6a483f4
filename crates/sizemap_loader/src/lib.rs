mod file_system;
mod inline_element;
mod load_records;
#[cfg(feature = "os")]
mod os;

pub use crate::{
  file_system::FileSystem,
  inline_element::extract_inline_element,
  load_records::{load_records, parse_records},
};
#[cfg(feature = "os")]
pub use os::OsFileSystem;
