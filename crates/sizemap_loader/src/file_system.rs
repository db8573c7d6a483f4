use std::{io, path::Path};

/// The only capability ingestion needs from the host.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn exists(&self, path: &Path) -> bool;
}
