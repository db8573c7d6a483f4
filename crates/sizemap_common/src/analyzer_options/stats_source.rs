use std::{fmt::Display, path::PathBuf};

/// Where a module list can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsSource {
  /// A standalone JSON asset holding the record array.
  Json(PathBuf),
  /// Raw JSON inlined into a `<script>` element of an HTML report.
  InlineHtml { path: PathBuf, element_id: String },
}

impl Display for StatsSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Json(path) => write!(f, "{}", path.display()),
      Self::InlineHtml { path, element_id } => write!(f, "{}#{element_id}", path.display()),
    }
  }
}
