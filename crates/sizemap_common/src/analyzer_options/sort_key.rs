use std::fmt::Display;

/// Ordering of sibling rows in a report. Size keys sort largest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  Id,
  SelfSize,
  #[default]
  Total,
  Unique,
  Removed,
}

impl Display for SortKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Id => write!(f, "id"),
      Self::SelfSize => write!(f, "self"),
      Self::Total => write!(f, "total"),
      Self::Unique => write!(f, "unique"),
      Self::Removed => write!(f, "removed"),
    }
  }
}
