use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum SortKey {
  Id,
  #[value(name = "self")]
  SelfSize,
  Total,
  Unique,
  Removed,
}

impl From<SortKey> for sizemap::SortKey {
  fn from(value: SortKey) -> Self {
    match value {
      SortKey::Id => sizemap::SortKey::Id,
      SortKey::SelfSize => sizemap::SortKey::SelfSize,
      SortKey::Total => sizemap::SortKey::Total,
      SortKey::Unique => sizemap::SortKey::Unique,
      SortKey::Removed => sizemap::SortKey::Removed,
    }
  }
}
