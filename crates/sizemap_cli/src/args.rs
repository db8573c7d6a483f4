use std::path::PathBuf;

use clap::Args;

use crate::types::sort_key::SortKey;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// JSON module list, tried first
  #[clap(long)]
  pub stats: Option<PathBuf>,

  /// HTML report holding the module list inline, tried second
  #[clap(long)]
  pub html: Option<PathBuf>,

  #[clap(long)]
  pub element_id: Option<String>,
}

#[derive(Args)]
pub struct AttributionArgs {
  /// Exclude a module, and everything it imports, from all sizes
  #[clap(long, short, action = clap::ArgAction::Append)]
  pub ignore: Option<Vec<String>>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Import levels to print below each entry point [default: 3]
  #[clap(long, short)]
  pub depth: Option<usize>,

  #[clap(long, short)]
  pub sort: Option<SortKey>,

  /// Only show subtrees containing a module whose id contains this text
  #[clap(long, short)]
  pub filter: Option<String>,

  /// Also print bytes per output chunk
  #[clap(long)]
  pub chunks: bool,

  #[clap(long)]
  pub json: bool,
}
