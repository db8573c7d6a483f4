use std::path::Path;

use anyhow::{Context, ensure};
use itertools::Itertools;
use sizemap_common::{ModuleRecord, RawModuleRecord, StatsSource};
use sizemap_error::LoadResult;

use crate::{FileSystem, extract_inline_element};

/// Reads the module list from the first source that yields a valid one.
///
/// A failing source is logged and the next one is attempted. When every source fails, the error
/// carries one entry per source.
pub fn load_records<F: FileSystem>(
  fs: &F,
  sources: &[StatsSource],
) -> LoadResult<Vec<ModuleRecord>> {
  let mut errors = Vec::with_capacity(sources.len());

  for source in sources {
    match load_source(fs, source) {
      Ok(records) => {
        tracing::debug!("Loaded {} module records from {source}", records.len());
        return Ok(records);
      }
      Err(err) => {
        tracing::warn!("Failed to load module stats from {source}: {err:#}");
        errors.push(err.context(format!("Failed to load module stats from {source}")));
      }
    }
  }

  if errors.is_empty() {
    errors.push(anyhow::anyhow!("No module stats source configured"));
  }
  Err(errors.into())
}

fn load_source<F: FileSystem>(fs: &F, source: &StatsSource) -> anyhow::Result<Vec<ModuleRecord>> {
  match source {
    StatsSource::Json(path) => parse_records(&read(fs, path)?),
    StatsSource::InlineHtml { path, element_id } => {
      let html = read(fs, path)?;
      parse_records(extract_inline_element(&html, element_id)?)
    }
  }
}

fn read<F: FileSystem>(fs: &F, path: &Path) -> anyhow::Result<String> {
  ensure!(fs.exists(path), "`{}` does not exist", path.display());
  fs.read_to_string(path).with_context(|| format!("Failed to read `{}`", path.display()))
}

/// Parses and validates a JSON record array.
pub fn parse_records(text: &str) -> anyhow::Result<Vec<ModuleRecord>> {
  let raw: Vec<RawModuleRecord> =
    serde_json::from_str(text).context("Module stats are not a valid record array")?;

  let duplicates = raw.iter().map(|record| record.id.as_str()).duplicates().collect::<Vec<_>>();
  ensure!(duplicates.is_empty(), "Duplicate module ids: {}", duplicates.join(", "));

  Ok(raw.into_iter().map(ModuleRecord::from).collect())
}
