use std::path::PathBuf;

use sizemap_common::{AnalyzerOptions, NormalizedAnalyzerOptions, StatsSource};
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: AnalyzerOptions) -> NormalizedAnalyzerOptions {
  let cwd = raw_options.cwd.unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

  let stats_file = raw_options.stats_file.unwrap_or_else(|| PathBuf::from("stats.json"));
  let html_file = raw_options.html_file.unwrap_or_else(|| PathBuf::from("index.html"));
  let element_id = raw_options.element_id.unwrap_or_else(|| "data".to_string());

  let sources = vec![
    StatsSource::Json(cwd.join(stats_file).normalize()),
    StatsSource::InlineHtml { path: cwd.join(html_file).normalize(), element_id },
  ];

  NormalizedAnalyzerOptions {
    cwd,
    sources,
    ignored: raw_options.ignored.unwrap_or_default(),
    max_depth: raw_options.max_depth.unwrap_or(3),
    sort: raw_options.sort.unwrap_or_default(),
    filter: raw_options.filter.filter(|filter| !filter.is_empty()),
  }
}

#[cfg(all(test, unix))]
mod tests {
  use std::path::{Path, PathBuf};

  use sizemap_common::{AnalyzerOptions, SortKey, StatsSource};

  use super::normalize_options;

  #[test]
  fn defaults() {
    let options =
      normalize_options(AnalyzerOptions { cwd: Some("/srv/app".into()), ..Default::default() });
    assert_eq!(
      options.sources,
      [
        StatsSource::Json(PathBuf::from("/srv/app/stats.json")),
        StatsSource::InlineHtml {
          path: PathBuf::from("/srv/app/index.html"),
          element_id: "data".to_string()
        },
      ]
    );
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.sort, SortKey::Total);
    assert!(options.ignored.is_empty());
    assert!(options.filter.is_none());
  }

  #[test]
  fn paths_resolve_against_cwd() {
    let options = normalize_options(AnalyzerOptions {
      cwd: Some("/srv/app".into()),
      stats_file: Some("dist/../out/stats.json".into()),
      html_file: Some("/tmp/report.html".into()),
      element_id: Some("stats".to_string()),
      filter: Some(String::new()),
      ..Default::default()
    });
    let StatsSource::Json(json) = &options.sources[0] else { unreachable!() };
    assert_eq!(json, Path::new("/srv/app/out/stats.json"));
    let StatsSource::InlineHtml { path, element_id } = &options.sources[1] else { unreachable!() };
    assert_eq!(path, Path::new("/tmp/report.html"));
    assert_eq!(element_id, "stats");
    assert!(options.filter.is_none());
  }
}
