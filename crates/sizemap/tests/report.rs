use std::fs;

use sizemap::{
  Analyzer, AnalyzerOptions, ModuleRecord, OsFileSystem, SizeReport, SortKey, normalize_options,
};

const STATS: &str = r#"[
  { "id": "E", "size": 10, "chunk": "main", "importedIds": ["A"], "dynamicallyImportedIds": ["L"] },
  { "id": "A", "size": 20, "chunk": "main", "importedIds": ["B"], "dynamicallyImportedIds": [] },
  { "id": "B", "size": 5, "chunk": "main", "importedIds": [], "dynamicallyImportedIds": [] },
  { "id": "F", "size": 1, "chunk": "worker", "importedIds": ["B"], "dynamicallyImportedIds": [] },
  { "id": "L", "size": 7, "chunk": "lazy", "importedIds": [], "dynamicallyImportedIds": [] }
]"#;

fn report(options: AnalyzerOptions) -> SizeReport {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("stats.json"), STATS).unwrap();
  let options =
    normalize_options(AnalyzerOptions { cwd: Some(dir.path().to_path_buf()), ..options });
  let analyzer = Analyzer::load(&OsFileSystem, &options).unwrap();
  analyzer.report(&options).unwrap()
}

#[test]
fn entries_are_sorted_by_total() {
  let report = report(AnalyzerOptions::default());
  let roots = report
    .entries
    .iter()
    .map(|entry| (entry.root.id.as_str(), entry.root.total, entry.dynamic))
    .collect::<Vec<_>>();
  assert_eq!(roots, [("E", 35, false), ("L", 7, true), ("F", 6, false)]);
  assert_eq!(report.dangling_edges, 0);
}

#[test]
fn tree_nodes_carry_every_metric() {
  let report = report(AnalyzerOptions::default());
  let e = &report.entries[0].root;
  assert_eq!((e.self_size, e.total, e.unique, e.removed), (10, 35, 35, 35));

  let a = &e.children[0];
  assert_eq!(a.id, "A");
  assert_eq!(a.chunk.as_deref(), Some("main"));
  assert_eq!((a.self_size, a.total, a.unique, a.removed), (20, 25, 25, 25));

  let b = &a.children[0];
  assert_eq!((b.self_size, b.total, b.unique, b.removed), (5, 5, 5, 5));
  assert!(b.children.is_empty());
}

#[test]
fn chunks_are_summarized() {
  let report = report(AnalyzerOptions::default());
  let chunks = report
    .chunks
    .iter()
    .map(|chunk| (chunk.chunk.as_deref(), chunk.modules, chunk.size))
    .collect::<Vec<_>>();
  assert_eq!(chunks, [(Some("main"), 3, 35), (Some("lazy"), 1, 7), (Some("worker"), 1, 1)]);
}

#[test]
fn ignored_modules_are_reported_as_zero() {
  let report =
    report(AnalyzerOptions { ignored: Some(vec!["A".to_string()]), ..Default::default() });
  assert_eq!(report.ignored, ["A"]);

  let e = report.entries.iter().find(|entry| entry.root.id == "E").unwrap();
  assert_eq!(e.root.total, 10);
  assert_eq!((e.root.unique, e.root.removed), (10, 10));
  let a = &e.root.children[0];
  assert!(a.ignored);
  assert_eq!((a.total, a.unique, a.removed), (0, 0, 0));
  assert!(a.children[0].ignored);
  assert_eq!(report.chunks[0].size, 10);
}

#[test]
fn filter_and_depth_trim_the_tree() {
  let filtered = report(AnalyzerOptions {
    filter: Some("B".to_string()),
    sort: Some(SortKey::Id),
    ..Default::default()
  });
  let roots = filtered.entries.iter().map(|entry| entry.root.id.as_str()).collect::<Vec<_>>();
  assert_eq!(roots, ["E", "F"]);

  let shallow = report(AnalyzerOptions { max_depth: Some(0), ..Default::default() });
  assert!(shallow.entries.iter().all(|entry| entry.root.children.is_empty()));
}

#[test]
fn filter_matches_modules_below_the_depth_limit() {
  let filtered = report(AnalyzerOptions {
    filter: Some("B".to_string()),
    max_depth: Some(1),
    sort: Some(SortKey::Id),
    ..Default::default()
  });
  let roots = filtered.entries.iter().map(|entry| entry.root.id.as_str()).collect::<Vec<_>>();
  assert_eq!(roots, ["E", "F"]);

  let a = &filtered.entries[0].root.children[0];
  assert_eq!(a.id, "A");
  assert!(a.children.is_empty());
  assert!(!a.collapsed);
  assert_eq!(filtered.entries[1].root.children[0].id, "B");
}

#[test]
fn shared_modules_are_expanded_once_per_entry() {
  // E -> A -> B -> D and E -> C -> B
  let analyzer = Analyzer::new(vec![
    ModuleRecord::new("E", 1).with_imports(["A", "C"]),
    ModuleRecord::new("A", 2).with_imports(["B"]),
    ModuleRecord::new("C", 3).with_imports(["B"]),
    ModuleRecord::new("B", 4).with_imports(["D"]),
    ModuleRecord::new("D", 5),
  ]);
  let dir = tempfile::tempdir().unwrap();
  let options = normalize_options(AnalyzerOptions {
    cwd: Some(dir.path().to_path_buf()),
    sort: Some(SortKey::Id),
    ..Default::default()
  });
  let report = analyzer.report(&options).unwrap();

  let e = &report.entries[0].root;
  let (a, c) = (&e.children[0], &e.children[1]);
  assert_eq!((a.id.as_str(), c.id.as_str()), ("A", "C"));

  let b_under_a = &a.children[0];
  assert!(!b_under_a.collapsed);
  assert_eq!(b_under_a.children[0].id, "D");

  let b_under_c = &c.children[0];
  assert_eq!(b_under_c.id, "B");
  assert!(b_under_c.collapsed);
  assert!(b_under_c.children.is_empty());
  assert_eq!(b_under_c.total, 9);
}

#[test]
fn serializes_to_camel_case_json() {
  let report = report(AnalyzerOptions::default());
  let json = serde_json::to_value(&report).unwrap();
  assert_eq!(json["entries"][0]["id"], "E");
  assert_eq!(json["entries"][0]["selfSize"], 10);
  assert_eq!(json["entries"][0]["dynamic"], false);
  assert_eq!(json["entries"][0]["children"][0]["removed"], 25);
  assert_eq!(json["danglingEdges"], 0);
}

#[test]
fn missing_sources_fail_to_load() {
  let dir = tempfile::tempdir().unwrap();
  let options = normalize_options(AnalyzerOptions {
    cwd: Some(dir.path().to_path_buf()),
    ..Default::default()
  });
  let errors = Analyzer::load(&OsFileSystem, &options).unwrap_err();
  assert_eq!(errors.len(), 2);
}
