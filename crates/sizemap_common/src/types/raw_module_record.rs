use serde::Deserialize;

use crate::{ModuleId, ModuleRecord};

/// The JSON shape emitted by the build instrumentation, one object per module.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModuleRecord {
  pub id: String,
  pub size: u64,
  #[serde(default)]
  pub rendered_size: Option<u64>,
  #[serde(default)]
  pub chunk: Option<String>,
  #[serde(default)]
  pub imported_ids: Vec<String>,
  #[serde(default)]
  pub dynamically_imported_ids: Vec<String>,
}

impl From<RawModuleRecord> for ModuleRecord {
  fn from(raw: RawModuleRecord) -> Self {
    Self {
      id: ModuleId::from(raw.id),
      raw_size: raw.size,
      rendered_size: raw.rendered_size,
      chunk: raw.chunk.map(Into::into),
      imported_ids: raw.imported_ids.into_iter().map(ModuleId::from).collect(),
      dynamically_imported_ids: raw
        .dynamically_imported_ids
        .into_iter()
        .map(ModuleId::from)
        .collect(),
    }
  }
}

#[test]
fn test_deserialize_raw_module_record() {
  let raw: RawModuleRecord = serde_json::from_str(
    r#"{
      "id": "src/main.js",
      "size": 300,
      "renderedSize": 120,
      "chunk": "main",
      "importedIds": ["src/a.js"],
      "dynamicallyImportedIds": ["src/lazy.js"]
    }"#,
  )
  .unwrap();
  let record = ModuleRecord::from(raw);
  assert_eq!(&*record.id, "src/main.js");
  assert_eq!(record.self_size(), 120);
  assert_eq!(record.chunk.as_deref(), Some("main"));
  assert_eq!(record.imported_ids, [ModuleId::from("src/a.js")]);
  assert_eq!(record.dynamically_imported_ids, [ModuleId::from("src/lazy.js")]);

  let minimal: RawModuleRecord = serde_json::from_str(r#"{ "id": "leaf.js", "size": 5 }"#).unwrap();
  let record = ModuleRecord::from(minimal);
  assert_eq!(record.self_size(), 5);
  assert!(record.imported_ids.is_empty());
}
