//! Test fixtures - reusable tree documents and configs.

/// Folder picker document: three sub-roots, each with three empty folders
/// and three files, plus three files at the root.
pub const PICKER_TREE: &str = r#"{
  "sourceDir": "root",
  "dirs": [
    {
      "sourceDir": "subroot-1",
      "dirs": ["empty 1", "empty 2", "empty 3"],
      "files": ["file1234", "file5678", "filexyzw"]
    },
    {
      "sourceDir": "subroot-2",
      "dirs": ["empty 1", "empty 2", "empty 3"],
      "files": ["file1234", "file5678", "filexyzw"]
    },
    {
      "sourceDir": "subroot-3",
      "dirs": ["empty 1", "empty 2", "empty 3"],
      "files": ["file1234", "file5678", "filexyzw"]
    }
  ],
  "files": ["a.js", "b.js", "c.js"]
}"#;

/// Config matching `PICKER_TREE`
pub const PICKER_CONFIG: &str = r#"[tree]
node = "sourceDir"
id = "picker"
"#;

/// Lazily loaded children for two of the picker's empty folders
pub const PICKER_RESPONSES: &str = r#"{
  "/root/subroot-1/empty 1": { "dirs": ["deeper"], "files": ["x.txt", "y.txt"] },
  "/root/subroot-2/empty 3": null
}"#;

/// The picker tree parsed as JSON
pub fn picker_tree() -> serde_json::Value {
    serde_json::from_str(PICKER_TREE).expect("fixture is valid JSON")
}

/// `TreeConfig` matching `PICKER_TREE`
pub fn picker_config() -> treepick::TreeConfig {
    treepick::TreeConfig {
        node: "sourceDir".to_string(),
        id: Some("picker".to_string()),
        ..treepick::TreeConfig::default()
    }
}
