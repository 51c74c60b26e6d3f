//! Tests for loading producer data and keeping the latest contribution

use codenav_api::{OccurrenceNavigator, Position, Provenance, Range};
use codenav_core::loader::load_code_graph;
use codenav_core::{CodeGraphStore, CodenavError, DocumentKey};
use tempfile::TempDir;

const SYNTACTIC: &str = r#"{
    "provenance": "SYNTACTIC",
    "commit": "f00d",
    "toolInfo": {"name": "scip-syntax", "version": "0.3.1"},
    "occurrences": [
        {"range": {"start": {"line": 0, "character": 4}, "end": {"line": 0, "character": 8}}, "symbol": "local 1", "symbolRoles": 1},
        {"range": {"start": {"line": 0, "character": 4}, "end": {"line": 0, "character": 6}}, "symbol": "local 2"},
        {"range": {"start": {"line": 3, "character": 0}, "end": {"line": 3, "character": 4}}, "symbol": "local 1", "symbolRoles": 8}
    ]
}"#;

const PRECISE: &str = r#"[{
    "provenance": "PRECISE",
    "commit": "f00d",
    "toolInfo": null,
    "occurrences": [
        {"range": {"start": {"line": 1, "character": 2}, "end": {"line": 1, "character": 9}}, "symbol": "scip-go gomod example v1 `main`/run()."}
    ]
}]"#;

#[test]
fn test_load_and_index_syntactic_data() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("syntactic.json");
    std::fs::write(&file, SYNTACTIC).unwrap();

    let data = load_code_graph(&file).unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].occurrences.len(), 3);

    let mut store = CodeGraphStore::new();
    let key = DocumentKey::new("main.go", "f00d");
    assert!(store.update(key.clone(), &[data]));

    let entry = store.get_by_provenance(&key, Provenance::Syntactic).unwrap();
    let index = &entry.occurrence_index;
    assert_eq!(index.len(), 2);

    let hit = index.at_position(Position::new(0, 5)).unwrap();
    assert_eq!(hit.symbol.as_deref(), Some("local 1"));
    assert_eq!(index.definition("local 1").map(|o| o.range), Some(Range::from_coords(0, 4, 0, 8)));
    assert_eq!(index.with_symbol("local 2").count(), 0);
}

#[test]
fn test_latest_file_replaces_earlier_one() {
    let temp = TempDir::new().unwrap();
    let syntactic = temp.path().join("syntactic.json");
    let precise = temp.path().join("precise.json");
    std::fs::write(&syntactic, SYNTACTIC).unwrap();
    std::fs::write(&precise, PRECISE).unwrap();

    let contributions = vec![
        load_code_graph(&syntactic).unwrap(),
        load_code_graph(&precise).unwrap(),
    ];

    let mut store = CodeGraphStore::new();
    let key = DocumentKey::new("main.go", "f00d");
    assert!(store.update(key.clone(), &contributions));
    // Same contributions again: nothing to rebuild.
    assert!(!store.update(key.clone(), &contributions));

    let entries = store.get(&key).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].data.provenance, Provenance::Precise);
    assert!(entries[0].data.tool_info.is_none());
    assert!(store.get_by_provenance(&key, Provenance::Syntactic).is_none());
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = load_code_graph(&temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CodenavError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("broken.json");
    std::fs::write(&file, "{\"provenance\": ").unwrap();
    let err = load_code_graph(&file).unwrap_err();
    assert!(matches!(err, CodenavError::Json(_)));
}
