//! Spec file loading tests.

use rippy_table::{Document, InputFormat, TableError};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "table.json",
        r#"{"title": "Foo", "anchor_text": "xxx-foo", "headers": ["One", "Two", "Three"]}"#,
    );

    let doc = Document::load(&path).unwrap();
    let tables = doc.into_tables();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].title(), ".. _xxx-foo:\n\nFoo\n===\n\n");
    assert_eq!(tables[0].col_widths.get(&2), Some(&19));
}

#[test]
fn test_load_toml_file_renders_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "doc.toml",
        r#"
[[tables]]
title = "First"
headers = ["a"]

[[tables]]
title = "Second"
"#,
    );

    let rendered = Document::load(&path).unwrap().render();
    let first = rendered.find("First").unwrap();
    // an empty second table renders as the None placeholder
    assert!(rendered.ends_with("None\n\n"));
    assert!(!rendered.contains("Second"));
    assert_eq!(first, 0);
}

#[test]
fn test_load_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "table.yaml", "title: Foo\n");
    assert!(matches!(
        Document::load(&path),
        Err(TableError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Document::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = Document::parse("headers = [", InputFormat::Toml).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_document_json_roundtrip_preserves_render() {
    let doc = Document::parse(
        r#"{"tables": [{"title": "T", "heading_level": 2, "rows": [["1", "2"]]}]}"#,
        InputFormat::Json,
    )
    .unwrap();
    let reparsed = Document::from_json_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.render(), doc.render());
}
