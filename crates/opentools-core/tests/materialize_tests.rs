use std::fs;

use opentools_core::{materialize, MaterializeError, ValidationError};
use serde_json::{json, Value};
use tempfile::TempDir;

fn sample_payload() -> Value {
    json!({
        "licenses": [
            { "unique_name": "MIT", "name": "MIT License", "spdx_id": "MIT" }
        ],
        "organizations": [
            { "unique_name": "Acme Corp", "name": "Acme", "description": "d", "url": "https://acme.example" }
        ],
        "languages": [
            {
                "unique_name": "Rust",
                "name": "Rust",
                "url": "https://www.rust-lang.org",
                "licenses": ["MIT License (mit)", "Apache License 2.0 (apache-2.0)"]
            }
        ],
        "software": [
            {
                "unique_name": "My Tool Name",
                "name": "My Tool",
                "categories": ["Simulation (simulation)"],
                "languages": ["Rust (rust)"],
                "organizations": ["Acme (acme-corp)"],
                "licenses": ["mit"],
                "url_website": "https://tool.example"
            }
        ]
    })
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_creates_one_file_per_entity_in_collection_order() {
    let temp = TempDir::new().unwrap();
    let created = materialize(&sample_payload(), temp.path()).unwrap();

    let relative: Vec<_> = created
        .iter()
        .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        relative,
        vec![
            "licenses/mit.json",
            "organizations/acme-corp.json",
            "languages/rust.json",
            "software/my-tool-name.json",
        ]
    );
}

#[test]
fn test_reference_labels_are_normalized() {
    let temp = TempDir::new().unwrap();
    materialize(&sample_payload(), temp.path()).unwrap();

    let lang = read_json(&temp.path().join("languages/rust.json"));
    assert_eq!(lang["licenses"], json!(["mit", "apache-2.0"]));

    let tool = read_json(&temp.path().join("software/my-tool-name.json"));
    assert_eq!(tool["categories"], json!(["simulation"]));
    assert_eq!(tool["languages"], json!(["rust"]));
    assert_eq!(tool["organizations"], json!(["acme-corp"]));
    assert_eq!(tool["licenses"], json!(["mit"]));
}

#[test]
fn test_file_contents_match_entity_fields() {
    let temp = TempDir::new().unwrap();
    materialize(&sample_payload(), temp.path()).unwrap();

    let path = temp.path().join("organizations/acme-corp.json");
    assert_eq!(
        read_json(&path),
        json!({ "name": "Acme", "description": "d", "url": "https://acme.example" })
    );

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"name\": \"Acme\""));
    assert!(!text.contains("unique_name"));
}

#[test]
fn test_second_run_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let payload = sample_payload();

    let first = materialize(&payload, temp.path()).unwrap();
    let before: Vec<_> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = materialize(&payload, temp.path()).unwrap();
    assert!(second.is_empty());

    let after: Vec<_> = first.iter().map(|p| fs::read(p).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_existing_file_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let licenses = temp.path().join("licenses");
    fs::create_dir_all(&licenses).unwrap();
    fs::write(licenses.join("mit.json"), b"hand edited").unwrap();

    let payload = json!({
        "licenses": [
            { "unique_name": "MIT", "name": "MIT License" },
            { "unique_name": "BSD 3", "name": "BSD 3-Clause" }
        ]
    });
    let created = materialize(&payload, temp.path()).unwrap();

    assert_eq!(created, vec![licenses.join("bsd-3.json")]);
    assert_eq!(fs::read(licenses.join("mit.json")).unwrap(), b"hand edited");
}

#[test]
fn test_missing_unique_name_fails_whole_run() {
    let temp = TempDir::new().unwrap();
    let payload = json!({
        "licenses": [
            { "unique_name": "MIT", "name": "MIT License" },
            { "name": "No Slug License" }
        ],
        "organizations": [
            { "unique_name": "Acme", "name": "Acme" }
        ]
    });

    let err = materialize(&payload, temp.path()).unwrap_err();
    match err {
        MaterializeError::Validation {
            collection,
            index,
            source,
        } => {
            assert_eq!(collection, "licenses");
            assert_eq!(index, 1);
            assert_eq!(source.field(), Some("unique_name"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Earlier records stay, later collections never run.
    assert!(temp.path().join("licenses/mit.json").exists());
    assert!(!temp.path().join("organizations").exists());
}

#[test]
fn test_invalid_entity_fails() {
    let temp = TempDir::new().unwrap();
    let payload = json!({
        "languages": [ { "unique_name": "Go", "name": "Go", "licenses": [] } ]
    });

    let err = materialize(&payload, temp.path()).unwrap_err();
    assert!(matches!(
        err,
        MaterializeError::Validation {
            source: ValidationError::MissingField { .. },
            ..
        }
    ));
}

#[test]
fn test_unrecognized_or_empty_payload_is_noop() {
    let temp = TempDir::new().unwrap();

    let created = materialize(&json!({ "categories": [ { "unique_name": "x" } ] }), temp.path()).unwrap();
    assert!(created.is_empty());

    let created = materialize(
        &json!({ "licenses": [], "organizations": [], "languages": [], "software": [] }),
        temp.path(),
    )
    .unwrap();
    assert!(created.is_empty());
}

#[test]
fn test_payload_shape_errors() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        materialize(&json!([]), temp.path()),
        Err(MaterializeError::PayloadNotObject)
    ));
    assert!(matches!(
        materialize(&json!({ "software": {} }), temp.path()),
        Err(MaterializeError::NotAList("software"))
    ));
}

#[test]
fn test_unique_name_cannot_escape_the_data_root() {
    let temp = TempDir::new().unwrap();
    let data_root = temp.path().join("data");

    for name in ["../../Outside", "/tmp/absolute", "..\\windows", "nested/name"] {
        let payload = json!({ "licenses": [{ "unique_name": name, "name": "x" }] });

        let err = materialize(&payload, &data_root).unwrap_err();
        match err {
            MaterializeError::Validation { source, .. } => {
                assert!(matches!(source, ValidationError::UnsafeName { .. }), "{name}");
                assert_eq!(source.field(), Some("unique_name"));
            }
            other => panic!("unexpected error for {name}: {other}"),
        }
    }

    assert!(!temp.path().join("outside.json").exists());
    assert!(!data_root.join("licenses").exists());
}
