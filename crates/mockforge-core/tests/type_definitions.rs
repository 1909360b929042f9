use std::io::Write;

use mockforge_core::{Error, TypeRegistry};

#[test]
fn load_json_registers_types_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"name": "profile", "fields": [
                {{"name": "user_id", "types": ["int"]}},
                {{"name": "bio", "types": ["string", "null"]}}
            ]}}
        ]"#
    )
    .expect("write defs");

    let mut registry = TypeRegistry::builtin();
    let added = registry.load_json(file.path()).expect("load defs");
    assert_eq!(added, 1);
    assert!(registry.contains("profile"));
    assert!(registry.contains("wp.post"));

    let descriptors = registry.inspect("profile").expect("inspect");
    assert_eq!(descriptors.len(), 2);
    assert!(descriptors[1].nullable);
}

#[test]
fn load_json_surfaces_missing_file() {
    let mut registry = TypeRegistry::new();
    let err = registry
        .load_json(std::path::Path::new("/nonexistent/defs.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_json_rejects_invalid_definitions() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"name": "", "fields": []}}"#).expect("write defs");

    let mut registry = TypeRegistry::new();
    let err = registry.load_json(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidDefinition(_)));
}
