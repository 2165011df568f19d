//! Tests for configuration loading

use std::io::Write;

use super::*;
use crate::suggest::SearchScope;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "http://127.0.0.1:9000"

[autocomplete]
debounce_ms = 150
"#
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.api.base_url(), "http://127.0.0.1:9000");
    assert_eq!(config.autocomplete.debounce_ms, 150);
    assert_eq!(config.fields.len(), 2);
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config(Some(&dir.path().join("nope.toml")));
    assert!(matches!(result, Err(SuggestError::Io(_))));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let result = parse_config_toml("[autocomplete\ndebounce_ms = ");
    assert!(matches!(result, Err(SuggestError::Config(_))));
}

#[test]
fn test_empty_field_list_rejected() {
    let result = parse_config_toml("fields = []");
    assert!(matches!(result, Err(SuggestError::Config(_))));
}

#[test]
fn test_duplicate_field_ids_rejected() {
    let result = parse_config_toml(
        r#"
[[fields]]
id = "a"

[[fields]]
id = "a"
scope = "bills"
"#,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("duplicate field id 'a'"));
}

#[test]
fn test_default_fields_match_site_bindings() {
    let config = parse_config_toml("").unwrap();
    assert_eq!(config.fields[0].id, "searchInput");
    assert_eq!(config.fields[0].scope, SearchScope::All);
    assert!(config.fields[0].primary);
    assert_eq!(config.fields[1].id, "target_law");
    assert_eq!(config.fields[1].scope, SearchScope::Bills);
    assert!(!config.fields[1].primary);
}
