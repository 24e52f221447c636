//! File-backed configuration source tests.

use std::path::PathBuf;

use tempfile::TempDir;

use transio_core::{config, ConfigError, Locale, YamlSource};

const CONFIG: &str = r#"
extract:
  pot:
    files:
      "po/messages.pot": ["src/**/*.rs"]
translation:
  po_path: "po"
  api_key: "abc123"
  target_locales: ["fr", "de"]
  source_locale: "en"
"#;

#[test]
fn load_and_resolve_from_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("translation.yaml");
    std::fs::write(&path, CONFIG).expect("write config");

    let source = YamlSource::load(&path).expect("load");
    let config = config::resolve(&source).expect("resolve");

    assert_eq!(config.pot_path, PathBuf::from("po/messages.pot"));
    assert_eq!(
        config.target_locales,
        vec![Locale::from("fr"), Locale::from("de")]
    );
}

#[test]
fn load_missing_file_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nope.yaml");

    let err = YamlSource::load(&path).unwrap_err();
    match err {
        ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Read, got {other:?}"),
    }
}

#[test]
fn load_malformed_yaml_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "translation: [unclosed").expect("write config");

    let err = YamlSource::load(&path).unwrap_err();
    match err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn missing_key_error_message_names_the_key() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("translation.yaml");
    std::fs::write(
        &path,
        "extract:\n  pot:\n    files:\n      \"a.pot\": []\ntranslation:\n  po_path: po\n",
    )
    .expect("write config");

    let source = YamlSource::load(&path).expect("load");
    let err = config::resolve(&source).unwrap_err();
    assert!(
        err.to_string().contains("translation.api_key"),
        "message should name the missing key: {err}"
    );
}
