use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sysmgr_codegen::{CodegenConfig, CodegenError};
use tempfile::TempDir;

#[test]
fn missing_keys_take_defaults() {
    let config = CodegenConfig::from_toml("model = \"schema/ssm.json\"").unwrap();
    assert_eq!(config.model, PathBuf::from("schema/ssm.json"));
    assert_eq!(config.output, PathBuf::from("src"));
    assert!(config.format);
}

#[test]
fn relative_paths_follow_the_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sysmgr-codegen.toml");
    fs::write(&path, "model = \"schema/demo.json\"\noutput = \"generated\"\nformat = false\n").unwrap();

    let config = CodegenConfig::load(&path).unwrap();
    assert_eq!(config.model, dir.path().join("schema/demo.json"));
    assert_eq!(config.output, dir.path().join("generated"));
    assert!(!config.format);
}

#[test]
fn absolute_paths_are_kept() {
    let base = std::env::temp_dir();
    let absolute = base.join("elsewhere/model.json");
    let config = CodegenConfig {
        model: absolute.clone(),
        ..CodegenConfig::default()
    }
    .relative_to(&PathBuf::from("crate"));
    assert_eq!(config.model, absolute);
    assert_eq!(config.output, PathBuf::from("crate/src"));
}

#[test]
fn invalid_config_is_reported() {
    let err = CodegenConfig::from_toml("format = \"yes\"").unwrap_err();
    assert!(matches!(err, CodegenError::Config(_)));

    let err = CodegenConfig::load(&PathBuf::from("/nonexistent/sysmgr-codegen.toml")).unwrap_err();
    assert!(matches!(err, CodegenError::Io { .. }));
}
