mod common;

use std::fs;
use std::path::PathBuf;

use common::demo_files;
use pretty_assertions::assert_eq;
use sysmgr_codegen::emit::GENERATED_MARKER;
use sysmgr_codegen::{Drift, check_files, write_files};
use tempfile::TempDir;

fn written() -> (TempDir, Vec<sysmgr_codegen::GeneratedFile>) {
    let dir = TempDir::new().unwrap();
    let files = demo_files();
    write_files(dir.path(), &files).unwrap();
    (dir, files)
}

// ── Writing ──────────────────────────────────────────────────────

#[test]
fn write_creates_directories_and_files() {
    let (dir, files) = written();
    for file in &files {
        let on_disk = fs::read_to_string(dir.path().join(&file.path)).unwrap();
        assert_eq!(on_disk, file.contents);
    }
    assert!(dir.path().join("types").is_dir());
    assert!(dir.path().join("operation").is_dir());
}

#[test]
fn freshly_written_output_has_no_drift() {
    let (dir, files) = written();
    assert_eq!(check_files(dir.path(), &files).unwrap(), vec![]);
}

// ── Drift ────────────────────────────────────────────────────────

#[test]
fn edited_and_deleted_files_are_reported() {
    let (dir, files) = written();
    fs::write(dir.path().join("types/widget.rs"), "// edited by hand\n").unwrap();
    fs::remove_file(dir.path().join("metadata.rs")).unwrap();

    assert_eq!(
        check_files(dir.path(), &files).unwrap(),
        vec![
            Drift::Missing(PathBuf::from("metadata.rs")),
            Drift::Changed(PathBuf::from("types/widget.rs")),
        ]
    );
}

#[test]
fn stale_generated_files_are_reported_and_pruned() {
    let (dir, files) = written();
    let stale = dir.path().join("types/gadget.rs");
    let hand_written = dir.path().join("types/extensions.rs");
    fs::write(&stale, format!("{GENERATED_MARKER} from demo.json. DO NOT EDIT.\n")).unwrap();
    fs::write(&hand_written, "pub fn helper() {}\n").unwrap();
    fs::write(dir.path().join("lib.rs"), "pub mod types;\n").unwrap();

    assert_eq!(
        check_files(dir.path(), &files).unwrap(),
        vec![Drift::Unexpected(PathBuf::from("types/gadget.rs"))]
    );

    write_files(dir.path(), &files).unwrap();
    assert!(!stale.exists());
    assert!(hand_written.exists());
    assert!(dir.path().join("lib.rs").exists());
    assert_eq!(check_files(dir.path(), &files).unwrap(), vec![]);
}

#[test]
fn drift_messages() {
    assert_eq!(
        Drift::Changed(PathBuf::from("client.rs")).to_string(),
        "out of date: client.rs"
    );
    assert_eq!(
        Drift::Missing(PathBuf::from("metadata.rs")).to_string(),
        "missing: metadata.rs"
    );
}
