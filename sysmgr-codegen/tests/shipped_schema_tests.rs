//! The checked-in SSM description must resolve, and the sources next to it
//! must be exactly the files it generates, byte for byte.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use sysmgr_codegen::emit::GENERATED_MARKER;
use sysmgr_codegen::{
    CodegenConfig, GenerateOptions, ServiceDescription, check_files, generate, resolve,
};

fn ssm_crate() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../sysmgr-ssm")
}

fn sources(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
    for entry in fs::read_dir(root.join(dir)).unwrap() {
        let entry = entry.unwrap();
        let relative = dir.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            sources(root, &relative, out);
        } else if relative.extension().is_some_and(|ext| ext == "rs") {
            out.insert(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

#[test]
fn ssm_description_resolves() {
    let config = CodegenConfig::load(&ssm_crate().join("sysmgr-codegen.toml")).unwrap();
    let description = ServiceDescription::load(&config.model).unwrap();
    let service = resolve(&description).unwrap();

    assert_eq!(service.service_id, "SSM");
    assert_eq!(service.target_prefix, "AmazonSSM");
    assert_eq!(service.operations.len(), 20);
    let send = service.operation("SendCommand").unwrap();
    assert_eq!(send.method, "send_command");
    assert_eq!(send.error_type, "SendCommandError");
    assert!(send.errors.iter().any(|e| e.variant == "InternalServerError"));
    assert!(send.errors.iter().any(|e| e.code == "InvalidDocument"));
    assert_eq!(
        service.structure("SendCommandRequest").unwrap().owner.as_deref(),
        Some("SendCommand")
    );
    assert_eq!(service.structure("Target").unwrap().owner, None);
    assert!(service.enumeration("ParameterTier").is_some());

    assert_eq!(service.structure("CommandPlugin").unwrap().owner, None);
    assert_eq!(service.structure("AutomationExecutionMetadata").unwrap().owner, None);
    assert!(service.enumeration("CommandPluginStatus").is_some());
    assert!(service.enumeration("AutomationType").is_some());
    assert!(service.structure("ParameterNotFound").is_none());
}

fn rustfmt_available() -> bool {
    Command::new("rustfmt")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

#[test]
fn checked_in_sources_match_the_generated_file_set() {
    let root = ssm_crate();
    let description = ServiceDescription::load(&root.join("schema/ssm.json")).unwrap();
    let service = resolve(&description).unwrap();
    let files = generate(&service, &GenerateOptions::new("ssm.json").with_format(false)).unwrap();

    let generated: BTreeSet<String> = files
        .iter()
        .map(|f| f.path.to_string_lossy().replace('\\', "/"))
        .collect();
    let mut on_disk = BTreeSet::new();
    sources(&root.join("src"), Path::new(""), &mut on_disk);
    on_disk.remove("lib.rs");
    assert_eq!(generated, on_disk);

    for path in &on_disk {
        let contents = fs::read_to_string(root.join("src").join(path)).unwrap();
        assert!(contents.starts_with(GENERATED_MARKER), "{path}");
        syn::parse_file(&contents).unwrap();
    }
}

#[test]
fn checked_in_sources_are_what_the_generator_writes() {
    if !rustfmt_available() {
        eprintln!("rustfmt not installed; skipping byte comparison of generated sources");
        return;
    }
    let root = ssm_crate();
    let config = CodegenConfig::load(&root.join("sysmgr-codegen.toml")).unwrap();
    let description = ServiceDescription::load(&config.model).unwrap();
    let service = resolve(&description).unwrap();
    assert!(config.format, "checked-in sources are formatted");
    let options = GenerateOptions::new("ssm.json").with_format(true);
    let files = generate(&service, &options).unwrap();

    let drift: Vec<String> = check_files(&config.output, &files)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(drift, Vec::<String>::new());
}
