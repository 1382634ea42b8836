//! Writing generated files and detecting drift against a checkout.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::emit::{GENERATED_MARKER, GeneratedFile};
use crate::error::{CodegenError, Result};

/// Difference between generated output and what is on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Drift {
    Missing(PathBuf),
    Changed(PathBuf),
    /// A generated-looking file that the description no longer produces.
    Unexpected(PathBuf),
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::Missing(path) => write!(f, "missing: {}", path.display()),
            Drift::Changed(path) => write!(f, "out of date: {}", path.display()),
            Drift::Unexpected(path) => write!(f, "no longer generated: {}", path.display()),
        }
    }
}

/// Writes `files` under `out_dir`, skipping files whose contents are
/// unchanged and removing generated files that are no longer produced.
pub fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    let mut written = 0usize;
    for file in files {
        let path = out_dir.join(&file.path);
        if fs::read_to_string(&path).is_ok_and(|existing| existing == file.contents) {
            debug!(file = %file.path.display(), "unchanged");
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| CodegenError::io(parent, err))?;
        }
        fs::write(&path, &file.contents).map_err(|err| CodegenError::io(&path, err))?;
        written += 1;
    }

    let mut pruned = 0usize;
    for stale in stale_files(out_dir, files)? {
        let path = out_dir.join(&stale);
        fs::remove_file(&path).map_err(|err| CodegenError::io(&path, err))?;
        debug!(file = %stale.display(), "removed stale generated file");
        pruned += 1;
    }

    info!(
        out_dir = %out_dir.display(),
        written,
        unchanged = files.len() - written,
        pruned,
        "wrote generated sources"
    );
    Ok(())
}

/// Compares `files` with the contents of `out_dir` without writing.
pub fn check_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<Drift>> {
    let mut drift = Vec::new();
    for file in files {
        let path = out_dir.join(&file.path);
        match fs::read_to_string(&path) {
            Ok(existing) if existing == file.contents => {}
            Ok(_) => drift.push(Drift::Changed(file.path.clone())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                drift.push(Drift::Missing(file.path.clone()));
            }
            Err(err) => return Err(CodegenError::io(&path, err)),
        }
    }
    drift.extend(stale_files(out_dir, files)?.into_iter().map(Drift::Unexpected));
    drift.sort();
    Ok(drift)
}

/// Generated files on disk, under the directories `files` write into, that
/// `files` does not contain. Hand-written files are never reported.
fn stale_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let expected: BTreeSet<&Path> = files.iter().map(|f| f.path.as_path()).collect();
    let dirs: BTreeSet<&Path> = files
        .iter()
        .filter_map(|f| f.path.parent())
        .collect();

    let mut stale = Vec::new();
    for dir in dirs {
        let entries = match fs::read_dir(out_dir.join(dir)) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => return Err(CodegenError::io(out_dir.join(dir), err)),
        };
        for entry in entries {
            let entry = entry.map_err(|err| CodegenError::io(out_dir.join(dir), err))?;
            let relative = dir.join(entry.file_name());
            let is_source = relative.extension().is_some_and(|ext| ext == "rs");
            if !is_source || expected.contains(relative.as_path()) {
                continue;
            }
            let contents = fs::read_to_string(entry.path()).unwrap_or_default();
            if contents.starts_with(GENERATED_MARKER) {
                stale.push(relative);
            }
        }
    }
    stale.sort();
    Ok(stale)
}
