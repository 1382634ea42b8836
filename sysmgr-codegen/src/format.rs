//! Syntax check and pretty-printing of generated sources.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use crate::error::{CodegenError, Result};

static RUSTFMT_MISSING: AtomicBool = AtomicBool::new(false);

/// Parses `source` with syn and, when `format` is set, runs it through
/// `rustfmt` and rewrites `#[doc = ".."]` attributes as `///` comments.
pub fn finish(path: &Path, source: String, format: bool) -> Result<String> {
    syn::parse_file(&source).map_err(|source| CodegenError::InvalidOutput {
        file: path.to_path_buf(),
        source,
    })?;
    if !format {
        return Ok(source);
    }
    match rustfmt(&source)? {
        Some(formatted) => Ok(doc_attrs_to_comments(&formatted)),
        None => Ok(source),
    }
}

/// `Ok(None)` when `rustfmt` is not installed.
fn rustfmt(source: &str) -> Result<Option<String>> {
    if RUSTFMT_MISSING.load(Ordering::Relaxed) {
        return Ok(None);
    }
    let mut child = match Command::new("rustfmt")
        .args(["--edition", "2024"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if !RUSTFMT_MISSING.swap(true, Ordering::Relaxed) {
                warn!("rustfmt not found; generated sources are left unformatted");
            }
            return Ok(None);
        }
        Err(err) => return Err(CodegenError::io("rustfmt", err)),
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(source.as_bytes())
            .map_err(|err| CodegenError::io("rustfmt", err))?;
    }
    let output = child
        .wait_with_output()
        .map_err(|err| CodegenError::io("rustfmt", err))?;
    if !output.status.success() {
        return Err(CodegenError::Format(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    String::from_utf8(output.stdout)
        .map(Some)
        .map_err(|err| CodegenError::Format(err.to_string()))
}

/// Rewrites every line that is exactly one `#[doc = ..]` attribute.
pub fn doc_attrs_to_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        let indent = &line[..line.len() - line.trim_start().len()];
        match doc_text(line.trim()) {
            Some(text) if text.is_empty() => {
                out.push_str(indent);
                out.push_str("///");
            }
            Some(text) => {
                out.push_str(indent);
                out.push_str("///");
                out.push_str(&text);
            }
            None => out.push_str(line),
        }
        out.push('\n');
    }
    out
}

fn doc_text(line: &str) -> Option<String> {
    let literal = line.strip_prefix("#[doc = ")?.strip_suffix(']')?;
    if let Some(raw) = literal.strip_prefix('r') {
        let hashes = raw.len() - raw.trim_start_matches('#').len();
        let fence = "#".repeat(hashes);
        let body = raw
            .strip_prefix(&fence)?
            .strip_prefix('"')?
            .strip_suffix(&fence)?
            .strip_suffix('"')?;
        return (!body.contains('\n')).then(|| body.to_string());
    }
    unescape(literal.strip_prefix('"')?.strip_suffix('"')?)
}

/// Undoes the escapes a string literal token may carry. `None` for
/// anything unexpected, which leaves the attribute untouched.
fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            if ch == '"' {
                return None;
            }
            out.push(ch);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            't' => out.push('\t'),
            'u' => {
                let rest: String = chars.by_ref().take_while(|c| *c != '}').collect();
                let code = u32::from_str_radix(rest.strip_prefix('{')?, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_attributes_become_comments() {
        let source = "#[doc = \" Runs a command.\"]\n\
                      pub struct SendCommand;\n    \
                      #[doc = \"\"]\n    \
                      #[doc = r\" Raw \\d+ text.\"]\n    \
                      #[doc = \" Quoted \\\"value\\\".\"]\n";
        assert_eq!(
            doc_attrs_to_comments(source),
            "/// Runs a command.\n\
             pub struct SendCommand;\n    \
             ///\n    \
             /// Raw \\d+ text.\n    \
             /// Quoted \"value\".\n"
        );
    }

    #[test]
    fn other_attributes_are_untouched() {
        let source = "#[serde(rename = \"ARN\")]\n#[doc = \"bad \\q escape\"]\n";
        assert_eq!(doc_attrs_to_comments(source), source);
    }

    #[test]
    fn unparsable_output_is_rejected() {
        let err = finish(Path::new("types/broken.rs"), "pub struct {".to_string(), false)
            .unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOutput { .. }));
    }
}
