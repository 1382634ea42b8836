//! Turns a [`ResolvedService`] into source files.
//!
//! Layout under the output directory:
//!
//! - `metadata.rs`: service identity constants
//! - `client.rs`: one method per operation
//! - `types/`: shared entities and enumerations, one file each
//! - `operation/`: one file per operation with its marker type and the
//!   request and result entities only it uses

mod client;
mod imports;
mod operation;
mod types;

use std::path::PathBuf;

use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::error::Result;
use crate::format;
use crate::naming;
use crate::resolve::ResolvedService;

pub(crate) use imports::Imports;

/// First line of every generated file. Files starting with it are owned
/// by the generator and may be pruned.
pub const GENERATED_MARKER: &str = "// Code generated by sysmgr-codegen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// File name of the description, quoted in file headers.
    pub source_name: String,
    /// Run `rustfmt` over the output.
    pub format: bool,
}

impl GenerateOptions {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            format: true,
        }
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }
}

/// A file ready to be written, with `path` relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// A file before its header is attached and it is formatted.
pub(crate) struct Draft {
    pub path: PathBuf,
    pub imports: Imports,
    pub items: Vec<String>,
}

impl Draft {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            imports: Imports::default(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: TokenStream) {
        self.items.push(item.to_string());
    }

    pub fn push_text(&mut self, item: String) {
        self.items.push(item);
    }

    fn render(&self, options: &GenerateOptions) -> String {
        let mut out = format!(
            "{GENERATED_MARKER} from {}. DO NOT EDIT.\n\n",
            options.source_name
        );
        let imports = self.imports.render();
        if !imports.is_empty() {
            out.push_str(&imports);
            out.push('\n');
        }
        out.push_str(&self.items.join("\n\n"));
        out.push('\n');
        out
    }
}

pub fn generate(service: &ResolvedService, options: &GenerateOptions) -> Result<Vec<GeneratedFile>> {
    let mut drafts = vec![client::metadata_file(service), client::client_file(service)];

    let mut type_modules = Vec::new();
    for structure in service.shared_structures() {
        let module = naming::module_name(&structure.name);
        drafts.push(types::structure_file(&module, structure));
        type_modules.push((module, vec![structure.name.clone()]));
    }
    for enumeration in &service.enums {
        let module = naming::module_name(&enumeration.name);
        drafts.push(types::enum_file(&module, enumeration));
        type_modules.push((module, vec![enumeration.name.clone()]));
    }
    drafts.push(index_file("types/mod.rs", type_modules));

    let mut operation_modules = Vec::new();
    for op in &service.operations {
        let module = naming::module_name(&op.name);
        drafts.push(operation::operation_file(service, &module, op));
        let mut exports = vec![op.name.clone(), op.error_type.clone()];
        exports.extend(service.owned_structures(op).map(|s| s.name.clone()));
        operation_modules.push((module, exports));
    }
    drafts.push(index_file("operation/mod.rs", operation_modules));

    let files = drafts
        .into_iter()
        .map(|draft| {
            let text = draft.render(options);
            let contents = format::finish(&draft.path, text, options.format)?;
            debug!(file = %draft.path.display(), bytes = contents.len(), "generated file");
            Ok(GeneratedFile {
                path: draft.path,
                contents,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        service = %service.service_id,
        files = files.len(),
        "generated sources"
    );
    Ok(files)
}

/// `mod x;` for every module, then one `pub use x::Name;` per export, in
/// the order rustfmt sorts them.
fn index_file(path: &str, mut modules: Vec<(String, Vec<String>)>) -> Draft {
    modules.sort();
    for (_, names) in &mut modules {
        names.sort();
    }
    let mut draft = Draft::new(path);
    let declarations: Vec<String> = modules
        .iter()
        .map(|(module, _)| format!("mod {module};"))
        .collect();
    let exports: Vec<String> = modules
        .iter()
        .flat_map(|(module, names)| {
            names
                .iter()
                .map(move |name| format!("pub use {module}::{name};"))
        })
        .collect();
    draft.push_text(declarations.join("\n"));
    draft.push_text(exports.join("\n"));
    draft
}

/// `#[doc]` attributes for free text, one per line.
pub(crate) fn doc_attrs(text: Option<&str>) -> TokenStream {
    let Some(text) = text else {
        return TokenStream::new();
    };
    let lines = text.lines().map(|line| {
        let line = if line.trim().is_empty() {
            String::new()
        } else {
            format!(" {}", line.trim_end())
        };
        quote!(#[doc = #line])
    });
    quote!(#(#lines)*)
}

/// `///` comment lines for text that is emitted verbatim.
pub(crate) fn doc_lines(text: Option<&str>, indent: &str) -> String {
    let Some(text) = text else {
        return String::new();
    };
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                format!("{indent}///\n")
            } else {
                format!("{indent}/// {}\n", line.trim_end())
            }
        })
        .collect()
}

/// An `impl` block whose items are separated by blank lines.
pub(crate) fn impl_block(header: TokenStream, items: Vec<TokenStream>) -> String {
    let body: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("{header} {{\n{}\n}}", body.join("\n\n"))
}
