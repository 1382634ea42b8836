mod common;

use std::path::PathBuf;

use common::demo_files;
use pretty_assertions::assert_eq;
use quote::quote;
use syn::{Fields, ImplItem, Item, ItemStruct};
use sysmgr_codegen::emit::GENERATED_MARKER;
use sysmgr_codegen::{GeneratedFile, naming};

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a GeneratedFile {
    files
        .iter()
        .find(|f| f.path == PathBuf::from(path))
        .unwrap_or_else(|| panic!("{path} was not generated"))
}

fn parse(file: &GeneratedFile) -> syn::File {
    syn::parse_file(&file.contents).unwrap()
}

fn structure<'a>(ast: &'a syn::File, name: &str) -> &'a ItemStruct {
    ast.items
        .iter()
        .find_map(|item| match item {
            Item::Struct(s) if s.ident == name => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| panic!("struct {name} not found"))
}

fn field_names(item: &ItemStruct) -> Vec<String> {
    let Fields::Named(named) = &item.fields else {
        return Vec::new();
    };
    named
        .named
        .iter()
        .map(|f| f.ident.as_ref().unwrap().to_string())
        .collect()
}

fn attr_tokens(item: &ItemStruct, field: &str, attr: &str) -> Option<String> {
    let Fields::Named(named) = &item.fields else {
        return None;
    };
    let field = named
        .named
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|i| i == field))?;
    field
        .attrs
        .iter()
        .find(|a| a.path().is_ident(attr))
        .map(|a| a.meta.require_list().unwrap().tokens.to_string())
}

// ── File set ─────────────────────────────────────────────────────

#[test]
fn one_file_per_type_and_operation() {
    let mut paths: Vec<String> = demo_files()
        .iter()
        .map(|f| f.path.to_string_lossy().replace('\\', "/"))
        .collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "client.rs",
            "metadata.rs",
            "operation/get_widget.rs",
            "operation/mod.rs",
            "operation/put_widget.rs",
            "types/mod.rs",
            "types/widget.rs",
            "types/widget_kind.rs",
        ]
    );
}

#[test]
fn every_file_parses_and_carries_the_header() {
    for file in demo_files() {
        parse(&file);
        assert!(
            file.contents
                .starts_with(&format!("{GENERATED_MARKER} from demo.json. DO NOT EDIT.")),
            "{}",
            file.path.display()
        );
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(demo_files(), demo_files());
}

// ── Entities ─────────────────────────────────────────────────────

#[test]
fn shared_structure_fields() {
    let files = demo_files();
    let widget = file(&files, "types/widget.rs");
    let ast = parse(widget);
    let item = structure(&ast, "Widget");
    assert_eq!(
        field_names(item),
        vec!["widget_id", "sizes", "created_at", "parts"]
    );
    assert_eq!(
        attr_tokens(item, "widget_id", "field").unwrap(),
        quote!(min_len = 3, max_len = 12, pattern = "^w-[0-9]+$").to_string()
    );
    assert_eq!(
        attr_tokens(item, "sizes", "field").unwrap(),
        quote!(max_len = 4).to_string()
    );
    assert_eq!(attr_tokens(item, "created_at", "field"), None);
    // The list of itself needs no import of itself.
    assert!(!widget.contents.contains("use crate::types::Widget"));
    assert!(widget.contents.contains("use sysmgr_model::{Entity, Timestamp};"));
}

#[test]
fn renamed_and_keyword_members() {
    let files = demo_files();
    let ast = parse(file(&files, "operation/put_widget.rs"));
    let request = structure(&ast, "PutWidgetRequest");
    assert_eq!(
        field_names(request),
        vec!["widget", "arn", "r#type", "labels"]
    );
    assert_eq!(
        attr_tokens(request, "arn", "serde").unwrap(),
        quote!(rename = "ARN", skip_serializing_if = "Option::is_none").to_string()
    );
    assert_eq!(
        attr_tokens(request, "widget", "field").unwrap(),
        quote!(required).to_string()
    );
}

#[test]
fn operation_module_holds_marker_impl_and_owned_entities() {
    let files = demo_files();
    let put = file(&files, "operation/put_widget.rs");
    let ast = parse(put);
    structure(&ast, "PutWidget");
    structure(&ast, "PutWidgetRequest");
    structure(&ast, "PutWidgetResult");

    let name = ast
        .items
        .iter()
        .find_map(|item| match item {
            Item::Impl(imp) => imp.items.iter().find_map(|i| match i {
                ImplItem::Const(c) if c.ident == "NAME" => Some(c.expr.clone()),
                _ => None,
            }),
            _ => None,
        })
        .unwrap();
    assert_eq!(quote!(#name).to_string(), quote!("PutWidget").to_string());
    assert!(put.contents.contains("use crate::types::{Widget, WidgetKind};"));
    assert!(put.contents.contains("use std::collections::BTreeMap;"));

    // GetWidget returns the shared Widget, so only its request lives here.
    let get = file(&files, "operation/get_widget.rs");
    assert!(get.contents.contains("use crate::types::Widget;"));
    assert!(!get.contents.contains("pub struct Widget "));
}

#[test]
fn operation_errors_become_a_wire_enum() {
    let files = demo_files();
    let get = &file(&files, "operation/get_widget.rs").contents;
    assert!(get.contains("    type Error = GetWidgetError;\n"));
    assert!(get.contains(
        "sysmgr_model::wire_enum! {\n    \
         /// Error codes GetWidget is documented to return.\n    \
         pub enum GetWidgetError {\n        \
         /// No widget has the requested id.\n        \
         WidgetNotFound = \"WidgetNotFound\",\n        \
         Throttled = \"Throttled\",\n    \
         }\n}"
    ));
    // Exceptions are error codes, never entities of their own.
    assert!(!get.contains("pub struct WidgetNotFound"));
    assert!(files.iter().all(|f| !f.path.ends_with("widget_not_found.rs")));

    // An operation with no documented errors still gets a type to carry
    // whatever code the service answers with.
    let put = &file(&files, "operation/put_widget.rs").contents;
    assert!(put.contains("    pub enum PutWidgetError {\n    }\n"));
}

#[test]
fn enum_file_uses_wire_enum() {
    let files = demo_files();
    let kind = &file(&files, "types/widget_kind.rs").contents;
    assert!(kind.contains("sysmgr_model::wire_enum! {"));
    assert!(kind.contains("    /// Widget size class.\n"));
    assert!(kind.contains("        IntelligentTiering = \"Intelligent-Tiering\",\n"));
    assert!(kind.contains("        UnknownValue = \"Unknown\",\n"));
}

// ── Indexes, client and metadata ─────────────────────────────────

#[test]
fn module_indexes_flatten_exports() {
    let files = demo_files();
    let operations = &file(&files, "operation/mod.rs").contents;
    assert!(operations.contains("mod get_widget;\nmod put_widget;"));
    assert!(operations.contains(
        "pub use get_widget::GetWidget;\n\
         pub use get_widget::GetWidgetError;\n\
         pub use get_widget::GetWidgetRequest;\n\
         pub use put_widget::PutWidget;\n\
         pub use put_widget::PutWidgetError;\n\
         pub use put_widget::PutWidgetRequest;\n\
         pub use put_widget::PutWidgetResult;"
    ));

    let types = &file(&files, "types/mod.rs").contents;
    assert!(types.contains("pub use widget::Widget;\npub use widget_kind::WidgetKind;"));
}

#[test]
fn client_has_one_method_per_operation() {
    let files = demo_files();
    let ast = parse(file(&files, "client.rs"));
    structure(&ast, &naming::client_name("Demo"));

    let signatures: Vec<&syn::Signature> = ast
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(imp) => Some(imp),
            _ => None,
        })
        .flat_map(|imp| imp.items.iter())
        .filter_map(|item| match item {
            ImplItem::Fn(f) => Some(&f.sig),
            _ => None,
        })
        .collect();
    let methods: Vec<String> = signatures.iter().map(|sig| sig.ident.to_string()).collect();
    assert_eq!(
        methods,
        vec!["new", "with_config", "dispatcher", "get_widget", "put_widget"]
    );

    // Failures carry the operation's own error codes.
    let output = &signatures[3].output;
    assert_eq!(
        quote!(#output).to_string(),
        quote!(-> CallResult<GetWidget, T>).to_string()
    );
}

#[test]
fn metadata_constants() {
    let files = demo_files();
    let ast = parse(file(&files, "metadata.rs"));
    let consts: Vec<(String, String)> = ast
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Const(c) => {
                let expr = &c.expr;
                Some((c.ident.to_string(), quote!(#expr).to_string()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        consts,
        vec![
            ("SERVICE_ID".to_string(), "\"Demo\"".to_string()),
            ("SERVICE_FULL_NAME".to_string(), "\"Demo Widget Service\"".to_string()),
            ("TARGET_PREFIX".to_string(), "\"DemoService\"".to_string()),
            ("API_VERSION".to_string(), "\"2024-01-01\"".to_string()),
        ]
    );
}
