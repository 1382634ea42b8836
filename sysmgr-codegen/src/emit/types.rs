use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use super::{Draft, Imports, doc_attrs, doc_lines};
use crate::naming;
use crate::resolve::{MemberConstraints, ResolvedEnum, ResolvedMember, ResolvedStructure, RustType};

pub(super) fn structure_file(module: &str, structure: &ResolvedStructure) -> Draft {
    let mut draft = Draft::new(format!("types/{module}.rs"));
    let tokens = structure_tokens(structure, &mut draft.imports);
    draft.push(tokens);
    draft
}

pub(super) fn enum_file(module: &str, enumeration: &ResolvedEnum) -> Draft {
    let mut draft = Draft::new(format!("types/{module}.rs"));
    draft.push_text(enum_text(enumeration));
    draft
}

/// One variant of a `wire_enum!` invocation.
pub(super) struct EnumVariant<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub documentation: Option<&'a str>,
}

/// The entity struct for `structure`, recording the imports it needs.
pub(super) fn structure_tokens(structure: &ResolvedStructure, imports: &mut Imports) -> TokenStream {
    imports
        .external("serde", "Deserialize")
        .external("serde", "Serialize")
        .external("sysmgr_model", "Entity");

    let ident = Ident::new(&structure.name, Span::call_site());
    let docs = doc_attrs(structure.documentation.as_deref());
    let fields = structure
        .members
        .iter()
        .map(|member| field_tokens(&structure.name, member, imports));

    quote! {
        #docs
        #[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
        #[serde(rename_all = "PascalCase")]
        pub struct #ident {
            #(#fields),*
        }
    }
}

fn field_tokens(owner: &str, member: &ResolvedMember, imports: &mut Imports) -> TokenStream {
    let ident = naming::member_ident(&member.name);
    let ty = type_tokens(owner, &member.rust_type, imports);
    let docs = doc_attrs(member.documentation.as_deref());
    let serde = if member.rename {
        let wire = &member.wire;
        quote!(#[serde(rename = #wire, skip_serializing_if = "Option::is_none")])
    } else {
        quote!(#[serde(skip_serializing_if = "Option::is_none")])
    };
    let field = field_attr(member.required, &member.constraints);

    quote! {
        #docs
        #serde
        #field
        #ident: Option<#ty>
    }
}

/// `#[field(..)]`, or nothing when the member is optional and unconstrained.
fn field_attr(required: bool, constraints: &MemberConstraints) -> TokenStream {
    let mut options = Vec::new();
    if required {
        options.push(quote!(required));
    }
    if let Some(min_len) = constraints.min_len {
        let min_len = Literal::usize_unsuffixed(min_len);
        options.push(quote!(min_len = #min_len));
    }
    if let Some(max_len) = constraints.max_len {
        let max_len = Literal::usize_unsuffixed(max_len);
        options.push(quote!(max_len = #max_len));
    }
    if let Some(min) = constraints.min {
        let min = signed(min);
        options.push(quote!(min = #min));
    }
    if let Some(max) = constraints.max {
        let max = signed(max);
        options.push(quote!(max = #max));
    }
    if let Some(pattern) = &constraints.pattern {
        options.push(quote!(pattern = #pattern));
    }

    if options.is_empty() {
        TokenStream::new()
    } else {
        quote!(#[field(#(#options),*)])
    }
}

fn signed(value: i64) -> TokenStream {
    let magnitude = Literal::u64_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    }
}

/// Rust type for `rust_type`. `owner` names the struct being emitted, which
/// needs no import of itself.
pub(super) fn type_tokens(owner: &str, rust_type: &RustType, imports: &mut Imports) -> TokenStream {
    match rust_type {
        RustType::String => quote!(String),
        RustType::Integer => quote!(i32),
        RustType::Long => quote!(i64),
        RustType::Boolean => quote!(bool),
        RustType::Timestamp => {
            imports.external("sysmgr_model", "Timestamp");
            quote!(Timestamp)
        }
        RustType::List(inner) => {
            let inner = type_tokens(owner, inner, imports);
            quote!(Vec<#inner>)
        }
        RustType::Map(value) => {
            imports.std("std::collections", "BTreeMap");
            let value = type_tokens(owner, value, imports);
            quote!(BTreeMap<String, #value>)
        }
        RustType::Enum(name) | RustType::Structure(name) => {
            if name != owner {
                imports.local("crate::types", name);
            }
            let ident = Ident::new(name, Span::call_site());
            quote!(#ident)
        }
    }
}

fn enum_text(enumeration: &ResolvedEnum) -> String {
    let variants = enumeration
        .variants
        .iter()
        .map(|(variant, value)| EnumVariant {
            name: variant,
            value,
            documentation: None,
        });
    wire_enum_text(&enumeration.name, enumeration.documentation.as_deref(), variants)
}

/// A `wire_enum!` invocation. Macro bodies are left alone by rustfmt, so
/// this is laid out by hand.
pub(super) fn wire_enum_text<'a>(
    name: &str,
    documentation: Option<&str>,
    variants: impl IntoIterator<Item = EnumVariant<'a>>,
) -> String {
    let mut out = String::from("sysmgr_model::wire_enum! {\n");
    out.push_str(&doc_lines(documentation, "    "));
    out.push_str(&format!("    pub enum {name} {{\n"));
    for variant in variants {
        out.push_str(&doc_lines(variant.documentation, "        "));
        out.push_str(&format!("        {} = {:?},\n", variant.name, variant.value));
    }
    out.push_str("    }\n}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_text_lists_variants() {
        let enumeration = ResolvedEnum {
            name: "ParameterTier".to_string(),
            variants: vec![
                ("Standard".to_string(), "Standard".to_string()),
                ("IntelligentTiering".to_string(), "Intelligent-Tiering".to_string()),
            ],
            documentation: Some("Storage tier of a parameter.".to_string()),
        };
        assert_eq!(
            enum_text(&enumeration),
            "sysmgr_model::wire_enum! {\n    \
             /// Storage tier of a parameter.\n    \
             pub enum ParameterTier {\n        \
             Standard = \"Standard\",\n        \
             IntelligentTiering = \"Intelligent-Tiering\",\n    \
             }\n}"
        );
    }

    #[test]
    fn variant_docs_sit_inside_the_enum() {
        let text = wire_enum_text(
            "DeleteParameterError",
            Some("Error codes DeleteParameter is documented to return."),
            [EnumVariant {
                name: "ParameterNotFound",
                value: "ParameterNotFound",
                documentation: Some("The parameter could not be found."),
            }],
        );
        assert_eq!(
            text,
            "sysmgr_model::wire_enum! {\n    \
             /// Error codes DeleteParameter is documented to return.\n    \
             pub enum DeleteParameterError {\n        \
             /// The parameter could not be found.\n        \
             ParameterNotFound = \"ParameterNotFound\",\n    \
             }\n}"
        );
    }

    #[test]
    fn unconstrained_optional_member_has_no_field_attr() {
        assert!(field_attr(false, &MemberConstraints::default()).is_empty());
        let attr = field_attr(
            true,
            &MemberConstraints {
                min: Some(-1),
                max: Some(24),
                ..MemberConstraints::default()
            },
        );
        assert_eq!(
            attr.to_string(),
            quote!(#[field(required, min = -1, max = 24)]).to_string()
        );
    }
}
