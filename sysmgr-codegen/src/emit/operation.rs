use proc_macro2::{Ident, Span};
use quote::quote;

use super::types::{EnumVariant, structure_tokens, wire_enum_text};
use super::{Draft, doc_attrs};
use crate::resolve::{ResolvedOperation, ResolvedService};

/// Marker type, its `Operation` impl, its error codes, and the entities only
/// it uses.
pub(super) fn operation_file(service: &ResolvedService, module: &str, op: &ResolvedOperation) -> Draft {
    let mut draft = Draft::new(format!("operation/{module}.rs"));
    draft.imports.external("sysmgr_model", "Operation");

    let ident = Ident::new(&op.name, Span::call_site());
    let docs = doc_attrs(op.documentation.as_deref());
    draft.push(quote! {
        #docs
        #[derive(Debug, Clone, Copy, Default)]
        pub struct #ident;
    });

    for shape in [&op.input, &op.output] {
        let owned = service
            .structure(shape)
            .is_some_and(|s| s.owner.as_deref() == Some(op.name.as_str()));
        if !owned {
            draft.imports.local("crate::types", shape);
        }
    }

    let name = &op.name;
    let input = Ident::new(&op.input, Span::call_site());
    let output = Ident::new(&op.output, Span::call_site());
    let error = Ident::new(&op.error_type, Span::call_site());
    draft.push(quote! {
        impl Operation for #ident {
            const NAME: &'static str = #name;
            type Input = #input;
            type Output = #output;
            type Error = #error;
        }
    });

    let error_docs = format!("Error codes {} is documented to return.", op.name);
    let variants = op.errors.iter().map(|error| EnumVariant {
        name: &error.variant,
        value: &error.code,
        documentation: error.documentation.as_deref(),
    });
    draft.push_text(wire_enum_text(&op.error_type, Some(&error_docs), variants));

    for structure in service.owned_structures(op) {
        let tokens = structure_tokens(structure, &mut draft.imports);
        draft.push(tokens);
    }
    draft
}
