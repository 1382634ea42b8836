use proc_macro2::{Ident, Span};
use quote::quote;

use super::{Draft, doc_attrs, impl_block};
use crate::naming;
use crate::resolve::ResolvedService;

pub(super) fn metadata_file(service: &ResolvedService) -> Draft {
    let mut draft = Draft::new("metadata.rs");
    let service_id = &service.service_id;
    let full_name = &service.service_full_name;
    let target_prefix = &service.target_prefix;
    let api_version = &service.api_version;

    draft.push(quote! {
        /// Short service identifier.
        pub const SERVICE_ID: &str = #service_id;
    });
    draft.push(quote! {
        /// Full service name.
        pub const SERVICE_FULL_NAME: &str = #full_name;
    });
    draft.push(quote! {
        /// Prefix of every operation target, `"{TARGET_PREFIX}.{Operation}"`.
        pub const TARGET_PREFIX: &str = #target_prefix;
    });
    draft.push(quote! {
        /// API version the binding was generated from.
        pub const API_VERSION: &str = #api_version;
    });
    draft
}

pub(super) fn client_file(service: &ResolvedService) -> Draft {
    let mut draft = Draft::new("client.rs");
    for name in ["CallResult", "ClientConfig", "Dispatcher", "Transport"] {
        draft.imports.external("sysmgr_model", name);
    }
    draft.imports.local("crate::metadata", "TARGET_PREFIX");

    let client = Ident::new(&naming::client_name(&service.service_id), Span::call_site());
    let summary = format!(" Client for {}.", service.service_full_name);
    let service_docs = doc_attrs(service.documentation.as_deref());
    let separator = service.documentation.as_ref().map(|_| quote!(#[doc = ""]));
    draft.push(quote! {
        #[doc = #summary]
        #separator
        #service_docs
        ///
        /// Every method dispatches one operation through the configured
        /// [`Transport`]. Requests are validated first only when the
        /// configuration asks for strict validation.
        #[derive(Debug, Clone)]
        pub struct #client<T> {
            dispatcher: Dispatcher<T>,
        }
    });

    let new_doc = format!(
        " Creates a client for `{}` with permissive validation.",
        service.target_prefix
    );
    let mut methods = vec![
        quote! {
            #[doc = #new_doc]
            pub fn new(transport: T) -> Self {
                Self::with_config(transport, ClientConfig::new(TARGET_PREFIX))
            }
        },
        quote! {
            /// Creates a client with explicit configuration.
            pub fn with_config(transport: T, config: ClientConfig) -> Self {
                Self {
                    dispatcher: Dispatcher::new(transport, config),
                }
            }
        },
        quote! {
            pub fn dispatcher(&self) -> &Dispatcher<T> {
                &self.dispatcher
            }
        },
    ];

    for op in &service.operations {
        draft.imports.local("crate::operation", &op.name);
        let owned = service
            .structure(&op.input)
            .is_some_and(|s| s.owner.as_deref() == Some(op.name.as_str()));
        let module = if owned { "crate::operation" } else { "crate::types" };
        draft.imports.local(module, &op.input);

        let marker = Ident::new(&op.name, Span::call_site());
        let method = naming::member_ident(&op.method);
        let input = Ident::new(&op.input, Span::call_site());
        let docs = doc_attrs(op.documentation.as_deref());
        methods.push(quote! {
            #docs
            pub fn #method(&self, request: &#input) -> CallResult<#marker, T> {
                self.dispatcher.call::<#marker>(request)
            }
        });
    }

    draft.push_text(impl_block(quote!(impl<T: Transport> #client<T>), methods));
    draft
}
