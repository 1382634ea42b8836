use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, Type};

use crate::attr::FieldAttrs;
use crate::ty::{FieldShape, classify, option_inner};

pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

///
/// EntityField
///

struct EntityField<'a> {
    ident: &'a Ident,
    /// Member name without the raw prefix.
    member: String,
    wire: String,
    /// `T` of the `Option<T>` field.
    inner: &'a Type,
    attrs: FieldAttrs,
}

impl<'a> EntityField<'a> {
    fn parse(field: &'a Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.as_ref() else {
            return Err(Error::new_spanned(field, "Entity fields must be named"));
        };
        let Some(inner) = option_inner(&field.ty) else {
            return Err(Error::new_spanned(
                &field.ty,
                "Entity fields must be Option<_> so that absence is representable",
            ));
        };
        let attrs = FieldAttrs::parse(&field.attrs)?;
        let member = ident.unraw().to_string();
        let wire = attrs.rename.clone().unwrap_or_else(|| pascal_case(&member));

        Ok(Self {
            ident,
            member,
            wire,
            inner,
            attrs,
        })
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Entity cannot be derived for generic structs",
        ));
    }
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "Entity can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "Entity can only be derived for structs with named fields",
        ));
    };

    let fields = named
        .named
        .iter()
        .map(EntityField::parse)
        .collect::<syn::Result<Vec<_>>>()?;

    let entity_name = ident.to_string();
    let accessors = fields.iter().map(accessors);
    let field_schemas = fields.iter().map(field_schema);
    let eq_checks = fields.iter().map(|field| {
        let ident = field.ident;
        quote!(::sysmgr_model::__private::eq_present(&self.#ident, &other.#ident))
    });
    let field_values = fields.iter().map(|field| {
        let ident = field.ident;
        quote!(self.#ident.as_ref().map(|value| value as &dyn ::sysmgr_model::FieldValue))
    });

    Ok(quote! {
        impl #ident {
            #(#accessors)*
        }

        impl ::std::cmp::PartialEq for #ident {
            fn eq(&self, other: &Self) -> bool {
                true #(&& #eq_checks)*
            }
        }

        impl ::std::cmp::Eq for #ident {}

        impl ::std::hash::Hash for #ident {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(::sysmgr_model::HashCode::hash_code(self));
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::sysmgr_model::__private::render_fields(self, f)
            }
        }

        impl ::sysmgr_model::HashCode for #ident {
            fn hash_code(&self) -> i32 {
                ::sysmgr_model::__private::structural_hash(self)
            }
        }

        impl ::sysmgr_model::Render for #ident {
            fn render(&self, out: &mut dyn ::std::fmt::Write) -> ::std::fmt::Result {
                ::sysmgr_model::__private::render_fields(self, out)
            }
        }

        impl ::sysmgr_model::FieldKind for #ident {
            fn field_type() -> ::sysmgr_model::FieldType {
                ::sysmgr_model::FieldType::Structure(#entity_name)
            }
        }

        impl ::sysmgr_model::FieldValue for #ident {
            fn check(
                &self,
                _: &::sysmgr_model::Constraints,
                path: &str,
                report: &mut ::std::vec::Vec<::sysmgr_model::Violation>,
            ) {
                ::sysmgr_model::validate::check_entity(self, path, report);
            }
        }

        impl ::sysmgr_model::Entity for #ident {
            fn schema() -> &'static ::sysmgr_model::EntitySchema {
                static SCHEMA: ::std::sync::OnceLock<::sysmgr_model::EntitySchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| ::sysmgr_model::EntitySchema {
                    name: #entity_name,
                    fields: ::std::vec![#(#field_schemas),*],
                })
            }

            fn field_values(
                &self,
            ) -> ::std::vec::Vec<::std::option::Option<&dyn ::sysmgr_model::FieldValue>> {
                ::std::vec![#(#field_values),*]
            }
        }
    })
}

fn accessors(field: &EntityField) -> TokenStream {
    let ident = field.ident;
    let inner = field.inner;
    let wire = &field.wire;
    let set = format_ident!("set_{}", field.member);
    let with = format_ident!("with_{}", field.member);

    let get_doc = format!("Returns `{wire}`, or `None` when absent.");
    let set_doc = format!("Sets `{wire}`; `None` makes it absent.");
    let with_doc = format!("Sets `{wire}` and returns the entity for chaining.");

    let setter = quote! {
        #[doc = #set_doc]
        pub fn #set(&mut self, value: ::std::option::Option<#inner>) {
            self.#ident = value;
        }
    };

    match classify(inner) {
        FieldShape::Str => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&str> {
                self.#ident.as_deref()
            }

            #setter

            #[doc = #with_doc]
            pub fn #with(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.#ident = ::std::option::Option::Some(value.into());
                self
            }
        },
        FieldShape::Copy => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<#inner> {
                self.#ident
            }

            #setter

            #[doc = #with_doc]
            pub fn #with(mut self, value: impl ::std::convert::Into<#inner>) -> Self {
                self.#ident = ::std::option::Option::Some(value.into());
                self
            }
        },
        FieldShape::List(element) => {
            let append = format_ident!("append_{}", field.member);
            let append_doc = format!(
                "Appends to `{wire}` in order, creating the list if absent."
            );
            quote! {
                #[doc = #get_doc]
                pub fn #ident(&self) -> ::std::option::Option<&[#element]> {
                    self.#ident.as_deref()
                }

                #setter

                #[doc = #with_doc]
                ///
                /// Replaces any existing list.
                pub fn #with<I>(mut self, values: I) -> Self
                where
                    I: ::std::iter::IntoIterator,
                    I::Item: ::std::convert::Into<#element>,
                {
                    self.#ident = ::std::option::Option::Some(
                        values.into_iter().map(::std::convert::Into::into).collect(),
                    );
                    self
                }

                #[doc = #append_doc]
                pub fn #append<I>(mut self, values: I) -> Self
                where
                    I: ::std::iter::IntoIterator,
                    I::Item: ::std::convert::Into<#element>,
                {
                    ::sysmgr_model::__private::append(&mut self.#ident, values);
                    self
                }
            }
        }
        FieldShape::Map(value) => {
            let put = format_ident!("put_{}_entry", field.member);
            let clear = format_ident!("clear_{}_entries", field.member);
            let put_doc = format!(
                "Adds one entry to `{wire}`, creating the map if absent. Fails without \
                 touching the map when the key is already present."
            );
            let clear_doc = format!("Removes every entry from `{wire}`, making it absent.");
            quote! {
                #[doc = #get_doc]
                pub fn #ident(&self) -> ::std::option::Option<&#inner> {
                    self.#ident.as_ref()
                }

                #setter

                #[doc = #with_doc]
                ///
                /// Replaces any existing map.
                pub fn #with<I, K, V>(mut self, entries: I) -> Self
                where
                    I: ::std::iter::IntoIterator<Item = (K, V)>,
                    K: ::std::convert::Into<::std::string::String>,
                    V: ::std::convert::Into<#value>,
                {
                    self.#ident = ::std::option::Option::Some(
                        ::sysmgr_model::__private::collect_entries(entries),
                    );
                    self
                }

                #[doc = #put_doc]
                pub fn #put(
                    &mut self,
                    key: impl ::std::convert::Into<::std::string::String>,
                    value: impl ::std::convert::Into<#value>,
                ) -> ::std::result::Result<&mut Self, ::sysmgr_model::DuplicateKeyError> {
                    ::sysmgr_model::__private::put_entry(
                        &mut self.#ident,
                        #wire,
                        key.into(),
                        value.into(),
                    )?;
                    ::std::result::Result::Ok(self)
                }

                #[doc = #clear_doc]
                pub fn #clear(&mut self) -> &mut Self {
                    self.#ident = ::std::option::Option::None;
                    self
                }
            }
        }
        FieldShape::Other => quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&#inner> {
                self.#ident.as_ref()
            }

            #setter

            #[doc = #with_doc]
            pub fn #with(mut self, value: impl ::std::convert::Into<#inner>) -> Self {
                self.#ident = ::std::option::Option::Some(value.into());
                self
            }
        },
    }
}

fn field_schema(field: &EntityField) -> TokenStream {
    let inner = field.inner;
    let wire = &field.wire;
    let member = &field.member;
    let required = field.attrs.required;
    let min_len = optional(field.attrs.min_len);
    let max_len = optional(field.attrs.max_len);
    let min = optional(field.attrs.min);
    let max = optional(field.attrs.max);
    let pattern = optional(field.attrs.pattern.as_deref());

    quote! {
        ::sysmgr_model::FieldSchema {
            name: #wire,
            member: #member,
            field_type: <#inner as ::sysmgr_model::FieldKind>::field_type(),
            required: #required,
            constraints: ::sysmgr_model::Constraints {
                min_len: #min_len,
                max_len: #max_len,
                min: #min,
                max: #max,
                pattern: #pattern,
                allowed: <#inner as ::sysmgr_model::FieldKind>::allowed_values(),
            },
        }
    }
}

fn optional<T: ToTokens>(value: Option<T>) -> TokenStream {
    match value {
        Some(value) => quote!(::std::option::Option::Some(#value)),
        None => quote!(::std::option::Option::None),
    }
}

/// Serde's `rename_all = "PascalCase"` rule: drop underscores and
/// upper-case the first letter of each word.
fn pascal_case(member: &str) -> String {
    let mut out = String::with_capacity(member.len());
    let mut capitalize = true;
    for ch in member.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            out.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_matches_serde() {
        assert_eq!(pascal_case("document_name"), "DocumentName");
        assert_eq!(pascal_case("output_s3_bucket_name"), "OutputS3BucketName");
        assert_eq!(pascal_case("type"), "Type");
        assert_eq!(pascal_case("arn"), "Arn");
    }

    #[test]
    fn rejects_non_option_fields() {
        let input = quote! {
            struct Broken {
                name: String,
            }
        };
        let output = derive_entity(input).to_string();
        assert!(output.contains("compile_error"));
    }

    #[test]
    fn rejects_tuple_structs() {
        let input = quote! {
            struct Broken(Option<String>);
        };
        let output = derive_entity(input).to_string();
        assert!(output.contains("compile_error"));
    }

    #[test]
    fn emits_accessors_for_map_fields() {
        let input = quote! {
            struct Request {
                #[field(max_len = 5)]
                parameters: Option<BTreeMap<String, Vec<String>>>,
            }
        };
        let output = derive_entity(input).to_string();
        assert!(output.contains("put_parameters_entry"));
        assert!(output.contains("clear_parameters_entries"));
        assert!(output.contains("\"Parameters\""));
    }

    #[test]
    fn raw_identifiers_are_unrawed_for_method_names() {
        let input = quote! {
            struct Item {
                r#type: Option<String>,
            }
        };
        let output = derive_entity(input).to_string();
        assert!(output.contains("set_type"));
        assert!(output.contains("with_type"));
        assert!(output.contains("\"Type\""));
    }
}
