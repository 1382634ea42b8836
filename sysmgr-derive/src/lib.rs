//! `#[derive(Entity)]`: the per-field boilerplate of a model object.
//!
//! Every field must be an `Option<_>`. For a field `name: Option<T>` the
//! derive emits `name()`, `set_name()` and `with_name()`, plus
//! `append_name()` for lists and `put_name_entry()` / `clear_name_entries()`
//! for maps, then the structural trait impls (`PartialEq`, `Eq`, `Hash`,
//! `Display`) and the `sysmgr_model` contract traits.
//!
//! Field attributes:
//!
//! ```text
//! #[field(rename = "ARN", required, min_len = 1, max_len = 128,
//!         min = 30, max = 2592000, pattern = "^[a-z]+$")]
//! ```
//!
//! Without `rename`, the wire name is taken from `#[serde(rename = "..")]`
//! or, failing that, the PascalCase form of the member name.

use proc_macro::TokenStream;

mod attr;
mod entity;
mod ty;

#[proc_macro_derive(Entity, attributes(field))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}
