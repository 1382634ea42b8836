//! Entity contract for the systems-management model layer.
//!
//! Every request, result and nested structure of a service binding is an
//! [`Entity`]: a plain struct whose fields are all `Option<_>`, so "absent"
//! and "present but empty" stay distinguishable. The contract is generated by
//! `#[derive(Entity)]`:
//! - per-field getters, `set_*`, `with_*` builders, `append_*` for lists,
//!   `put_*_entry` / `clear_*_entries` for maps
//! - presence-first structural equality and a portable structural hash
//! - `{Name: value,Other: value}` debug rendering
//! - static field metadata ([`EntitySchema`]) and opt-in validation against it
//!
//! Enumerations are declared with [`wire_enum!`]; operations and the
//! transport seam they are dispatched through live in [`Operation`],
//! [`Transport`] and [`Dispatcher`].

extern crate self as sysmgr_model;

mod entity;
mod error;
mod field;
mod operation;
mod schema;
pub mod validate;
mod wire_enum;

pub use entity::Entity;
pub use error::{DuplicateKeyError, ValidationError, Violation, ViolationKind};
pub use field::{FieldKind, FieldValue};
pub use operation::{
    CallResult, ClientConfig, ClientError, Dispatcher, Operation, ServiceError, Transport,
    ValidationMode,
};
pub use schema::{Constraints, EntitySchema, FieldSchema, FieldType};
pub use sysmgr_derive::Entity;
pub use sysmgr_types::{HashCode, Render, Timestamp, rendered};

/// Plumbing for code emitted by `#[derive(Entity)]` and `wire_enum!`.
#[doc(hidden)]
pub mod __private {
    pub use crate::entity::{render_fields, structural_hash};
    pub use crate::field::{append, collect_entries, eq_present, put_entry};
    pub use serde;
}
